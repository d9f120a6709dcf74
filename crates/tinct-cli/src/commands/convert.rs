//! Notation conversion command.

use crate::ConvertArgs;
use crate::commands::Output;
use anyhow::Result;
use tracing::debug;

/// Parses the color and prints it in `--to`, falling back to `--format`.
pub fn run(args: ConvertArgs, out: &Output) -> Result<()> {
    let color = out.load(&args.color)?;
    let notation = args.to.unwrap_or(out.format);
    debug!(%notation, input = %args.color, "convert");
    let out = Output {
        format: notation,
        json: out.json,
        cmyk: out.cmyk,
    };
    out.color(&color)
}
