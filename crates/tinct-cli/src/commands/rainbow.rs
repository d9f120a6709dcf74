//! Rainbow command: hue travel toward a target.

use crate::RainbowArgs;
use crate::commands::Output;
use anyhow::{Result, bail};
use tinct_color::indexer::series_index;
use tracing::debug;

/// Prints one rainbow step at `--strength`, or `--steps` evenly spaced ones.
pub fn run(args: RainbowArgs, out: &Output) -> Result<()> {
    let mut color = out.load(&args.color)?;
    let target = args.to.as_deref().map(|s| out.load(s)).transpose()?;
    let smart = !args.linear;
    debug!(direction = %args.direction, smart, steps = ?args.steps, "rainbow");

    match args.steps {
        None => out.color(&color.rainbow(args.strength, args.direction, target.as_ref(), smart)),
        Some(n) if n < 2 => bail!("A rainbow series needs at least 2 steps, got {}", n),
        Some(n) => {
            let colors: Vec<_> = (1..=n)
                .map(|pos| {
                    let strength = series_index(n, pos, 0.0);
                    color.rainbow(strength, args.direction, target.as_ref(), smart)
                })
                .collect();
            out.series(&colors)
        }
    }
}
