//! Two-color commands: blend, gradient and monotone.

use crate::commands::{Output, or_default};
use crate::{BlendArgs, GradientArgs, MonotoneArgs};
use anyhow::{Result, bail};
use tinct_color::indexer::series_index;
use tracing::debug;

/// Blends two colors halfway. A missing second color means black.
pub fn run_blend(args: BlendArgs, out: &Output) -> Result<()> {
    let mut a = out.load(&args.a)?;
    let b = args.b.as_deref().map(|s| out.load(s)).transpose()?;
    out.color(&a.blend(b.as_ref(), !args.linear))
}

/// Prints `--steps` colors from `from` to `to`, endpoints included.
pub fn run_gradient(args: GradientArgs, out: &Output) -> Result<()> {
    if args.steps < 2 {
        bail!("A gradient needs at least 2 steps, got {}", args.steps);
    }
    let mut from = out.load(&args.from)?;
    let to = out.load(&args.to)?;
    debug!(steps = args.steps, "gradient");

    let colors: Vec<_> = (1..=args.steps)
        .map(|pos| from.gradient(Some(&to), series_index(args.steps, pos, 0.0)))
        .collect();
    out.series(&colors)
}

/// Recolors through a tint.
pub fn run_monotone(args: MonotoneArgs, out: &Output) -> Result<()> {
    let mut color = out.load(&args.color)?;
    let tint = out.load(&args.tint)?;
    out.color(&color.monotone(&tint, or_default(args.strength)))
}
