//! Random perturbation command.

use crate::RandomArgs;
use crate::commands::Output;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tinct_color::RandomAmounts;
use tracing::info;

/// Prints `--count` perturbations of the input color.
pub fn run(args: RandomArgs, out: &Output) -> Result<()> {
    let mut color = out.load(&args.color)?;
    let amounts = match args.hue_only {
        Some(h) => RandomAmounts::hue(h),
        None => RandomAmounts {
            a: args.alpha,
            ..RandomAmounts::default()
        },
    };

    let colors: Vec<_> = match args.seed {
        Some(seed) => {
            info!(seed, "seeded random");
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count)
                .map(|_| color.random_with(&amounts, &mut rng))
                .collect()
        }
        None => (0..args.count).map(|_| color.random(&amounts)).collect(),
    };

    if colors.len() == 1 {
        out.color(&colors[0])
    } else {
        out.series(&colors)
    }
}
