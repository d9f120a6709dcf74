//! WCAG contrast command.
//!
//! Without `--level` prints the raw ratio. With a level, prints the text
//! color adjusted to meet it. The ratio reached is logged at info level.

use crate::ContrastArgs;
use crate::commands::Output;
use anyhow::Result;
use serde_json::json;
use tinct_color::Contrast;
use tracing::{info, warn};

/// Runs the contrast command.
pub fn run(args: ContrastArgs, out: &Output) -> Result<()> {
    let mut text = out.load(&args.text)?;
    let background = out.load(&args.background)?;

    match text.ratio_for(&background, args.level.as_deref(), args.scale) {
        Contrast::Ratio(ratio) => {
            if let Some(level) = &args.level {
                warn!(%level, "unrecognized WCAG level, printing the raw ratio");
            }
            if out.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "ratio": ratio }))?);
            } else {
                println!("{ratio:.2}");
            }
            Ok(())
        }
        Contrast::Adjusted(adjusted) => {
            let ratio = adjusted.contrast_ratio(&background);
            info!(ratio, before = text.contrast_ratio(&background), "contrast adjusted");
            if out.json {
                let mut value = out.to_json(&adjusted);
                value["ratio"] = json!(ratio);
                println!("{}", serde_json::to_string_pretty(&value)?);
                Ok(())
            } else {
                out.color(&adjusted)
            }
        }
    }
}
