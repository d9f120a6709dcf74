//! Single-operation adjust command.
//!
//! | Op | Amount | Default |
//! |----|--------|---------|
//! | `lighten`, `darken` | fraction of the way to white/black | 1 |
//! | `saturate`, `desaturate`, `vivid`, `grey` | fraction | 1 |
//! | `opaque`, `transparent` | fraction | 1 |
//! | `rotate` | degrees, or a fraction of a turn in (-1, 1) | 180 |
//! | `hue` | degrees | 0 |
//! | `saturation`, `lightness` | percent | 100, 50 |
//! | `alpha` | 0..1 | 1 |
//! | `invert`, `complement` | - | - |

use crate::AdjustArgs;
use crate::commands::{Output, or_default};
use anyhow::{Result, bail};
use tinct_color::ColorValue;
use tracing::debug;

/// Runs the adjust command.
pub fn run(args: AdjustArgs, out: &Output) -> Result<()> {
    let mut color = out.load(&args.color)?;
    let amount = or_default(args.amount);
    let smart = !args.linear;
    debug!(op = %args.op, amount, smart, "adjust");

    let result = apply_op(&mut color, &args.op, amount, smart)?;
    out.color(&result)
}

/// Applies one named operation. `op` is matched case-insensitively.
pub fn apply_op(color: &mut ColorValue, op: &str, amount: f64, smart: bool) -> Result<ColorValue> {
    Ok(match op.to_ascii_lowercase().as_str() {
        "lighten" => color.lighten(amount, smart),
        "darken" => color.darken(amount, smart),
        "saturate" => color.saturate(amount),
        "desaturate" => color.desaturate(amount),
        "vivid" => color.vivid(amount),
        "grey" | "gray" => color.grey(amount),
        "rotate" => color.rotate(amount),
        "invert" => color.invert(),
        "complement" => color.complement(),
        "opaque" => color.opaque(amount),
        "transparent" => color.transparent(amount),
        "alpha" => color.set_alpha(amount),
        "hue" => color.set_hue(amount),
        "lightness" => color.set_lightness(amount),
        "saturation" => color.set_saturation(amount),
        other => bail!(
            "Unknown operation '{}'. Use: lighten, darken, saturate, desaturate, vivid, \
             grey, rotate, invert, complement, opaque, transparent, alpha, hue, \
             lightness, saturation",
            other
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorValue {
        ColorValue::parse("#ff0000").unwrap()
    }

    #[test]
    fn test_lighten_linear_and_default() {
        let mut black = ColorValue::parse("#000000").unwrap();
        assert_eq!(apply_op(&mut black, "lighten", 0.5, false).unwrap().hex(), "#808080");
        // no amount lightens all the way
        assert_eq!(apply_op(&mut black, "lighten", or_default(None), true).unwrap().hex(), "#ffffff");
    }

    #[test]
    fn test_hue_ops() {
        let mut c = red();
        assert_eq!(apply_op(&mut c, "rotate", 120.0, true).unwrap().hex(), "#00ff00");
        assert_eq!(apply_op(&mut c, "invert", f64::NAN, true).unwrap().hex(), "#00ffff");
        assert_eq!(apply_op(&mut c, "complement", f64::NAN, true).unwrap().hex(), "#00ffff");
        assert_eq!(apply_op(&mut c, "hue", 240.0, true).unwrap().hex(), "#0000ff");
    }

    #[test]
    fn test_op_is_case_insensitive() {
        let mut c = red();
        let upper = apply_op(&mut c, "GRAY", 1.0, true).unwrap();
        let lower = apply_op(&mut c, "grey", 1.0, true).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.saturation(), 0.0);
    }

    #[test]
    fn test_alpha_ops() {
        let mut c = red();
        assert_eq!(apply_op(&mut c, "alpha", 0.25, true).unwrap().alpha(), 0.25);
        assert_eq!(apply_op(&mut c, "transparent", 1.0, true).unwrap().alpha(), 0.0);
    }

    #[test]
    fn test_unknown_op() {
        let mut c = red();
        let err = apply_op(&mut c, "spin", 1.0, true).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown operation 'spin'"));
        assert!(msg.contains("lightness"));
        // the failed op leaves the color untouched
        assert_eq!(c.hex(), "#ff0000");
    }
}
