//! CLI command implementations

pub mod adjust;
pub mod contrast;
pub mod convert;
pub mod info;
pub mod mix;
pub mod rainbow;
pub mod random;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tinct_color::{ColorValue, Notation};

/// Global output settings shared by every command.
pub struct Output {
    pub format: Notation,
    pub json: bool,
    pub cmyk: bool,
}

impl Output {
    /// Parse a color argument, opting into CMYK when `--cmyk` was given.
    pub fn load(&self, notation: &str) -> Result<ColorValue> {
        let color = ColorValue::parse(notation)
            .with_context(|| format!("Failed to parse color: {notation}"))?;
        Ok(if self.cmyk { color.with_cmyk() } else { color })
    }

    /// Print one color in the chosen notation, or as a JSON object.
    pub fn color(&self, color: &ColorValue) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&self.to_json(color))?);
        } else {
            println!("{}", color.format(self.format));
        }
        Ok(())
    }

    /// Print a series, one per line, or as a JSON array.
    pub fn series(&self, colors: &[ColorValue]) -> Result<()> {
        if self.json {
            let items: Vec<Value> = colors.iter().map(|c| self.to_json(c)).collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        } else {
            for color in colors {
                println!("{}", color.format(self.format));
            }
        }
        Ok(())
    }

    /// Structured form of a color.
    pub fn to_json(&self, color: &ColorValue) -> Value {
        json!({
            "value": color.format(self.format),
            "hex": color.hexa(),
            "rgba": color.rgba(),
            "hsla": color.hsla(),
            "cmyk": color.cmyk(),
            "luminance": color.luminance(),
        })
    }
}

/// `Some(v)` as given, `None` as NaN so the library default applies.
pub fn or_default(amount: Option<f64>) -> f64 {
    amount.unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(cmyk: bool) -> Output {
        Output {
            format: Notation::Hex,
            json: false,
            cmyk,
        }
    }

    #[test]
    fn test_or_default() {
        assert!(or_default(None).is_nan());
        assert_eq!(or_default(Some(0.3)), 0.3);
        assert_eq!(or_default(Some(-45.0)), -45.0);
    }

    #[test]
    fn test_load_cmyk_opt_in() {
        let plain = output(false).load("#ff0000").unwrap();
        assert!(!plain.tracks_cmyk());
        let tracked = output(true).load("#ff0000").unwrap();
        assert!(tracked.tracks_cmyk());
        assert_eq!(tracked.hex(), "#ff0000");
    }

    #[test]
    fn test_load_error_names_input() {
        let err = output(false).load("#12").unwrap_err();
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn test_to_json() {
        let out = output(false);
        let value = out.to_json(&out.load("#ff0000").unwrap());
        assert_eq!(value["value"], "#ff0000");
        assert_eq!(value["hex"], "#ff0000ff");
        assert!(value["cmyk"].is_null());
    }
}
