//! Hex and functional notation codecs.
//!
//! These are the only color strings a color value understands on its own;
//! everything else goes through a [`crate::resolver::ColorResolver`].
//!
//! # Accepted input
//!
//! | Form | Example | Alpha |
//! |------|---------|-------|
//! | `#rrggbb` | `#ff8800`, `FF8800` | opaque |
//! | `#rrggbbaa` | `#ff880080` | `aa / 255` |
//! | `rgb()` / `rgba()` | `rgb(255, 136, 0)`, `rgba(255 136 0 / 0.5)` | optional 4th token |
//! | `hsl()` / `hsla()` | `hsl(32deg, 100%, 50%)` | optional 4th token |
//! | `cmyk()` / `cmyka()` | `cmyka(0, 47, 100, 0, 0.5)` | 5th token, `cmyka` only |
//!
//! Hex is case-insensitive and `#` is optional. Short `#rgb` is rejected.
//! Functional tokens may be separated by commas, whitespace or `/`, and may
//! carry `%` or `deg` suffixes. Token values are clamped into their domains.
//!
//! # Output
//!
//! [`Notation`] names the output forms. Numbers print without a trailing
//! `.0`; alpha prints with exactly one decimal.

use std::fmt;
use std::str::FromStr;

use tinct_core::numeric::{clamp_or, fraction_or, round_to, to_channel, wrap_hue};
use tinct_core::{Cmyk, Error, Hsla, Result, Rgba};

// ============================================================================
// Output notations
// ============================================================================

/// Output notation of a color string.
///
/// # Example
///
/// ```rust
/// use tinct_color::Notation;
///
/// let n: Notation = "HSLA".parse().unwrap();
/// assert_eq!(n, Notation::Hsla);
/// assert!(n.has_alpha());
/// assert!("lab".parse::<Notation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `#rrggbbaa`
    Hexa,
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)`
    Rgba,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)`
    Hsla,
    /// `cmyk(c,m,y,k)`
    Cmyk,
    /// `cmyka(c,m,y,k,a)`
    Cmyka,
}

impl Notation {
    /// Every notation, in display order.
    pub const ALL: [Notation; 8] = [
        Notation::Hex,
        Notation::Hexa,
        Notation::Rgb,
        Notation::Rgba,
        Notation::Hsl,
        Notation::Hsla,
        Notation::Cmyk,
        Notation::Cmyka,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Hexa => "hexa",
            Notation::Rgb => "rgb",
            Notation::Rgba => "rgba",
            Notation::Hsl => "hsl",
            Notation::Hsla => "hsla",
            Notation::Cmyk => "cmyk",
            Notation::Cmyka => "cmyka",
        }
    }

    /// Returns `true` if the notation prints alpha.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Notation::Hexa | Notation::Rgba | Notation::Hsla | Notation::Cmyka)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Notation::ALL
            .into_iter()
            .find(|n| n.name() == lower)
            .ok_or_else(|| {
                Error::invalid_argument("notation", format!("unknown notation `{s}`"))
            })
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// A successfully decoded notation, in the representation it was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    /// Hex or `rgb()`/`rgba()` input.
    Rgb(Rgba),
    /// `hsl()`/`hsla()` input.
    Hsl(Hsla),
    /// `cmyk()`/`cmyka()` input with its alpha.
    Cmyk(Cmyk, f64),
}

/// Decodes any owned notation: hex first, then functional.
///
/// Returns `None` for strings that need a resolver.
pub fn parse(input: &str) -> Option<Parsed> {
    parse_hex(input)
        .map(Parsed::Rgb)
        .or_else(|| parse_functional(input))
}

/// Decodes `#rrggbb` / `#rrggbbaa`.
///
/// # Example
///
/// ```rust
/// use tinct_color::notation::parse_hex;
/// use tinct_core::Rgba;
///
/// assert_eq!(parse_hex("#112233"), Some(Rgba::opaque(0x11, 0x22, 0x33)));
/// assert_eq!(parse_hex("11223300").map(|c| c.a), Some(0.0));
/// assert_eq!(parse_hex("#123"), None);
/// ```
pub fn parse_hex(input: &str) -> Option<Rgba> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !(digits.len() == 6 || digits.len() == 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba::from_bytes([byte(0)?, byte(2)?, byte(4)?, alpha]))
}

/// Decodes `rgb()`, `rgba()`, `hsl()`, `hsla()`, `cmyk()` and `cmyka()`.
///
/// # Example
///
/// ```rust
/// use tinct_color::notation::{parse_functional, Parsed};
/// use tinct_core::Hsla;
///
/// assert_eq!(
///     parse_functional("hsl(120deg 50% 25%)"),
///     Some(Parsed::Hsl(Hsla::new(120.0, 50.0, 25.0, 1.0)))
/// );
/// assert_eq!(parse_functional("rgb(1,2)"), None);
/// ```
pub fn parse_functional(input: &str) -> Option<Parsed> {
    let lower = input.trim().to_ascii_lowercase();
    let (name, rest) = lower.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let values = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect::<Option<Vec<f64>>>()?;

    match (name.trim(), values.as_slice()) {
        ("rgb" | "rgba", [r, g, b, rest @ ..]) if rest.len() <= 1 => {
            let a = rest.first().map_or(1.0, |&a| fraction_or(a, 1.0));
            Some(Parsed::Rgb(Rgba::new(channel(*r), channel(*g), channel(*b), a)))
        }
        ("hsl" | "hsla", [h, s, l, rest @ ..]) if rest.len() <= 1 => {
            let a = rest.first().map_or(1.0, |&a| fraction_or(a, 1.0));
            Some(Parsed::Hsl(Hsla::new(
                wrap_hue(*h),
                clamp_or(*s, 100.0, 100.0),
                clamp_or(*l, 50.0, 100.0),
                a,
            )))
        }
        (kind @ ("cmyk" | "cmyka"), [c, m, y, k, rest @ ..]) if rest.len() <= 1 => {
            // a fifth token is only honored by the alpha form
            let a = match (kind, rest.first()) {
                ("cmyka", Some(&a)) => fraction_or(a, 1.0),
                _ => 1.0,
            };
            let ink = |v: f64| clamp_or(v, 0.0, 100.0);
            Some(Parsed::Cmyk(Cmyk::new(ink(*c), ink(*m), ink(*y), ink(*k)), a))
        }
        _ => None,
    }
}

fn parse_token(token: &str) -> Option<f64> {
    let number = token
        .strip_suffix('%')
        .or_else(|| token.strip_suffix("deg"))
        .unwrap_or(token);
    number.parse::<f64>().ok()
}

fn channel(v: f64) -> u8 {
    to_channel(clamp_or(v, 0.0, 255.0))
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a number the way color strings print it: no trailing `.0`,
/// no negative zero.
pub(crate) fn number(v: f64) -> String {
    format!("{}", if v == 0.0 { 0.0 } else { v })
}

/// Formats alpha with one decimal.
pub(crate) fn alpha(a: f64) -> String {
    let a = round_to(a, 1);
    format!("{:.1}", if a == 0.0 { 0.0 } else { a })
}

/// `#rrggbb`
pub fn format_hex(rgb: &Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// `#rrggbbaa`, alpha scaled to a byte.
pub fn format_hexa(rgb: &Rgba) -> String {
    let a = to_channel(rgb.a * 255.0);
    format!("{}{a:02x}", format_hex(rgb))
}

/// `rgb(r,g,b)`
pub fn format_rgb(rgb: &Rgba) -> String {
    format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b)
}

/// `rgba(r,g,b,a)`
pub fn format_rgba(rgb: &Rgba) -> String {
    format!("rgba({},{},{},{})", rgb.r, rgb.g, rgb.b, alpha(rgb.a))
}

/// `hsl(h,s%,l%)`
pub fn format_hsl(hsl: &Hsla) -> String {
    format!("hsl({},{}%,{}%)", number(hsl.h), number(hsl.s), number(hsl.l))
}

/// `hsla(h,s%,l%,a)`
pub fn format_hsla(hsl: &Hsla) -> String {
    format!(
        "hsla({},{}%,{}%,{})",
        number(hsl.h),
        number(hsl.s),
        number(hsl.l),
        alpha(hsl.a)
    )
}

/// `cmyk(c,m,y,k)`
pub fn format_cmyk(cmyk: &Cmyk) -> String {
    format!(
        "cmyk({},{},{},{})",
        number(cmyk.c),
        number(cmyk.m),
        number(cmyk.y),
        number(cmyk.k)
    )
}

/// `cmyka(c,m,y,k,a)`
pub fn format_cmyka(cmyk: &Cmyk, a: f64) -> String {
    format!(
        "cmyka({},{},{},{},{})",
        number(cmyk.c),
        number(cmyk.m),
        number(cmyk.y),
        number(cmyk.k),
        alpha(a)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_case_and_prefix() {
        let upper = parse_hex("#AABBCC");
        assert_eq!(upper, parse_hex("aabbcc"));
        assert_eq!(upper, Some(Rgba::opaque(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_hex_rejects() {
        for bad in ["", "#", "#abc", "#abcde", "#abcdefa", "#gg0000", "#aabbccddee"] {
            assert_eq!(parse_hex(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_hex_alpha_byte() {
        let c = parse_hex("#00000080").unwrap();
        assert_eq!(c.a, 128.0 / 255.0);
        assert_eq!(format_hexa(&c), "#00000080");
    }

    #[test]
    fn test_rgb_forms() {
        assert_eq!(
            parse_functional("rgb(255, 0, 0)"),
            Some(Parsed::Rgb(Rgba::opaque(255, 0, 0)))
        );
        assert_eq!(
            parse_functional("RGBA(10 20 30 / 0.5)"),
            Some(Parsed::Rgb(Rgba::new(10, 20, 30, 0.5)))
        );
        // clamped, not rejected
        assert_eq!(
            parse_functional("rgb(300,-5,12.4,7)"),
            Some(Parsed::Rgb(Rgba::new(255, 0, 12, 1.0)))
        );
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert_eq!(
            parse_functional("hsla(-30, 100%, 50%, 0.25)"),
            Some(Parsed::Hsl(Hsla::new(330.0, 100.0, 50.0, 0.25)))
        );
    }

    #[test]
    fn test_cmyk_alpha_only_for_cmyka() {
        assert_eq!(
            parse_functional("cmyk(0,0,0,100,0.5)"),
            Some(Parsed::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 100.0), 1.0))
        );
        assert_eq!(
            parse_functional("cmyka(0,0,0,100,0.5)"),
            Some(Parsed::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 100.0), 0.5))
        );
    }

    #[test]
    fn test_functional_rejects() {
        for bad in ["rgb(1,2)", "rgb(1,2,3", "hsl(a,b,c)", "lab(1,2,3)", "cmyk(1,2,3)", "rgb(1,2,3,4,5)"] {
            assert_eq!(parse_functional(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_formatting() {
        let c = Rgba::new(255, 0, 0, 0.5);
        assert_eq!(format_hex(&c), "#ff0000");
        assert_eq!(format_rgb(&c), "rgb(255,0,0)");
        assert_eq!(format_rgba(&c), "rgba(255,0,0,0.5)");
        assert_eq!(format_hsl(&Hsla::new(0.0, 100.0, 50.0, 1.0)), "hsl(0,100%,50%)");
        assert_eq!(format_hsla(&Hsla::new(-0.0, 0.0, 0.0, 1.0)), "hsla(0,0%,0%,1.0)");
        assert_eq!(format_cmyk(&Cmyk::new(66.667, 33.333, 0.0, 80.0)), "cmyk(66.667,33.333,0,80)");
    }

    #[test]
    fn test_notation_names_roundtrip() {
        for n in Notation::ALL {
            assert_eq!(n.name().parse::<Notation>(), Ok(n));
        }
        let err = "xyz".parse::<Notation>().unwrap_err();
        assert!(err.is_argument_error());
    }
}
