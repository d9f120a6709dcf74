//! Plain channel structs for the three color representations.
//!
//! These are the *structured* forms a color value hands out: a snapshot of
//! one representation, detached from the value that produced it. They carry
//! no invariants beyond their field domains:
//!
//! | Type | Fields | Domain |
//! |------|--------|--------|
//! | [`Rgba`] | `r, g, b` / `a` | `0..=255` / `[0, 1]` |
//! | [`Hsla`] | `h` / `s, l` / `a` | `[0, 360)` / `[0, 100]` / `[0, 1]` |
//! | [`Cmyk`] | `c, m, y, k` | `[0, 100]` |
//!
//! All three serialize with `serde` as flat objects (`{"r":255,...}`).

use serde::{Deserialize, Serialize};

// ============================================================================
// RGB
// ============================================================================

/// Device RGB channels plus alpha.
///
/// # Example
///
/// ```rust
/// use tinct_core::Rgba;
///
/// let red = Rgba::opaque(255, 0, 0);
/// assert_eq!(red.a, 1.0);
/// assert_eq!(red.channels(), [255, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Creates a new RGBA value.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque RGB value.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a value from raw RGBA bytes (alpha `0..=255`).
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3] as f64 / 255.0)
    }

    /// Returns the color channels as an array.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns `true` when all three channels are equal (a grey).
    #[inline]
    pub const fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

// ============================================================================
// HSL
// ============================================================================

/// Hue, saturation and lightness plus alpha.
///
/// Hue is in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in `[0, 360)`
    pub h: f64,
    /// Saturation in `[0, 100]`
    pub s: f64,
    /// Lightness in `[0, 100]`
    pub l: f64,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Hsla {
    /// Creates a new HSLA value.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

// ============================================================================
// CMYK
// ============================================================================

/// Process color percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan in `[0, 100]`
    pub c: f64,
    /// Magenta in `[0, 100]`
    pub m: f64,
    /// Yellow in `[0, 100]`
    pub y: f64,
    /// Key (black) in `[0, 100]`
    pub k: f64,
}

impl Cmyk {
    /// Creates a new CMYK value.
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_bytes() {
        let c = Rgba::from_bytes([17, 34, 51, 255]);
        assert_eq!(c.channels(), [17, 34, 51]);
        assert_eq!(c.a, 1.0);

        let half = Rgba::from_bytes([0, 0, 0, 0]);
        assert_eq!(half.a, 0.0);
    }

    #[test]
    fn test_achromatic() {
        assert!(Rgba::opaque(90, 90, 90).is_achromatic());
        assert!(!Rgba::opaque(90, 91, 90).is_achromatic());
        assert_eq!(Rgba::default(), Rgba::BLACK);
    }

    #[test]
    fn test_serde_object_form() {
        let json = serde_json::to_string(&Cmyk::new(0.0, 0.0, 0.0, 100.0)).unwrap();
        assert_eq!(json, r#"{"c":0.0,"m":0.0,"y":0.0,"k":100.0}"#);

        let back: Rgba = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":0.5}"#).unwrap();
        assert_eq!(back, Rgba::new(1, 2, 3, 0.5));
    }
}
