//! Conversion engine between RGB, HSL and CMYK.
//!
//! Pure, deterministic and total: every function accepts any value of its
//! parameter types and never panics. Callers are expected to pass values
//! in the documented domains; out-of-domain channels are saturated on the
//! way out.
//!
//! # Storage precision
//!
//! A color value stores hue as a whole degree and saturation/lightness as
//! whole percentages. [`rgb_to_hsl`] applies that storage rounding;
//! [`rgb_to_hsl_precise`] returns the unrounded coordinates for callers
//! that need an exact round-trip.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::convert::{hsl_to_rgb, rgb_to_hsl};
//!
//! let (h, s, l) = rgb_to_hsl(255, 0, 0);
//! assert_eq!((h, s, l), (0.0, 100.0, 50.0));
//! assert_eq!(hsl_to_rgb(h, s, l), [255, 0, 0]);
//! ```

use tinct_core::numeric::{round_half_up, round_to, to_channel, wrap_hue};
use tinct_core::Cmyk;

// ============================================================================
// RGB -> HSL
// ============================================================================

/// Converts 8-bit RGB to unrounded HSL (degrees, percent, percent).
///
/// Hue comes from the hexagonal model: the channel holding the maximum
/// selects the 60 degree sector.
pub fn rgb_to_hsl_precise(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let sector = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta) % 6.0
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let l = (cmax + cmin) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    (wrap_hue(sector * 60.0), s * 100.0, l * 100.0)
}

/// Converts 8-bit RGB to stored HSL.
///
/// Hue is rounded to a whole degree; saturation and lightness are rounded
/// to one decimal and then to a whole percent.
///
/// # Example
///
/// ```rust
/// use tinct_color::convert::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl(0x11, 0x22, 0x33), (210.0, 50.0, 13.0));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (h, s, l) = rgb_to_hsl_precise(r, g, b);
    let h = wrap_hue(round_half_up(h));
    let s = round_half_up(round_to(s, 1));
    let l = round_half_up(round_to(l, 1));
    (h, s, l)
}

// ============================================================================
// HSL -> RGB
// ============================================================================

/// Converts HSL (degrees, percent, percent) to 8-bit RGB.
///
/// ```text
/// c = (1 - |2l - 1|) * s
/// x = c * (1 - |(h / 60) mod 2 - 1|)
/// m = l - c / 2
/// ```
///
/// The pre-offset triple is chosen by the 60 degree sector of `h`, then
/// offset by `m` and scaled to `0..=255`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let h = wrap_hue(h);
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        to_channel((r + m) * 255.0),
        to_channel((g + m) * 255.0),
        to_channel((b + m) * 255.0),
    ]
}

// ============================================================================
// CMYK
// ============================================================================

/// Converts 8-bit RGB to CMYK percentages.
///
/// Pure black short-cuts to `k = 100` to avoid dividing by zero.
/// `c, m, y` keep three decimals, `k` keeps two.
///
/// # Example
///
/// ```rust
/// use tinct_color::convert::rgb_to_cmyk;
/// use tinct_core::Cmyk;
///
/// assert_eq!(rgb_to_cmyk(0, 0, 0), Cmyk::new(0.0, 0.0, 0.0, 100.0));
/// assert_eq!(rgb_to_cmyk(255, 0, 0), Cmyk::new(0.0, 100.0, 100.0, 0.0));
/// ```
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    if r == 0 && g == 0 && b == 0 {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }
    let r = 1.0 - r as f64 / 255.0;
    let g = 1.0 - g as f64 / 255.0;
    let b = 1.0 - b as f64 / 255.0;
    let k = r.min(g).min(b);
    let ink = |v: f64| round_to((v - k) / (1.0 - k) * 100.0, 3);
    Cmyk::new(ink(r), ink(g), ink(b), round_to(k * 100.0, 2))
}

/// Converts CMYK percentages to 8-bit RGB.
///
/// `channel = 1 - min(1, ink * (1 - k) + k)` per channel.
pub fn cmyk_to_rgb(cmyk: &Cmyk) -> [u8; 3] {
    let k = cmyk.k / 100.0;
    let channel = |ink: f64| to_channel((1.0 - (ink / 100.0 * (1.0 - k) + k).min(1.0)) * 255.0);
    [channel(cmyk.c), channel(cmyk.m), channel(cmyk.y)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn max_channel_error(a: [u8; 3], b: [u8; 3]) -> i32 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x as i32 - y as i32).abs())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), (0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 255, 0), (120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 0, 255), (240.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(255, 255, 255), (0.0, 0.0, 100.0));
        assert_eq!(rgb_to_hsl(0, 0, 0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_negative_sector_wraps() {
        // magenta-ish red: max is red, g < b gives a negative sector
        let (h, _, _) = rgb_to_hsl(255, 0, 128);
        assert_eq!(h, 330.0);
    }

    #[test]
    fn test_hsl_to_rgb_sectors() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), [255, 255, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), [0, 255, 255]);
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0), [255, 0, 255]);
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), [255, 0, 0]);
    }

    #[test]
    fn test_precise_roundtrip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let (h, s, l) = rgb_to_hsl_precise(r, g, b);
                    let back = hsl_to_rgb(h, s, l);
                    assert!(
                        max_channel_error([r, g, b], back) <= 1,
                        "rgb({r},{g},{b}) -> hsl({h},{s},{l}) -> {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_stored_roundtrip_is_close() {
        // whole-degree/whole-percent storage only moves a channel by a few units
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let (h, s, l) = rgb_to_hsl(r, g, b);
                    let back = hsl_to_rgb(h, s, l);
                    assert!(max_channel_error([r, g, b], back) <= 6);
                }
            }
        }
    }

    #[test]
    fn test_cmyk_black_shortcut() {
        let cmyk = rgb_to_cmyk(0, 0, 0);
        assert_eq!(cmyk.k, 100.0);
        assert_eq!(cmyk_to_rgb(&cmyk), [0, 0, 0]);
    }

    #[test]
    fn test_cmyk_roundtrip() {
        for &rgb in &[[255u8, 255, 255], [17, 34, 51], [200, 100, 50], [1, 2, 3], [128, 128, 128]] {
            let cmyk = rgb_to_cmyk(rgb[0], rgb[1], rgb[2]);
            assert!(max_channel_error(rgb, cmyk_to_rgb(&cmyk)) <= 1, "{rgb:?} -> {cmyk:?}");
        }
    }

    #[test]
    fn test_cmyk_precision() {
        let cmyk = rgb_to_cmyk(0x11, 0x22, 0x33);
        assert_abs_diff_eq!(cmyk.c, 66.667, epsilon = 1e-9);
        assert_abs_diff_eq!(cmyk.m, 33.333, epsilon = 1e-9);
        assert_abs_diff_eq!(cmyk.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cmyk.k, 80.0, epsilon = 1e-9);
    }
}
