//! Relative luminance and contrast ratio (WCAG 2.0).
//!
//! Relative luminance is the perceptually weighted brightness of a color:
//! each channel is normalized, linearized with the sRGB decode curve and
//! combined with the Rec.709 weights.
//!
//! # Formula
//!
//! ```text
//! v = channel / 255
//! if v <= 0.03928:
//!     V = v / 12.92
//! else:
//!     V = ((v + 0.055) / 1.055)^2.4
//! L = 0.2126 * R + 0.7152 * G + 0.0722 * B
//! ```
//!
//! The WCAG definition uses `0.03928` as the linear segment break, not the
//! IEC 61966-2-1 value `0.04045`. Both give identical results for 8-bit
//! input.
//!
//! # Reference
//!
//! - <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
//! - <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Linear segment break of the WCAG sRGB decode curve.
pub const WCAG_LINEAR_BREAK: f64 = 0.03928;

/// Offset added to both luminances before taking a contrast ratio.
pub const CONTRAST_FLARE: f64 = 0.05;

/// Decodes one normalized sRGB value to linear light.
///
/// # Example
///
/// ```rust
/// use tinct_core::luminance::srgb_decode;
///
/// let linear = srgb_decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn srgb_decode(v: f64) -> f64 {
    if v <= WCAG_LINEAR_BREAK {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of 8-bit RGB channels, in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use tinct_core::luminance::relative_luminance;
///
/// assert_eq!(relative_luminance(0, 0, 0), 0.0);
/// assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let [r, g, b] = [r, g, b].map(|c| srgb_decode(c as f64 / 255.0));
    r * REC709_LUMA_R + g * REC709_LUMA_G + b * REC709_LUMA_B
}

/// Contrast ratio between two relative luminances, in `[1, 21]`.
///
/// Symmetric: the larger luminance is always the numerator.
///
/// # Example
///
/// ```rust
/// use tinct_core::luminance::contrast_ratio;
///
/// assert!((contrast_ratio(1.0, 0.0) - 21.0).abs() < 1e-12);
/// assert_eq!(contrast_ratio(0.2, 0.7), contrast_ratio(0.7, 0.2));
/// ```
#[inline]
pub fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a > b { (a, b) } else { (b, a) };
    (hi + CONTRAST_FLARE) / (lo + CONTRAST_FLARE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_decode_boundaries() {
        assert_eq!(srgb_decode(0.0), 0.0);
        assert_abs_diff_eq!(srgb_decode(1.0), 1.0, epsilon = 1e-12);
        // continuous across the break
        let below = srgb_decode(WCAG_LINEAR_BREAK);
        let above = srgb_decode(WCAG_LINEAR_BREAK + 1e-9);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_primary_luminance() {
        assert_abs_diff_eq!(relative_luminance(255, 0, 0), REC709_LUMA_R, epsilon = 1e-12);
        assert_abs_diff_eq!(relative_luminance(0, 255, 0), REC709_LUMA_G, epsilon = 1e-12);
        assert_abs_diff_eq!(relative_luminance(0, 0, 255), REC709_LUMA_B, epsilon = 1e-12);
    }

    #[test]
    fn test_known_contrast() {
        // #777777 on white is the classic 4.48:1 near-miss
        let grey = relative_luminance(0x77, 0x77, 0x77);
        let ratio = contrast_ratio(grey, 1.0);
        assert_abs_diff_eq!(ratio, 4.48, epsilon = 0.01);
    }

    #[test]
    fn test_contrast_symmetry() {
        for &(a, b) in &[(0.0, 1.0), (0.3, 0.31), (0.9, 0.05)] {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
            assert!(contrast_ratio(a, b) >= 1.0);
        }
    }
}
