//! Transform operations.
//!
//! Every operation here follows the baseline protocol of
//! [`crate::value`]: the receiver is restored, the result is returned.
//!
//! | Operation | Works on | Smart variant |
//! |-----------|----------|---------------|
//! | [`lighten`](ColorValue::lighten) / [`darken`](ColorValue::darken) | lightness | indexer over the lightness delta |
//! | [`blend`](ColorValue::blend) / [`gradient`](ColorValue::gradient) | RGB + alpha | indexer over the RGB deltas |
//! | [`rotate`](ColorValue::rotate) / [`complement`](ColorValue::complement) | hue | - |
//! | [`saturate`](ColorValue::saturate) / [`desaturate`](ColorValue::desaturate) / [`vivid`](ColorValue::vivid) | saturation, lightness | - |
//! | [`invert`](ColorValue::invert) / [`grey`](ColorValue::grey) / [`monotone`](ColorValue::monotone) | RGB | - |
//! | [`opaque`](ColorValue::opaque) / [`transparent`](ColorValue::transparent) | alpha | - |
//!
//! Fractional amounts are clamped to `[0, 1]`; NaN takes the documented
//! default of each operation.

use tracing::{debug, trace};

use tinct_core::numeric::{clamp_or, fraction_or, lerp, round_half_up, to_channel, wrap_hue};

use crate::indexer::{IndexDelta, uniform_index};
use crate::value::{ColorValue, Snapshot};

/// Desaturation ratio applied by the grey operations.
pub const GREY_DESATURATION: f64 = 0.95;

/// Combined lightness/saturation gap above which gradients are indexed.
pub const GRADIENT_INDEX_THRESHOLD: f64 = 0.011;

/// Rounds alpha to byte resolution.
fn alpha_byte(a: f64) -> f64 {
    fraction_or(round_half_up(a * 255.0) / 255.0, 1.0)
}

impl ColorValue {
    // ------------------------------------------------------------------------
    // Lightness
    // ------------------------------------------------------------------------

    /// Moves lightness toward 100 by `amount` (NaN means `1`).
    ///
    /// With `smart`, steps toward white through the perceptual indexer.
    pub fn lighten(&mut self, amount: f64, smart: bool) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, smart, "lighten");
        self.apply(|s| {
            if smart {
                luminance_step(s, 100.0, amount);
            } else {
                s.l += (100.0 - s.l) * amount;
                s.derive_from_hsl();
            }
        })
    }

    /// Moves lightness toward 0 by `amount` (NaN means `1`).
    ///
    /// With `smart`, steps toward black through the perceptual indexer.
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut white = ColorValue::parse("#ffffff").unwrap();
    /// assert_eq!(white.darken(1.0, false).hex(), "#000000");
    /// ```
    pub fn darken(&mut self, amount: f64, smart: bool) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, smart, "darken");
        self.apply(|s| {
            if smart {
                luminance_step(s, 0.0, amount);
            } else {
                s.l -= s.l * amount;
                s.derive_from_hsl();
            }
        })
    }

    /// Moves lightness toward `target`'s lightness by the indexed fraction `p`.
    ///
    /// `None` targets black, built at call time. NaN `p` means `0.5`.
    pub fn smart_luminance(&mut self, target: Option<&ColorValue>, p: f64) -> ColorValue {
        let target_l = target.map_or_else(|| ColorValue::default().lightness(), |t| t.lightness());
        let p = fraction_or(p, 0.5);
        trace!(target_l, p, "smart_luminance");
        self.apply(|s| luminance_step(s, target_l, p))
    }

    // ------------------------------------------------------------------------
    // Mixing
    // ------------------------------------------------------------------------

    /// Mixes with `other` half way.
    ///
    /// Smart blending is `gradient(other, 0.5)`; otherwise the RGB and
    /// alpha midpoint. `None` blends with black, built at call time.
    pub fn blend(&mut self, other: Option<&ColorValue>, smart: bool) -> ColorValue {
        if smart {
            return self.gradient(other, 0.5);
        }
        let other = other.map_or_else(|| *ColorValue::default().snapshot(), |o| *o.snapshot());
        trace!(other = ?other.rgba(), "blend");
        self.apply(|s| {
            s.r = to_channel(lerp(s.r as f64, other.r as f64, 0.5));
            s.g = to_channel(lerp(s.g as f64, other.g as f64, 0.5));
            s.b = to_channel(lerp(s.b as f64, other.b as f64, 0.5));
            s.a = alpha_byte(lerp(s.a, other.a, 0.5));
            s.derive_from_rgb();
        })
    }

    /// The color at fraction `p` of the way to `other` (NaN means `0.5`).
    ///
    /// When the two colors differ enough in lightness and saturation
    /// (`|dl|/100 * |ds|/360 > 0.011`), `p` is remapped through the
    /// perceptual indexer over the RGB deltas. `None` means black.
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut a = ColorValue::parse("#102030").unwrap();
    /// let b = ColorValue::parse("#f0e0d0").unwrap();
    /// assert_eq!(a.gradient(Some(&b), 0.0).hex(), "#102030");
    /// assert_eq!(a.gradient(Some(&b), 1.0).hex(), "#f0e0d0");
    /// ```
    pub fn gradient(&mut self, other: Option<&ColorValue>, p: f64) -> ColorValue {
        let other = other.map_or_else(|| *ColorValue::default().snapshot(), |o| *o.snapshot());
        let p = fraction_or(p, 0.5);
        trace!(p, other = ?other.rgba(), "gradient");
        self.apply(|s| {
            let dr = other.r as f64 - s.r as f64;
            let dg = other.g as f64 - s.g as f64;
            let db = other.b as f64 - s.b as f64;
            let da = other.a - s.a;

            let gap = ((other.l - s.l).abs() / 100.0) * ((other.s - s.s).abs() / 360.0);
            let p = if gap > GRADIENT_INDEX_THRESHOLD {
                let indexed = uniform_index(s, p, IndexDelta::Rgb([dr, dg, db]));
                debug!(gap, p, indexed, "gradient indexed");
                indexed
            } else {
                p
            };

            s.r = to_channel(s.r as f64 + dr * p);
            s.g = to_channel(s.g as f64 + dg * p);
            s.b = to_channel(s.b as f64 + db * p);
            s.a = alpha_byte(s.a + da * p);
            s.derive_from_rgb();
        })
    }

    // ------------------------------------------------------------------------
    // Hue
    // ------------------------------------------------------------------------

    /// Rotates hue by `degrees` (NaN means `180`).
    ///
    /// Values strictly between -1 and 1 are fractions of a full turn.
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut c = ColorValue::from_hsla(5.0, 100.0, 50.0, 1.0);
    /// assert_eq!(c.rotate(-10.0).hue(), 355.0);
    /// assert_eq!(c.rotate(0.5).hue(), 185.0);
    /// assert_eq!(c.rotate(360.0).hue(), 5.0);
    /// ```
    pub fn rotate(&mut self, degrees: f64) -> ColorValue {
        let mut degrees = if degrees.is_nan() { 180.0 } else { degrees };
        if degrees > -1.0 && degrees < 1.0 {
            degrees *= 360.0;
        }
        let degrees = degrees % 360.0;
        trace!(degrees, "rotate");
        self.apply(|s| {
            s.h = wrap_hue(s.h + degrees);
            s.derive_from_hsl();
        })
    }

    /// Rotates hue by 180 degrees.
    pub fn complement(&mut self) -> ColorValue {
        self.rotate(180.0)
    }

    // ------------------------------------------------------------------------
    // RGB
    // ------------------------------------------------------------------------

    /// Inverts each RGB channel (`255 - channel`).
    ///
    /// ```rust
    /// use tinct_color::ColorValue;
    ///
    /// let mut c = ColorValue::parse("#112233").unwrap();
    /// assert_eq!(c.invert().hex(), "#eeddcc");
    /// ```
    pub fn invert(&mut self) -> ColorValue {
        trace!("invert");
        self.apply(|s| {
            s.r = 255 - s.r;
            s.g = 255 - s.g;
            s.b = 255 - s.b;
            s.derive_from_rgb();
        })
    }

    /// Moves the channels toward a luminance-weighted grey by `amount`
    /// (NaN means `1`).
    pub fn grey(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "grey");
        self.apply(|s| {
            grey_channels(s, amount);
            s.derive_from_rgb();
        })
    }

    /// Recolors the grey version of this color with `tint`.
    ///
    /// The grey's brightness scales `tint`'s lightness; the result is then
    /// mixed from the grey toward the recolored value by `strength`
    /// (NaN means `0.5`).
    pub fn monotone(&mut self, tint: &ColorValue, strength: f64) -> ColorValue {
        let strength = fraction_or(strength, 0.5);
        let tint = *tint.snapshot();
        trace!(strength, tint = ?tint.rgba(), "monotone");
        self.apply(|s| {
            grey_channels(s, 1.0);
            let grey = *s;
            let brightness = grey.r as f64 / 255.0;

            s.r = tint.r;
            s.g = tint.g;
            s.b = tint.b;
            s.derive_from_rgb();
            s.l = clamp_or(round_half_up(tint.l * 2.0 * brightness), 0.0, 100.0);
            s.derive_from_hsl();

            s.r = to_channel(lerp(grey.r as f64, s.r as f64, strength));
            s.g = to_channel(lerp(grey.g as f64, s.g as f64, strength));
            s.b = to_channel(lerp(grey.b as f64, s.b as f64, strength));
            s.derive_from_rgb();
        })
    }

    // ------------------------------------------------------------------------
    // Saturation
    // ------------------------------------------------------------------------

    /// Moves saturation toward 100 by `amount` (NaN means `1`).
    pub fn saturate(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "saturate");
        self.apply(|s| {
            s.s += round_half_up((100.0 - s.s) * amount);
            s.derive_from_hsl();
        })
    }

    /// Moves saturation toward 0 by `amount` (NaN means `1`).
    pub fn desaturate(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "desaturate");
        self.apply(|s| {
            s.s -= round_half_up(s.s * amount);
            s.derive_from_hsl();
        })
    }

    /// Moves saturation toward 100 and lightness toward 50 by `amount`
    /// (NaN means `1`).
    pub fn vivid(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "vivid");
        self.apply(|s| {
            s.s = round_half_up(s.s + (100.0 - s.s) * amount);
            s.l = round_half_up(s.l + (50.0 - s.l) * amount);
            s.derive_from_hsl();
        })
    }

    // ------------------------------------------------------------------------
    // Alpha
    // ------------------------------------------------------------------------

    /// Moves alpha toward 1 by `amount` (NaN means `1`).
    pub fn opaque(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "opaque");
        self.apply(|s| s.a += (1.0 - s.a) * amount)
    }

    /// Moves alpha toward 0 by `amount` (NaN means `1`).
    pub fn transparent(&mut self, amount: f64) -> ColorValue {
        let amount = fraction_or(amount, 1.0);
        trace!(amount, "transparent");
        self.apply(|s| s.a -= s.a * amount)
    }
}

/// Steps lightness toward `target_l` by the indexed fraction `p`.
fn luminance_step(s: &mut Snapshot, target_l: f64, p: f64) {
    let dl = target_l - s.l;
    let p = uniform_index(s, p, IndexDelta::Lightness(dl));
    s.l = clamp_or(round_half_up(s.l + dl * p), 0.0, 100.0);
    s.derive_from_hsl();
}

/// Moves RGB toward a luminance-weighted grey, then applies the fixed
/// desaturation and, below 50% lightness, a darkening correction.
fn grey_channels(s: &mut Snapshot, amount: f64) {
    let [r, g, b] = [s.r, s.g, s.b].map(|c| c as f64);
    let luma = (0.897 * r + 1.761 * g + 0.342 * b) / 3.0;

    let lift = 255.0 - 255.0 * GREY_DESATURATION;
    let correction = if s.l < 50.0 {
        ((s.l - 50.0) / 25.0).max(-1.0)
    } else {
        0.0
    };

    let grey = |c: f64| {
        let c = round_half_up(c + (luma - c) * amount);
        let c = round_half_up(c * GREY_DESATURATION + lift);
        to_channel(c + round_half_up(c * correction))
    };
    s.r = grey(r);
    s.g = grey(g);
    s.b = grey(b);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> ColorValue {
        ColorValue::parse(s).unwrap()
    }

    #[test]
    fn test_linear_lighten_darken() {
        let mut c = color("#808080");
        assert_eq!(c.lighten(1.0, false).hex(), "#ffffff");
        assert_eq!(c.darken(1.0, false).hex(), "#000000");
        assert_eq!(c.lighten(0.0, false), c);
        assert_eq!(c.lighten(f64::NAN, false).hex(), "#ffffff");
    }

    #[test]
    fn test_smart_lighten_reaches_white() {
        let mut c = color("#336699");
        assert_eq!(c.lighten(1.0, true).hex(), "#ffffff");
        assert_eq!(c.darken(1.0, true).hex(), "#000000");
        let half = c.lighten(0.5, true);
        assert!(half.lightness() > c.lightness() && half.lightness() < 100.0);
    }

    #[test]
    fn test_smart_lighten_spreads_luminance() {
        let mut black = color("#000000");
        let smart = black.lighten(0.5, true);
        let linear = black.lighten(0.5, false);
        assert_eq!(linear.hex(), "#808080");
        assert!(linear.luminance() < 0.25, "{}", linear.luminance());
        assert!(smart.luminance() > 0.35, "{}", smart.luminance());

        // equal steps in amount give roughly equal luminance steps
        let steps: Vec<f64> = (0..=4).map(|i| black.lighten(i as f64 / 4.0, true).luminance()).collect();
        let gaps: Vec<f64> = steps.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|&g| g > 0.1), "{gaps:?}");
    }

    #[test]
    fn test_smart_luminance_default_target_is_black() {
        let mut c = color("#ffffff");
        assert_eq!(c.smart_luminance(None, 1.0).hex(), "#000000");
        let white = color("#ffffff");
        let mut grey = color("#808080");
        assert_eq!(grey.smart_luminance(Some(&white), 1.0).hex(), "#ffffff");
    }

    #[test]
    fn test_blend_linear() {
        let mut a = color("#000000");
        let b = color("#ffffff00");
        let mid = a.blend(Some(&b), false);
        assert_eq!(mid.rgba().channels(), [128, 128, 128]);
        assert_eq!(mid.alpha(), 128.0 / 255.0);
        assert_eq!(a.blend(None, false), a);
    }

    #[test]
    fn test_smart_blend_is_half_gradient() {
        let mut a = color("#204080");
        let b = color("#f0c010");
        assert_eq!(a.blend(Some(&b), true), a.gradient(Some(&b), 0.5));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut a = color("#0000ff");
        let b = color("#ffff00");
        assert_eq!(a.gradient(Some(&b), 0.0).hex(), "#0000ff");
        assert_eq!(a.gradient(Some(&b), 1.0).hex(), "#ffff00");
        // large lightness/saturation gap goes through the indexer
        let mut dark = color("#000000");
        let light = color("#ff8080");
        assert_eq!(dark.gradient(Some(&light), 1.0).hex(), "#ff8080");
        assert_eq!(dark.gradient(Some(&light), 0.0).hex(), "#000000");
    }

    #[test]
    fn test_indexed_gradient_midpoint() {
        // black -> red: |dl|/100 * |ds|/360 is well above the index threshold
        let mut black = color("#000000");
        let red = color("#ff0000");
        let mid = black.gradient(Some(&red), 0.5);
        assert!(mid.red() > 160, "{}", mid.hex());
        assert_eq!((mid.green(), mid.blue()), (0, 0));

        // a small gap stays linear
        let mut grey = color("#808080");
        let lighter = color("#909090");
        assert_eq!(grey.gradient(Some(&lighter), 0.5).hex(), "#888888");
    }

    #[test]
    fn test_rotate_and_complement() {
        let mut red = color("#ff0000");
        assert_eq!(red.complement().hex(), "#00ffff");
        assert_eq!(red.rotate(f64::NAN).hex(), "#00ffff");
        assert_eq!(red.rotate(120.0).hex(), "#00ff00");
        assert_eq!(red.rotate(-120.0).hex(), "#0000ff");
        assert_eq!(red.rotate(720.0).hue(), 0.0);
    }

    #[test]
    fn test_invert() {
        let mut c = color("#112233");
        assert_eq!(c.invert().hex(), "#eeddcc");
        assert_eq!(c.hex(), "#112233");
    }

    #[test]
    fn test_grey_is_achromatic() {
        for hex in ["#ff0000", "#336699", "#eeeeee", "#0a0a0a"] {
            let mut c = color(hex);
            let g = c.grey(1.0);
            assert!(g.is_achromatic(), "{hex} -> {}", g.hex());
        }
        let mut c = color("#336699");
        assert!(!c.grey(0.0).is_achromatic());
    }

    #[test]
    fn test_grey_darkens_dark_colors() {
        // below 25% lightness the correction removes all light
        let mut c = color("#101010");
        assert_eq!(c.grey(1.0).hex(), "#000000");
    }

    #[test]
    fn test_saturation_ops() {
        let mut c = ColorValue::from_hsla(200.0, 40.0, 50.0, 1.0);
        assert_eq!(c.saturate(1.0).saturation(), 100.0);
        assert_eq!(c.saturate(0.5).saturation(), 70.0);
        assert_eq!(c.desaturate(1.0).saturation(), 0.0);
        assert_eq!(c.desaturate(0.5).saturation(), 20.0);
    }

    #[test]
    fn test_vivid() {
        let mut c = ColorValue::from_hsla(30.0, 20.0, 90.0, 1.0);
        let v = c.vivid(1.0);
        assert_eq!((v.saturation(), v.lightness()), (100.0, 50.0));
        assert_eq!(v.hex(), "#ff8000");
    }

    #[test]
    fn test_monotone() {
        let mut c = color("#336699");
        let tint = color("#ff0000");
        let none = c.monotone(&tint, 0.0);
        let full = c.monotone(&tint, 1.0);
        assert!(none.is_achromatic());
        assert_eq!(full.hue(), 0.0);
        assert_eq!(c.hex(), "#336699");
    }

    #[test]
    fn test_alpha_ops() {
        let mut c = color("#00000080");
        assert_eq!(c.opaque(1.0).alpha(), 1.0);
        assert_eq!(c.transparent(1.0).alpha(), 0.0);
        let half = c.transparent(0.5).alpha();
        assert!((half - 64.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_cmyk_follows_transforms() {
        let mut c = color("#ff0000").with_cmyk();
        let out = c.invert();
        assert_eq!(out.cmyk(), Some(tinct_core::Cmyk::new(100.0, 0.0, 0.0, 0.0)));
        assert_eq!(c.cmyk(), Some(tinct_core::Cmyk::new(0.0, 100.0, 100.0, 0.0)));
    }
}
