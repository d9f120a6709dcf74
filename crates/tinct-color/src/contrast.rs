//! WCAG contrast resolver.
//!
//! [`ColorValue::ratio`] treats the receiver as text on `background` and
//! adjusts its lightness until the pair meets a [`ContrastLevel`].
//!
//! # Scan
//!
//! Lightness is scanned in whole percent, moving away from the background:
//! text lighter than the background scans `0 -> 100`, otherwise
//! `100 -> 0`. The last contiguous run of lightnesses that meet the level
//! is kept as `first..=last` in scan order. If the text's own lightness is
//! already inside that run, `first` snaps to it so small `scale` values
//! keep the color. The result lightness is
//!
//! ```text
//! round(first + (last - first) * scale)
//! ```
//!
//! so `scale = 0` is the smallest change that passes and `scale = 1` the
//! strongest contrast. When no lightness passes, the best ratio seen wins.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{ColorValue, ContrastLevel};
//!
//! let mut grey = ColorValue::parse("#777777").unwrap();
//! let white = ColorValue::parse("#ffffff").unwrap();
//! assert!(grey.contrast_ratio(&white) < 4.5);
//!
//! let text = grey.ratio(&white, ContrastLevel::Aa, 0.0);
//! assert!(text.contrast_ratio(&white) >= 4.5);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use tinct_core::numeric::{clamp_or, round_half_up};
use tinct_core::{Error, Result, contrast_ratio};

use crate::value::{ColorValue, Snapshot};

/// Named WCAG minimum contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    /// Normal text, level AA (4.5:1).
    Aa,
    /// Normal text, level AAA (7:1).
    Aaa,
    /// Large text, level AA (3:1).
    Aa18,
    /// Large text, level AAA (4.5:1).
    Aaa18,
}

impl ContrastLevel {
    /// Minimum contrast ratio for the level.
    pub const fn threshold(&self) -> f64 {
        match self {
            ContrastLevel::Aa => 4.5,
            ContrastLevel::Aaa => 7.0,
            ContrastLevel::Aa18 => 3.0,
            ContrastLevel::Aaa18 => 4.5,
        }
    }

    /// Canonical token.
    pub const fn token(&self) -> &'static str {
        match self {
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa18 => "AA18",
            ContrastLevel::Aaa18 => "AAA18",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ContrastLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aa" => Ok(ContrastLevel::Aa),
            "aaa" => Ok(ContrastLevel::Aaa),
            "aa18" => Ok(ContrastLevel::Aa18),
            "aaa18" => Ok(ContrastLevel::Aaa18),
            _ => Err(Error::invalid_argument(
                "level",
                format!("unknown WCAG level `{s}`"),
            )),
        }
    }
}

/// Outcome of [`ColorValue::ratio_for`].
#[derive(Debug, Clone, PartialEq)]
pub enum Contrast {
    /// No usable level: the raw contrast ratio.
    Ratio(f64),
    /// The text color adjusted to meet the level.
    Adjusted(ColorValue),
}

impl ColorValue {
    /// Adjusts lightness so this text color meets `level` on `background`.
    ///
    /// `scale` (clamped to `[0, 1]`, NaN means `1`) picks a point in the
    /// passing range: `0` is the smallest change, `1` the strongest contrast.
    pub fn ratio(&mut self, background: &ColorValue, level: ContrastLevel, scale: f64) -> ColorValue {
        let scale = clamp_or(scale, 1.0, 1.0);
        let bg = background.luminance();
        trace!(%level, scale, bg, "ratio");
        self.apply(|s| {
            s.l = contrast_lightness(s, bg, level.threshold(), scale);
            s.derive_from_hsl();
        })
    }

    /// Like [`ratio`](Self::ratio), with the level given as a token.
    ///
    /// An absent or unrecognized token yields the raw ratio.
    ///
    /// ```rust
    /// use tinct_color::{ColorValue, Contrast};
    ///
    /// let mut black = ColorValue::parse("#000000").unwrap();
    /// let white = ColorValue::parse("#ffffff").unwrap();
    /// match black.ratio_for(&white, None, 1.0) {
    ///     Contrast::Ratio(r) => assert!((r - 21.0).abs() < 1e-9),
    ///     Contrast::Adjusted(_) => unreachable!(),
    /// }
    /// assert!(matches!(black.ratio_for(&white, Some("aaa"), 1.0), Contrast::Adjusted(_)));
    /// ```
    pub fn ratio_for(&mut self, background: &ColorValue, level: Option<&str>, scale: f64) -> Contrast {
        match level.map(str::parse::<ContrastLevel>) {
            Some(Ok(level)) => Contrast::Adjusted(self.ratio(background, level, scale)),
            Some(Err(err)) => {
                debug!(%err, "falling back to raw contrast ratio");
                Contrast::Ratio(self.contrast_ratio(background))
            }
            None => Contrast::Ratio(self.contrast_ratio(background)),
        }
    }
}

/// Scans lightness for the run that meets `threshold` against a background
/// of luminance `bg`, returning the chosen lightness.
fn contrast_lightness(text: &Snapshot, bg: f64, threshold: f64, scale: f64) -> f64 {
    let original = text.l;
    let ascending = text.luminance() > bg;
    let scan = (0..=100).map(|i| if ascending { i } else { 100 - i });
    let step = if ascending { 1 } else { -1 };

    let mut candidate = *text;
    let mut run: Option<(i32, i32)> = None;
    let mut best = (original, 0.0);

    for l in scan {
        candidate.l = l as f64;
        candidate.derive_from_hsl();
        let ratio = contrast_ratio(candidate.luminance(), bg);
        if ratio > best.1 {
            best = (l as f64, ratio);
        }
        if ratio < threshold {
            continue;
        }
        run = match run {
            Some((first, last)) if last == l - step => Some((first, l)),
            _ => Some((l, l)),
        };
    }

    let Some((first, last)) = run else {
        debug!(threshold, best_l = best.0, best_ratio = best.1, "no lightness meets the level");
        return best.0;
    };

    let (mut first, last) = (first as f64, last as f64);
    if (original > first && original <= last) || (original < first && original >= last) {
        first = original;
    }
    let l = round_half_up(first + (last - first) * scale);
    debug!(threshold, first, last, l, "contrast scan");
    l
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> ColorValue {
        ColorValue::parse(s).unwrap()
    }

    #[test]
    fn test_levels() {
        assert_eq!("AA".parse::<ContrastLevel>(), Ok(ContrastLevel::Aa));
        assert_eq!("aaa18".parse::<ContrastLevel>(), Ok(ContrastLevel::Aaa18));
        assert_eq!(ContrastLevel::Aaa.threshold(), 7.0);
        assert_eq!(ContrastLevel::Aa18.threshold(), 3.0);
        assert_eq!(ContrastLevel::Aaa18.threshold(), ContrastLevel::Aa.threshold());
        assert!("A".parse::<ContrastLevel>().is_err());
    }

    #[test]
    fn test_symmetry() {
        let a = color("#336699");
        let b = color("#ffcc00");
        assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
    }

    #[test]
    fn test_aa_on_white() {
        let mut text = color("#777777");
        let white = color("#ffffff");
        for scale in [0.0, 0.5, 1.0] {
            let out = text.ratio(&white, ContrastLevel::Aa, scale);
            assert!(out.contrast_ratio(&white) >= 4.5, "scale={scale}");
            assert!(out.lightness() < text.lightness());
        }
        // full scale pushes all the way to black
        assert_eq!(text.ratio(&white, ContrastLevel::Aa, 1.0).hex(), "#000000");
        assert_eq!(text.hex(), "#777777");
    }

    #[test]
    fn test_light_text_on_dark_background() {
        let mut text = color("#444444");
        let black = color("#000000");
        let out = text.ratio(&black, ContrastLevel::Aaa, 0.0);
        assert!(out.contrast_ratio(&black) >= 7.0);
        assert!(out.lightness() > text.lightness());
        assert_eq!(text.ratio(&black, ContrastLevel::Aaa, 1.0).hex(), "#ffffff");
    }

    #[test]
    fn test_already_passing_keeps_lightness_at_zero_scale() {
        let mut text = color("#222222");
        let white = color("#ffffff");
        let out = text.ratio(&white, ContrastLevel::Aa, 0.0);
        assert_eq!(out.lightness(), text.lightness());
    }

    #[test]
    fn test_impossible_level_uses_best_ratio() {
        // no lightness reaches 7:1 against a mid grey
        let mut text = color("#808080");
        let bg = color("#767676");
        let out = text.ratio(&bg, ContrastLevel::Aaa, 1.0);
        assert!((0.0..=100.0).contains(&out.lightness()));
        assert!(out.contrast_ratio(&bg) >= text.contrast_ratio(&bg));
    }

    #[test]
    fn test_ratio_for_unrecognized_token() {
        let mut text = color("#777777");
        let white = color("#ffffff");
        match text.ratio_for(&white, Some("gold"), 1.0) {
            Contrast::Ratio(r) => assert!((r - 4.48).abs() < 0.01),
            Contrast::Adjusted(_) => panic!("expected raw ratio"),
        }
    }
}
