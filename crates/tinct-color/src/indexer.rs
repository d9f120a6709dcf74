//! Perceptual indexer.
//!
//! Linear steps in lightness, RGB or hue do not look like equal steps:
//! relative luminance moves fast in some stretches and barely at all in
//! others. The indexer remaps an interpolation parameter `p` so that equal
//! steps in `p` land on roughly equal luminance steps.
//!
//! # Algorithm
//!
//! ```text
//! for j in 0.00, 0.01, ..., 1.00:
//!     apply delta * j to a working copy, measure luminance
//!     keep j when |luminance - last kept luminance| > threshold
//! breakpoints B = [0, kept..., 1]
//!
//! sc = p * (|B| - 1)
//! p' = B[floor(sc)] + (B[ceil(sc)] - B[floor(sc)]) * (sc - floor(sc))
//! ```
//!
//! Breakpoints crowd where luminance changes fast, so the remapped
//! parameter spends more of its range there.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::ColorValue;
//! use tinct_color::indexer::{uniform_index, IndexDelta};
//!
//! let black = ColorValue::parse("#000000").unwrap();
//! let p = uniform_index(black.snapshot(), 0.5, IndexDelta::Lightness(100.0));
//! assert!(p > 0.0 && p < 1.0);
//! assert_eq!(uniform_index(black.snapshot(), 1.0, IndexDelta::Lightness(100.0)), 1.0);
//! ```

use tracing::{debug, trace};

use tinct_core::numeric::{clamp_or, fraction_or, round_half_up, to_channel, wrap_hue};

use crate::value::Snapshot;

/// Number of sampling intervals between `j = 0` and `j = 1`.
pub const SAMPLE_STEPS: u32 = 100;

/// Luminance change that makes a lightness or RGB sample a breakpoint.
pub const LUMINANCE_THRESHOLD: f64 = 0.02;

/// Luminance change that makes a hue-rotation sample a breakpoint.
pub const HUE_LUMINANCE_THRESHOLD: f64 = 0.025;

/// The transformation being indexed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexDelta {
    /// Lightness change in percent; samples are rounded to whole percent.
    Lightness(f64),
    /// Independent channel changes; samples are rounded to whole channels.
    Rgb([f64; 3]),
    /// Hue rotation in degrees; samples are rounded to whole degrees.
    Hue(f64),
}

impl IndexDelta {
    /// Breakpoint threshold for this kind of delta.
    pub const fn threshold(&self) -> f64 {
        match self {
            IndexDelta::Hue(_) => HUE_LUMINANCE_THRESHOLD,
            _ => LUMINANCE_THRESHOLD,
        }
    }

    /// Luminance of `base` with the delta applied at fraction `j`.
    fn sample(&self, base: &Snapshot, j: f64) -> f64 {
        let mut t = *base;
        match *self {
            IndexDelta::Lightness(dl) => {
                t.l = round_half_up(clamp_or(t.l + dl * j, 0.0, 100.0));
                t.derive_from_hsl();
            }
            IndexDelta::Rgb([dr, dg, db]) => {
                t.r = to_channel(t.r as f64 + dr * j);
                t.g = to_channel(t.g as f64 + dg * j);
                t.b = to_channel(t.b as f64 + db * j);
            }
            IndexDelta::Hue(dh) => {
                t.h = wrap_hue(t.h + round_half_up(dh * j));
                t.derive_from_hsl();
            }
        }
        t.luminance()
    }
}

/// Ordered breakpoint table, always starting at `0` and ending at `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints(Vec<f64>);

impl Breakpoints {
    /// Samples `delta` applied to `base` at 101 evenly spaced points.
    pub fn sample(base: &Snapshot, delta: IndexDelta) -> Self {
        let threshold = delta.threshold();
        let mut points = vec![0.0];
        let mut last = delta.sample(base, 0.0);

        for i in 1..=SAMPLE_STEPS {
            let j = i as f64 / SAMPLE_STEPS as f64;
            let lum = delta.sample(base, j);
            if (lum - last).abs() > threshold {
                points.push(j);
                last = lum;
            }
        }
        if points.last() != Some(&1.0) {
            points.push(1.0);
        }

        debug!(breakpoints = points.len(), ?delta, "sampled breakpoints");
        Self(points)
    }

    /// Remaps `p` (clamped to `[0, 1]`, NaN as `0.5`) onto the table.
    pub fn remap(&self, p: f64) -> f64 {
        let p = fraction_or(p, 0.5);
        let last = self.0.len().saturating_sub(1);
        let sc = p * last as f64;
        let lo = (sc.floor() as usize).min(last);
        let hi = (sc.ceil() as usize).min(last);
        let (p1, p2) = (self.0[lo], self.0[hi]);
        p1 + (p2 - p1) * (sc - sc.floor())
    }

    /// The breakpoints.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a table holds at least `0` and `1`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Remaps `p` so equal steps look equally far apart in luminance.
pub fn uniform_index(base: &Snapshot, p: f64, delta: IndexDelta) -> f64 {
    trace!(p, ?delta, "uniform_index");
    Breakpoints::sample(base, delta).remap(p)
}

/// Evenly spaced index of `position` (1-based) in a series of `count`.
///
/// Positions past the end wrap around: each wrap subtracts one and adds
/// `shift` steps, so repeated passes land between earlier ones. `count`
/// below 2 counts as 2, `position` below 1 as 1, and `shift` is clamped to
/// `[0, count - 2]` so every wrap makes progress.
///
/// # Example
///
/// ```rust
/// use tinct_color::indexer::series_index;
///
/// assert_eq!(series_index(5, 1, 0.0), 0.0);
/// assert_eq!(series_index(5, 3, 0.0), 0.5);
/// assert_eq!(series_index(5, 5, 0.0), 1.0);
/// // the sixth item wraps onto the second
/// assert_eq!(series_index(5, 6, 0.0), 0.25);
/// ```
pub fn series_index(count: usize, position: usize, shift: f64) -> f64 {
    let count = count.max(2);
    let position = position.max(1);
    let step = 1.0 / (count - 1) as f64;
    let shift = clamp_or(shift, 0.0, (count - 2) as f64);

    let mut index = (position - 1) as f64 * step;
    while index > 1.0 {
        index = index - 1.0 + step * shift;
    }
    index
}
