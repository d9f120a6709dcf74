//! Random perturbation of a color.
//!
//! Each field with a non-zero amount is moved to a uniformly random point
//! in a window centered on its current value. The window is `amount` times
//! the field's domain width; a window that hangs off one end of the domain
//! is folded back inside.
//!
//! | Field | Domain | Default amount |
//! |-------|--------|----------------|
//! | `r, g, b` | `0..=255` | 1 |
//! | `h` | `[0, 360)`, wrapped | 1 |
//! | `s, l` | `[0, 100]` | 1 |
//! | `a` | `[0, 1]` | 0 |
//!
//! Hue, saturation and lightness are perturbed first, then the RGB
//! channels of the resulting color.

use rand::Rng;
use tracing::trace;

use tinct_core::numeric::{fraction_or, round_half_up, to_channel, wrap_hue};

use crate::value::ColorValue;

/// How far each field may wander, as fractions of its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomAmounts {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Hue
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
    /// Alpha
    pub a: f64,
}

impl Default for RandomAmounts {
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            h: 1.0,
            s: 1.0,
            l: 1.0,
            a: 0.0,
        }
    }
}

impl RandomAmounts {
    /// All amounts zero: nothing moves.
    pub const NONE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        h: 0.0,
        s: 0.0,
        l: 0.0,
        a: 0.0,
    };

    /// Only hue moves.
    pub const fn hue(amount: f64) -> Self {
        Self { h: amount, ..Self::NONE }
    }

    fn clamped(&self) -> Self {
        Self {
            r: fraction_or(self.r, 0.0),
            g: fraction_or(self.g, 0.0),
            b: fraction_or(self.b, 0.0),
            h: fraction_or(self.h, 0.0),
            s: fraction_or(self.s, 0.0),
            l: fraction_or(self.l, 0.0),
            a: fraction_or(self.a, 0.0),
        }
    }
}

/// Uniform pick in `center ± width * amount / 2`, folded into `[0, width]`.
fn jitter<R: Rng + ?Sized>(rng: &mut R, amount: f64, center: f64, width: f64) -> f64 {
    let span = width * amount;
    let v = center - span / 2.0 + rng.r#gen::<f64>() * span;
    if v < 0.0 {
        v + span
    } else if v > width {
        v - span
    } else {
        v
    }
}

impl ColorValue {
    /// Perturbs the color using the thread-local generator.
    pub fn random(&mut self, amounts: &RandomAmounts) -> ColorValue {
        self.random_with(amounts, &mut rand::thread_rng())
    }

    /// Perturbs the color using `rng`.
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use tinct_color::{ColorValue, RandomAmounts};
    ///
    /// let mut c = ColorValue::parse("#336699").unwrap();
    /// let a = c.random_with(&RandomAmounts::default(), &mut StdRng::seed_from_u64(7));
    /// let b = c.random_with(&RandomAmounts::default(), &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert_eq!(c.hex(), "#336699");
    /// ```
    pub fn random_with<R: Rng + ?Sized>(&mut self, amounts: &RandomAmounts, rng: &mut R) -> ColorValue {
        let amt = amounts.clamped();
        trace!(?amt, "random");
        self.apply(|s| {
            if amt.h > 0.0 {
                let h = s.h - 180.0 * amt.h + rng.r#gen::<f64>() * 360.0 * amt.h;
                s.h = wrap_hue(round_half_up(wrap_hue(h)));
            }
            if amt.s > 0.0 {
                s.s = round_half_up(jitter(rng, amt.s, s.s, 100.0)).clamp(0.0, 100.0);
            }
            if amt.l > 0.0 {
                s.l = round_half_up(jitter(rng, amt.l, s.l, 100.0)).clamp(0.0, 100.0);
            }
            s.derive_from_hsl();

            if amt.r > 0.0 {
                s.r = to_channel(jitter(rng, amt.r, s.r as f64, 255.0));
            }
            if amt.g > 0.0 {
                s.g = to_channel(jitter(rng, amt.g, s.g as f64, 255.0));
            }
            if amt.b > 0.0 {
                s.b = to_channel(jitter(rng, amt.b, s.b as f64, 255.0));
            }
            if amt.a > 0.0 {
                s.a = fraction_or(jitter(rng, amt.a, s.a, 1.0), 1.0);
            }
            s.derive_from_rgb();
        })
    }
}
