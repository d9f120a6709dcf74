//! Numeric helpers shared by every color operation.
//!
//! Every public setter in tinct is total: it never fails on a bad number.
//! The helpers here make that possible:
//!
//! - [`clamp_or`] - clamp into `[0, max]` with a fallback for NaN
//! - [`round_half_up`] - rounding that sends halves towards `+inf`
//! - [`round_to`] - fixed decimal rounding
//! - [`wrap_hue`] - fold any angle into `[0, 360)`
//! - [`to_channel`] - round and saturate into a `u8` channel
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::numeric::{clamp_or, wrap_hue};
//!
//! assert_eq!(clamp_or(1.7, 0.0, 1.0), 1.0);
//! assert_eq!(clamp_or(f64::NAN, 0.5, 1.0), 0.5);
//! assert_eq!(wrap_hue(-10.0), 350.0);
//! ```

/// Clamps `value` into `[0, max]`, returning `default` for NaN.
///
/// The value is not rounded; rounding is the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use tinct_core::numeric::clamp_or;
///
/// assert_eq!(clamp_or(-3.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp_or(0.25, 0.0, 1.0), 0.25);
/// assert_eq!(clamp_or(300.0, 0.0, 255.0), 255.0);
/// assert_eq!(clamp_or(f64::NAN, 1.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp_or(value: f64, default: f64, max: f64) -> f64 {
    if value.is_nan() {
        default
    } else if value < 0.0 {
        0.0
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a fraction into `[0, 1]` with a NaN fallback.
///
/// Shorthand for `clamp_or(value, default, 1.0)`.
#[inline]
pub fn fraction_or(value: f64, default: f64) -> f64 {
    clamp_or(value, default, 1.0)
}

/// Rounds to the nearest integer, halves towards positive infinity.
///
/// Differs from [`f64::round`] only for negative halves:
/// `round_half_up(-2.5) == -2.0`.
///
/// # Example
///
/// ```rust
/// use tinct_core::numeric::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.51), -3.0);
/// ```
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to a fixed number of decimals.
///
/// # Example
///
/// ```rust
/// use tinct_core::numeric::round_to;
///
/// assert_eq!(round_to(49.96, 1), 50.0);
/// assert_eq!(round_to(12.34567, 3), 12.346);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

/// Folds an angle in degrees into `[0, 360)`.
///
/// NaN folds to `0`.
///
/// # Example
///
/// ```rust
/// use tinct_core::numeric::wrap_hue;
///
/// assert_eq!(wrap_hue(360.0), 0.0);
/// assert_eq!(wrap_hue(725.0), 5.0);
/// assert_eq!(wrap_hue(-370.0), 350.0);
/// ```
#[inline]
pub fn wrap_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid may land on 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rounds a value to the nearest integer and saturates it into a channel.
///
/// # Example
///
/// ```rust
/// use tinct_core::numeric::to_channel;
///
/// assert_eq!(to_channel(127.5), 128);
/// assert_eq!(to_channel(-4.0), 0);
/// assert_eq!(to_channel(300.0), 255);
/// ```
#[inline]
pub fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    round_half_up(value).clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two values.
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_totality() {
        for &x in &[-1e9, -1.0, -0.0, 0.0, 0.3, 1.0, 1.5, 1e9, f64::INFINITY, f64::NEG_INFINITY] {
            let v = clamp_or(x, 0.5, 1.0);
            assert!((0.0..=1.0).contains(&v), "x={x} v={v}");
        }
        assert_eq!(clamp_or(f64::NAN, 0.42, 1.0), 0.42);
        assert_eq!(clamp_or(f64::NAN, 7.0, 100.0), 7.0);
    }

    #[test]
    fn test_clamp_passthrough_unrounded() {
        assert_eq!(clamp_or(12.345, 0.0, 100.0), 12.345);
        assert_eq!(fraction_or(0.125, 1.0), 0.125);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-30.0), -30.0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(359.5), 359.5);
        assert_eq!(wrap_hue(-5.0), 355.0);
        assert_eq!(wrap_hue(720.0), 0.0);
        assert_eq!(wrap_hue(f64::NAN), 0.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(0.4), 0);
        assert_eq!(to_channel(254.5), 255);
        assert_eq!(to_channel(f64::NAN), 0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 0.0, 1.0), 0.0);
    }
}
