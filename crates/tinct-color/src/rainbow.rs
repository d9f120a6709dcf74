//! Hue travel toward a target color.
//!
//! [`ColorValue::rainbow`] rotates hue toward a target's hue while blending
//! saturation, lightness and alpha toward the target. [`Direction`] picks
//! which way around the hue circle to go:
//!
//! | Direction | Tokens | Hue delta |
//! |-----------|--------|-----------|
//! | [`Shortest`](Direction::Shortest) | `s`, `0` | `(-180, 180]`, a zero delta is a full turn |
//! | [`Clockwise`](Direction::Clockwise) | `c`, `1` | `(0, 360)` |
//! | [`CounterClockwise`](Direction::CounterClockwise) | `cc`, `-1` | `(-360, 0)` |
//! | [`Longest`](Direction::Longest) | `l`, `2` | the other way round, a zero delta is a full turn |
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{ColorValue, Direction};
//!
//! let mut red = ColorValue::parse("#ff0000").unwrap();
//! let blue = ColorValue::parse("#0000ff").unwrap();
//!
//! // red (0) -> blue (240): shortest is -120, clockwise is +240
//! let short = red.rainbow(0.5, Direction::Shortest, Some(&blue), false);
//! let long = red.rainbow(0.5, Direction::Clockwise, Some(&blue), false);
//! assert_eq!(short.hue(), 300.0);
//! assert_eq!(long.hue(), 120.0);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use tinct_core::numeric::{fraction_or, round_half_up, wrap_hue};
use tinct_core::{Error, Result};

use crate::indexer::{IndexDelta, uniform_index};
use crate::value::ColorValue;

/// Which way around the hue circle a rainbow travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The shorter arc.
    #[default]
    Shortest,
    /// Increasing hue only.
    Clockwise,
    /// Decreasing hue only.
    CounterClockwise,
    /// The longer arc.
    Longest,
}

impl Direction {
    /// Maps the numeric direction codes `0`, `1`, `-1` and `2`.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Direction::Shortest),
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            2 => Ok(Direction::Longest),
            _ => Err(Error::invalid_argument(
                "direction",
                format!("unknown direction code {code}"),
            )),
        }
    }

    /// Short token (`s`, `c`, `cc`, `l`).
    pub const fn token(&self) -> &'static str {
        match self {
            Direction::Shortest => "s",
            Direction::Clockwise => "c",
            Direction::CounterClockwise => "cc",
            Direction::Longest => "l",
        }
    }

    /// Brings a raw hue delta into this direction's convention.
    pub fn resolve(&self, mut delta: f64) -> f64 {
        if !delta.is_finite() {
            return 0.0;
        }
        match self {
            Direction::Shortest => {
                if delta < -180.0 {
                    delta += 360.0;
                } else if delta > 180.0 {
                    delta -= 360.0;
                } else if delta == 0.0 {
                    delta = 360.0;
                }
            }
            Direction::Clockwise => {
                while delta <= 0.0 {
                    delta += 360.0;
                }
            }
            Direction::CounterClockwise => {
                while delta >= 0.0 {
                    delta -= 360.0;
                }
            }
            Direction::Longest => {
                if delta > -180.0 && delta < 0.0 {
                    delta += 360.0;
                } else if delta > 0.0 && delta < 180.0 {
                    delta -= 360.0;
                } else if delta == 0.0 {
                    delta = 360.0;
                }
            }
        }
        delta
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "0" | "shortest" => Ok(Direction::Shortest),
            "c" | "1" | "clockwise" => Ok(Direction::Clockwise),
            "cc" | "-1" | "counterclockwise" | "counter-clockwise" => {
                Ok(Direction::CounterClockwise)
            }
            "l" | "2" | "longest" => Ok(Direction::Longest),
            _ => Err(Error::invalid_argument(
                "direction",
                format!("unknown direction `{s}`"),
            )),
        }
    }
}

impl ColorValue {
    /// Travels `strength` of the way toward `target` around the hue circle.
    ///
    /// Saturation, lightness and alpha blend linearly toward the target.
    /// A grey target contributes no hue. `None` targets a copy of this
    /// value, so the shortest direction makes a full turn. With `smart`,
    /// `strength` (NaN means `0.5`) is remapped through the hue indexer.
    pub fn rainbow(
        &mut self,
        strength: f64,
        direction: Direction,
        target: Option<&ColorValue>,
        smart: bool,
    ) -> ColorValue {
        let strength = fraction_or(strength, 0.5);
        let target = target.map_or_else(|| *self.copy().snapshot(), |t| *t.snapshot());
        trace!(strength, %direction, smart, target = ?target.hsla(), "rainbow");

        self.apply(|s| {
            let target_h = if target.is_achromatic() { s.h } else { target.h };
            s.s += (target.s - s.s) * strength;
            s.l += (target.l - s.l) * strength;
            s.a += (target.a - s.a) * strength;

            let delta = direction.resolve(target_h - s.h);
            let p = if smart {
                uniform_index(s, strength, IndexDelta::Hue(delta))
            } else {
                strength
            };
            s.h = wrap_hue(s.h + round_half_up(delta * p));
            s.derive_from_hsl();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!("s".parse::<Direction>(), Ok(Direction::Shortest));
        assert_eq!("CC".parse::<Direction>(), Ok(Direction::CounterClockwise));
        assert_eq!("-1".parse::<Direction>(), Ok(Direction::CounterClockwise));
        assert_eq!("2".parse::<Direction>(), Ok(Direction::Longest));
        assert!("x".parse::<Direction>().unwrap_err().is_argument_error());
        assert_eq!(Direction::from_code(1), Ok(Direction::Clockwise));
        assert!(Direction::from_code(3).is_err());
    }

    #[test]
    fn test_resolve_conventions() {
        assert_eq!(Direction::Shortest.resolve(240.0), -120.0);
        assert_eq!(Direction::Shortest.resolve(-240.0), 120.0);
        assert_eq!(Direction::Shortest.resolve(0.0), 360.0);
        assert_eq!(Direction::Clockwise.resolve(-90.0), 270.0);
        assert_eq!(Direction::Clockwise.resolve(0.0), 360.0);
        assert_eq!(Direction::CounterClockwise.resolve(90.0), -270.0);
        assert_eq!(Direction::CounterClockwise.resolve(-30.0), -30.0);
        assert_eq!(Direction::Longest.resolve(90.0), -270.0);
        assert_eq!(Direction::Longest.resolve(-90.0), 270.0);
        assert_eq!(Direction::Longest.resolve(0.0), 360.0);
    }

    #[test]
    fn test_full_strength_reaches_target() {
        let mut red = ColorValue::parse("#ff0000").unwrap();
        let blue = ColorValue::parse("#0000ff").unwrap();
        for direction in [
            Direction::Shortest,
            Direction::Clockwise,
            Direction::CounterClockwise,
            Direction::Longest,
        ] {
            let out = red.rainbow(1.0, direction, Some(&blue), false);
            assert_eq!(out.hex(), "#0000ff", "{direction}");
        }
    }

    #[test]
    fn test_default_target_is_full_turn() {
        let mut c = ColorValue::from_hsla(30.0, 100.0, 50.0, 1.0);
        assert_eq!(c.rainbow(0.5, Direction::Shortest, None, false).hue(), 210.0);
        assert_eq!(c.rainbow(1.0, Direction::Shortest, None, false).hue(), 30.0);
    }

    #[test]
    fn test_grey_target_keeps_hue() {
        let mut c = ColorValue::from_hsla(90.0, 100.0, 50.0, 1.0);
        let grey = ColorValue::parse("#808080").unwrap();
        let out = c.rainbow(0.5, Direction::Clockwise, Some(&grey), false);
        // hue delta resolves to a full clockwise turn; half of it is 180
        assert_eq!(out.hue(), 270.0);
        assert_eq!(out.saturation(), 50.0);
    }

    #[test]
    fn test_smart_hue_travel_is_indexed() {
        let mut red = ColorValue::parse("#ff0000").unwrap();
        let blue = ColorValue::parse("#0000ff").unwrap();
        let linear = red.rainbow(0.25, Direction::Clockwise, Some(&blue), false);
        let smart = red.rainbow(0.25, Direction::Clockwise, Some(&blue), true);
        assert_eq!(linear.hex(), "#ffff00");
        assert_eq!(smart.hex(), "#ffc400");
    }

    #[test]
    fn test_smart_endpoints() {
        let mut red = ColorValue::parse("#ff0000").unwrap();
        let green = ColorValue::parse("#00ff00").unwrap();
        assert_eq!(red.rainbow(0.0, Direction::Shortest, Some(&green), true), red);
        assert_eq!(red.rainbow(1.0, Direction::Shortest, Some(&green), true).hex(), "#00ff00");
    }
}
