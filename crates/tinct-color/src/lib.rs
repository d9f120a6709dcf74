//! # tinct-color
//!
//! Color value engine: one value, several consistent representations.
//!
//! A [`ColorValue`] carries RGB, HSL, optional CMYK and alpha, kept in step
//! after every operation. On top of that it provides:
//!
//! - **Conversions** - [`convert`] between RGB, HSL and CMYK
//! - **Notations** - hex and functional codecs in [`notation`], named colors
//!   through a [`resolver::ColorResolver`]
//! - **Baselines** - every transform restores its receiver and returns the
//!   result (see [`value`])
//! - **Perceptual indexing** - [`indexer`] remaps interpolation so steps look even
//! - **Transforms** - lighten, darken, blend, gradient, rotate, grey,
//!   monotone, rainbow, random and more
//! - **Contrast** - WCAG ratio and level-seeking adjustment in [`contrast`]
//!
//! # Architecture
//!
//! ```text
//!                  tinct-color
//!                       |
//!     +---------+-------+--------+----------+
//!     |         |       |        |          |
//!  notation  convert  value  indexer   transforms
//!     |         |       |        |   (transform, rainbow,
//!  resolver     |       |        |    random, contrast)
//!     |         |       |        |          |
//!     +---------+-------+--------+----------+
//!                       |
//!                  tinct-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::{ColorValue, ContrastLevel, Notation};
//!
//! let mut brand = ColorValue::parse("#3366cc").unwrap();
//! let white = ColorValue::parse("white").unwrap();
//!
//! // transforms return new values, the receiver is unchanged
//! let light = brand.lighten(0.3, true);
//! let text = brand.ratio(&white, ContrastLevel::Aa, 0.0);
//!
//! assert_eq!(brand.hex(), "#3366cc");
//! assert!(light.lightness() > brand.lightness());
//! assert!(text.contrast_ratio(&white) >= 4.5);
//! println!("{}", light.format(Notation::Hsl));
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-core`] - Channel structs, numeric helpers, luminance, errors
//! - [`rand`] - Random perturbation
//! - [`tracing`] - Structured events for transforms and the indexer
//!
//! # Used By
//!
//! - `tinct-cli` - the `tinct` command line tool

#![warn(missing_docs)]

pub mod contrast;
pub mod convert;
pub mod indexer;
pub mod notation;
pub mod rainbow;
pub mod random;
pub mod resolver;
pub mod transform;
pub mod value;

// Re-exports
pub use contrast::{Contrast, ContrastLevel};
pub use notation::Notation;
pub use rainbow::Direction;
pub use random::RandomAmounts;
pub use resolver::{ColorResolver, CssNamedColors, NoResolver};
pub use value::{ColorValue, Snapshot};

pub use tinct_core::{Cmyk, Error, Hsla, Result, Rgba};

/// Prelude for common imports.
///
/// ```rust
/// use tinct_color::prelude::*;
///
/// let mut c = ColorValue::parse("#ff0000").unwrap();
/// assert_eq!(c.rotate(120.0).hex(), "#00ff00");
/// ```
pub mod prelude {
    pub use crate::contrast::{Contrast, ContrastLevel};
    pub use crate::indexer::{IndexDelta, series_index, uniform_index};
    pub use crate::notation::Notation;
    pub use crate::rainbow::Direction;
    pub use crate::random::RandomAmounts;
    pub use crate::resolver::ColorResolver;
    pub use crate::value::ColorValue;
    pub use tinct_core::{Cmyk, Error, Hsla, Result, Rgba};
}
