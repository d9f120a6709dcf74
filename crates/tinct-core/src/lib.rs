//! # tinct-core
//!
//! Core types for the tinct color engine.
//!
//! This crate provides the foundational pieces used by the rest of tinct:
//!
//! - [`Rgba`], [`Hsla`], [`Cmyk`] - Structured forms of each representation
//! - [`numeric`] - Total numeric helpers (clamping, rounding, hue wrapping)
//! - [`luminance`] - WCAG relative luminance and contrast ratio
//! - [`Error`] - Failures when interpreting color strings and tokens
//!
//! ## Crate Structure
//!
//! ```text
//! tinct-core (this crate)
//!    ^
//!    |
//!    +-- tinct-color (ColorValue, conversions, transforms)
//!           ^
//!           |
//!           +-- tinct-cli (`tinct` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod luminance;
pub mod model;
pub mod numeric;

// Re-exports for convenience
pub use error::*;
pub use luminance::{contrast_ratio, relative_luminance};
pub use model::{Cmyk, Hsla, Rgba};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tinct_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::luminance::{contrast_ratio, relative_luminance};
    pub use crate::model::{Cmyk, Hsla, Rgba};
    pub use crate::numeric::{clamp_or, fraction_or, round_half_up, wrap_hue};
}
