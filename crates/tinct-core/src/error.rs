//! Error types for tinct operations.
//!
//! Numeric inputs never fail in tinct: out-of-domain values are clamped
//! (see [`crate::numeric::clamp_or`]). Errors only arise when a *string*
//! has to be interpreted, either as a color notation or as an argument
//! token such as a WCAG level or a rainbow direction.
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{Error, Result};
//!
//! fn parse_steps(token: &str) -> Result<u32> {
//!     token
//!         .parse()
//!         .map_err(|_| Error::invalid_argument("steps", format!("`{token}` is not a count")))
//! }
//!
//! assert!(parse_steps("five").unwrap_err().is_argument_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `tinct-color` - notation parsing, resolver fallbacks, token parsing
//! - `tinct-cli` - wrapped into `anyhow` errors for the user

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting color input.
///
/// # Categories
///
/// - **Notation errors**: [`InvalidNotation`](Error::InvalidNotation)
/// - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A color string could not be parsed by the built-in codecs nor
    /// resolved by the color-string resolver.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::Error;
    ///
    /// let err = Error::invalid_notation("#12345");
    /// assert!(err.to_string().contains("#12345"));
    /// ```
    #[error("invalid color notation: `{notation}`")]
    InvalidNotation {
        /// The rejected input
        notation: String,
    },

    /// An argument token could not be interpreted.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidNotation`] error.
    #[inline]
    pub fn invalid_notation(notation: impl Into<String>) -> Self {
        Self::InvalidNotation {
            notation: notation.into(),
        }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a notation error.
    #[inline]
    pub fn is_notation_error(&self) -> bool {
        matches!(self, Self::InvalidNotation { .. })
    }

    /// Returns `true` if this is an argument error.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_notation() {
        let err = Error::invalid_notation("rgb(1,2)");
        assert!(err.to_string().contains("rgb(1,2)"));
        assert!(err.is_notation_error());
        assert!(!err.is_argument_error());
    }

    #[test]
    fn test_invalid_argument() {
        let err = Error::invalid_argument("level", "expected AA, AAA, AA18 or AAA18");
        let msg = err.to_string();
        assert!(msg.contains("level"));
        assert!(msg.contains("AAA18"));
        assert!(err.is_argument_error());
    }
}
