//! Error handling for the slice-based decoding entry points.
//!
//! Fixed-size fallible arithmetic (inversion, square roots, canonical
//! decoding from fixed arrays) signals failure through [`subtle::CtOption`];
//! this module only covers conditions that are programming errors rather
//! than domain conditions, such as handing a decoder a slice of the wrong
//! length.

use core::fmt;

/// The error type for fallible byte-level entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for fallible byte-level entry points.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Inline validation helpers used by the decoders.
pub mod validate {
    use super::{Error, Result};

    /// Validate an exact length
    #[inline(always)]
    pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::Length {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }
}
