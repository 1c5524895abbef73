//! Error handling for the primitives
//!
//! Hashing and sampling are total; the only failure is driving a sponge
//! out of order.

use core::fmt;

use mlkem_api::Error as CoreError;

/// Error raised by the primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation was called in a state that does not allow it
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// What was wrong with the state
        details: &'static str,
    },
}

/// Result type for the primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Processing {
                operation,
                details: _details,
            } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: _details.to_string(),
            },
        }
    }
}

pub use mlkem_api::error::ResultExt;

pub mod validate;
