//! Error handling for KEM operations
//!
//! Only structural key checks can fail inside the mechanism itself; length
//! errors are reported directly as [`mlkem_api::Error::InvalidLength`] by the
//! byte-level constructors, and a ciphertext that fails re-encryption is
//! never an error.

use core::fmt;

use mlkem_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key failed a structural check
    InvalidKey {
        /// Which key, e.g. `"ML-KEM-768 public key"`
        key_type: &'static str,
        /// Which check failed
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {}: {}", key_type, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey {
                key_type,
                reason: _reason,
            } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: _reason.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
