//! Precondition checks that produce an [`Error`]

use super::types::{Error, Result};

/// Fail with [`Error::InvalidLength`] unless `actual == expected`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected,
            actual,
        })
    }
}

/// Fail with [`Error::InvalidKey`] unless `condition` holds
pub fn key(condition: bool, context: &'static str, _message: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidKey {
            context,
            #[cfg(feature = "std")]
            message: _message.into(),
        })
    }
}
