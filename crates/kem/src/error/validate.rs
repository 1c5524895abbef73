//! Structural key checks

use super::{Error, Result};

/// Fail with [`Error::InvalidKey`] unless `condition` holds
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidKey { key_type, reason })
    }
}
