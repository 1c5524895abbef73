//! State checks for the primitives

use super::{Error, Result};

/// Fail with [`Error::Processing`] unless `condition` holds
#[inline(always)]
pub fn processing(condition: bool, operation: &'static str, details: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Processing { operation, details })
    }
}
