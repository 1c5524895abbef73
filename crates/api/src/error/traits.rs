//! Error plumbing for foreign results

use super::types::{Error, Result};

/// Attach an operation name while converting into [`Error`]
pub trait ResultExt<T> {
    /// Convert the error and set its context to `context`
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
