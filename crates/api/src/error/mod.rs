//! Error handling for the mlkem workspace

pub mod traits;
pub mod types;
pub mod validate;

pub use traits::ResultExt;
pub use types::{Error, Result};

impl From<rand::Error> for Error {
    fn from(_e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "entropy source",
            #[cfg(feature = "std")]
            message: _e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
