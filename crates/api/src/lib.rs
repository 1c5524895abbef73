//! Public API traits and types for the mlkem library
//!
//! This crate provides the public API surface shared by the workspace: the
//! error taxonomy, the KEM traits and the byte serialization contracts.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Kem, KemDerand, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
