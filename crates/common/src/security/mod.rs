//! Security primitives for handling sensitive material
//!
//! Every type here zeroizes on drop and prints as `[REDACTED]`.

pub mod secret;

pub use secret::SecretBuffer;

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
