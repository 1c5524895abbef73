//! Key Encapsulation Mechanisms
//!
//! This crate implements ML-KEM (FIPS 203) on top of the Keccak and
//! polynomial primitives of `mlkem-algorithms`, exposing each parameter set
//! through the `mlkem-api` KEM traits.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
#[cfg(feature = "mlkem-1024")]
pub use mlkem::MlKem1024;
#[cfg(feature = "mlkem-512")]
pub use mlkem::MlKem512;
#[cfg(feature = "mlkem-768")]
pub use mlkem::MlKem768;
pub use mlkem::{
    MlKem, MlKemCiphertext, MlKemParams, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
};
