//! Common implementations and shared functionality for the mlkem library
//!
//! This crate holds the secret-carrying containers used by the key and
//! shared-secret types of the KEM crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::SecretVec;
