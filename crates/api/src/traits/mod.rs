//! Trait definitions for the public API

pub mod kem;
pub mod serialize;

pub use kem::{Kem, KemDerand};
pub use serialize::{Serialize, SerializeSecret};
