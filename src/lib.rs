//! # mlkem
//!
//! ML-KEM (FIPS 203), the module-lattice key-encapsulation mechanism, in
//! pure Rust.
//!
//! ## Usage
//!
//! ```rust
//! use mlkem::prelude::*;
//! use mlkem::kem::MlKem768;
//!
//! let mut rng = rand::rngs::OsRng;
//! let (pk, sk) = MlKem768::keypair(&mut rng)?;
//! let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &pk)?;
//! let ss_receiver = MlKem768::decapsulate(&sk, &ct)?;
//! assert_eq!(ss_sender, ss_receiver);
//! # Ok::<(), mlkem::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the three ML-KEM parameter sets
//! - `algorithms`: Keccak, SHA3/SHAKE and the polynomial engine on their own
//! - `keccak-reference`: use the table-driven Keccak permutation as default
//! - `keccak-native`: use the architecture-specific Keccak permutation as default
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mlkem-api`]: error type and the `Kem` traits
//! - [`mlkem-common`]: zeroizing secret containers
//! - [`mlkem-internal`]: constant-time helpers
//! - [`mlkem-params`]: parameter set constants
//! - [`mlkem-algorithms`]: Keccak, hashes, XOFs, polynomial arithmetic
//! - [`mlkem-kem`]: ML-KEM-512, ML-KEM-768 and ML-KEM-1024

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use mlkem_api as api;
pub use mlkem_common as common;
pub use mlkem_internal as internal;
pub use mlkem_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use mlkem_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use mlkem_kem as kem;

/// Common imports for mlkem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, KemDerand, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::common::SecretVec;

    pub use zeroize::Zeroize;
}
