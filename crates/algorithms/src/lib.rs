//! Symmetric and arithmetic building blocks for ML-KEM
//!
//! This crate holds everything below the KEM layer:
//!
//! - [`keccak`]: the Keccak-f[1600] permutation behind a backend trait,
//!   and the sponge construction
//! - [`hash`]: SHA3-256 and SHA3-512
//! - [`xof`]: SHAKE128 and SHAKE256
//! - [`poly`]: arithmetic in `Z_q[X]/(X^256 + 1)`, the NTT, sampling and
//!   compression
//!
//! Every type that touches the permutation is generic over a
//! [`keccak::KeccakPermutation`] backend. The aliases exported here
//! (`Sha3_256`, `ShakeXof128`, ...) use [`keccak::DefaultKeccak`].
//!
//! `unsafe` is denied crate-wide and allowed only inside the
//! architecture-specific permutation behind [`keccak::NativeKeccak`].
//!
//! The crate is usable in `no_std` environments; the `alloc` feature only
//! adds [`xof::ExtendableOutputFunction::squeeze_into_vec`].

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Keccak permutation backends and sponge
pub mod keccak;
pub use keccak::{
    DefaultKeccak, KeccakPermutation, KeccakSponge, NativeKeccak, ReferenceKeccak, UnrolledKeccak,
};

// Hash function implementations
pub mod hash;
pub use hash::{sha3_256, sha3_512, HashFunction, Sha3, Sha3_256, Sha3_512};

// XOF implementations
pub mod xof;
pub use xof::{shake128, shake256, ExtendableOutputFunction, Shake, ShakeXof128, ShakeXof256};

// Polynomial engine
pub mod poly;
