//! Fixed-output hash functions
//!
//! Only the SHA-3 family is provided; ML-KEM uses SHA3-256 as `H` and
//! SHA3-512 as `G`.

pub mod sha3;

pub use sha3::{sha3_256, sha3_512, Sha3, Sha3_256, Sha3_512};

/// A streaming hash function with a fixed-size output.
///
/// Hashing is total: absorbing and finalizing cannot fail.
pub trait HashFunction: Sized {
    /// Digest type, a byte array of [`HashFunction::OUTPUT_SIZE`] bytes.
    type Output: AsRef<[u8]> + Copy;

    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;

    /// Sponge rate in bytes.
    const BLOCK_SIZE: usize;

    /// Algorithm name, e.g. `"SHA3-256"`.
    const NAME: &'static str;

    /// Create a fresh hasher.
    fn new() -> Self;

    /// Absorb more input.
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Produce the digest and reset the hasher for reuse.
    fn finalize(&mut self) -> Self::Output;

    /// One-shot hash of `data`.
    fn digest(data: &[u8]) -> Self::Output {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}
