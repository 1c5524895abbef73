//! SHA3-256 and SHA3-512 (FIPS 202)

use core::fmt;

use crate::hash::HashFunction;
use crate::keccak::{DefaultKeccak, KeccakPermutation, KeccakSponge};
use mlkem_params::utils::hash::{
    KECCAK_STATE_BYTES, SHA3_256_OUTPUT_SIZE, SHA3_512_OUTPUT_SIZE, SHA3_DOMAIN,
};

/// SHA-3 with an `OUT`-byte digest over the permutation backend `P`.
///
/// The rate follows from the capacity: `200 - 2 * OUT` bytes.
pub struct Sha3<P: KeccakPermutation, const OUT: usize> {
    sponge: KeccakSponge<P>,
}

/// SHA3-256 over the default backend.
pub type Sha3_256 = Sha3<DefaultKeccak, SHA3_256_OUTPUT_SIZE>;

/// SHA3-512 over the default backend.
pub type Sha3_512 = Sha3<DefaultKeccak, SHA3_512_OUTPUT_SIZE>;

impl<P: KeccakPermutation, const OUT: usize> Sha3<P, OUT> {
    const RATE: usize = KECCAK_STATE_BYTES - 2 * OUT;

    /// Create a fresh hasher.
    pub fn new() -> Self {
        Self {
            sponge: KeccakSponge::new(Self::RATE, SHA3_DOMAIN),
        }
    }

    /// Absorb more input.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.sponge.absorb_bytes(data);
        self
    }

    /// Produce the digest and reset for reuse.
    pub fn finalize(&mut self) -> [u8; OUT] {
        let mut out = [0u8; OUT];
        self.sponge.squeeze(&mut out);
        self.sponge.reset();
        out
    }

    /// Hash the concatenation of `parts` in one call.
    pub fn digest_parts(parts: &[&[u8]]) -> [u8; OUT] {
        let mut h = Self::new();
        for part in parts {
            h.update(part);
        }
        h.finalize()
    }
}

impl<P: KeccakPermutation, const OUT: usize> Default for Sha3<P, OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KeccakPermutation, const OUT: usize> Clone for Sha3<P, OUT> {
    fn clone(&self) -> Self {
        Self {
            sponge: self.sponge.clone(),
        }
    }
}

impl<P: KeccakPermutation, const OUT: usize> fmt::Debug for Sha3<P, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA3-{}<{}>", OUT * 8, P::NAME)
    }
}

impl<P: KeccakPermutation, const OUT: usize> HashFunction for Sha3<P, OUT> {
    type Output = [u8; OUT];

    const OUTPUT_SIZE: usize = OUT;
    const BLOCK_SIZE: usize = Self::RATE;
    const NAME: &'static str = match OUT {
        32 => "SHA3-256",
        64 => "SHA3-512",
        _ => "SHA3",
    };

    fn new() -> Self {
        Sha3::new()
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        Sha3::update(self, data)
    }

    fn finalize(&mut self) -> Self::Output {
        Sha3::finalize(self)
    }
}

/// One-shot SHA3-256.
pub fn sha3_256(data: &[u8]) -> [u8; SHA3_256_OUTPUT_SIZE] {
    Sha3_256::digest_parts(&[data])
}

/// One-shot SHA3-512.
pub fn sha3_512(data: &[u8]) -> [u8; SHA3_512_OUTPUT_SIZE] {
    Sha3_512::digest_parts(&[data])
}
