//! SHAKE extendable output functions (FIPS 202)

use core::fmt;

use super::ExtendableOutputFunction;
use crate::error::Result;
use crate::keccak::{DefaultKeccak, KeccakPermutation, KeccakSponge};
use mlkem_params::utils::hash::{
    KECCAK_STATE_BYTES, SHAKE128_BLOCK_SIZE, SHAKE256_BLOCK_SIZE, SHAKE_DOMAIN,
};

/// SHAKE with sponge rate `RATE` over the permutation backend `P`.
pub struct Shake<P: KeccakPermutation, const RATE: usize> {
    sponge: KeccakSponge<P>,
}

/// SHAKE128 over the default backend.
pub type ShakeXof128 = Shake<DefaultKeccak, SHAKE128_BLOCK_SIZE>;

/// SHAKE256 over the default backend.
pub type ShakeXof256 = Shake<DefaultKeccak, SHAKE256_BLOCK_SIZE>;

impl<P: KeccakPermutation, const RATE: usize> Shake<P, RATE> {
    /// Create an empty instance.
    pub fn new() -> Self {
        Self {
            sponge: KeccakSponge::new(RATE, SHAKE_DOMAIN),
        }
    }

    /// A fresh instance that has absorbed the concatenation of `parts` and
    /// is ready to squeeze.
    pub fn absorb_parts(parts: &[&[u8]]) -> Self {
        let mut xof = Self::new();
        for part in parts {
            xof.sponge.absorb_bytes(part);
        }
        xof.sponge.finalize();
        xof
    }

    /// Absorb more input. Fails once squeezing has started.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.sponge.absorb(data)
    }

    /// Write the next `output.len()` bytes of the stream.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        self.sponge.squeeze(output)
    }

    /// Squeeze `nblocks` whole rate-sized blocks into `output`.
    ///
    /// # Panics
    /// Panics if `output` is shorter than `nblocks * RATE`.
    pub fn squeeze_blocks(&mut self, output: &mut [u8], nblocks: usize) {
        self.sponge.squeeze(&mut output[..nblocks * RATE])
    }
}

impl<P: KeccakPermutation, const RATE: usize> Default for Shake<P, RATE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KeccakPermutation, const RATE: usize> Clone for Shake<P, RATE> {
    fn clone(&self) -> Self {
        Self {
            sponge: self.sponge.clone(),
        }
    }
}

impl<P: KeccakPermutation, const RATE: usize> fmt::Debug for Shake<P, RATE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SHAKE{}<{}>",
            <Self as ExtendableOutputFunction>::SECURITY_LEVEL,
            P::NAME
        )
    }
}

impl<P: KeccakPermutation, const RATE: usize> ExtendableOutputFunction for Shake<P, RATE> {
    const SECURITY_LEVEL: usize = (KECCAK_STATE_BYTES - RATE) * 4;
    const RATE: usize = RATE;
    const NAME: &'static str = match RATE {
        SHAKE128_BLOCK_SIZE => "SHAKE128",
        SHAKE256_BLOCK_SIZE => "SHAKE256",
        _ => "SHAKE",
    };

    fn new() -> Self {
        Shake::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        Shake::update(self, data)
    }

    fn finalize(&mut self) {
        self.sponge.finalize()
    }

    fn squeeze(&mut self, output: &mut [u8]) {
        Shake::squeeze(self, output)
    }

    fn reset(&mut self) {
        self.sponge.reset()
    }

    fn generate(data: &[u8], output: &mut [u8]) {
        Self::absorb_parts(&[data]).squeeze(output)
    }
}

/// One-shot SHAKE128: absorb `data`, fill `output`.
pub fn shake128(data: &[u8], output: &mut [u8]) {
    ShakeXof128::generate(data, output)
}

/// One-shot SHAKE256: absorb `data`, fill `output`.
pub fn shake256(data: &[u8], output: &mut [u8]) {
    ShakeXof256::generate(data, output)
}
