//! Keccak-f[1600] permutation backends and the sponge built on top of them
//!
//! The permutation is modelled as a narrow trait with one associated
//! function, [`KeccakPermutation::permute`]. Backends are zero-sized types;
//! the sponge, the SHA-3 hashes and the SHAKE XOFs are generic over the
//! backend, and [`DefaultKeccak`] picks one at compile time. All backends
//! are bit-exact, so switching the alias never changes any output.

use core::fmt;
use core::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use mlkem_params::utils::hash::{KECCAK_LANES, KECCAK_ROUNDS, KECCAK_STATE_BYTES};

mod native;
mod reference;
mod unrolled;

pub use native::NativeKeccak;
pub use reference::ReferenceKeccak;
pub use unrolled::UnrolledKeccak;

/// The 1600-bit Keccak state as 25 little-endian lanes, indexed `x + 5 * y`.
pub type KeccakState = [u64; KECCAK_LANES];

/// Keccak round constants.
pub(crate) const RC: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// A Keccak-f[1600] implementation.
///
/// Implementations must be bit-exact with each other for every input state.
pub trait KeccakPermutation {
    /// Short backend name, used by benches and diagnostics.
    const NAME: &'static str;

    /// Apply the 24-round permutation in place.
    fn permute(state: &mut KeccakState);
}

/// Backend used when none is named explicitly.
#[cfg(feature = "keccak-reference")]
pub type DefaultKeccak = ReferenceKeccak;

/// Backend used when none is named explicitly.
#[cfg(all(feature = "keccak-native", not(feature = "keccak-reference")))]
pub type DefaultKeccak = NativeKeccak;

/// Backend used when none is named explicitly.
#[cfg(not(any(feature = "keccak-reference", feature = "keccak-native")))]
pub type DefaultKeccak = UnrolledKeccak;

#[inline(always)]
fn xor_bytes_into_state(state: &mut KeccakState, offset: usize, data: &[u8]) {
    for (i, &b) in data.iter().enumerate() {
        let pos = offset + i;
        state[pos / 8] ^= u64::from(b) << (8 * (pos % 8));
    }
}

#[inline(always)]
fn extract_bytes_from_state(state: &KeccakState, offset: usize, out: &mut [u8]) {
    for (i, o) in out.iter_mut().enumerate() {
        let pos = offset + i;
        *o = (state[pos / 8] >> (8 * (pos % 8))) as u8;
    }
}

/// Incremental Keccak sponge with FIPS 202 padding.
///
/// The sponge starts in the absorbing phase. The first call to
/// [`KeccakSponge::finalize`] or [`KeccakSponge::squeeze`] pads the input
/// with the domain byte and switches to squeezing; from then on absorbing
/// is rejected until [`KeccakSponge::reset`].
pub struct KeccakSponge<P: KeccakPermutation> {
    state: KeccakState,
    rate: usize,
    pos: usize,
    domain: u8,
    squeezing: bool,
    _backend: PhantomData<P>,
}

impl<P: KeccakPermutation> KeccakSponge<P> {
    /// Create an empty sponge with the given rate in bytes and domain byte.
    ///
    /// The rate must be a nonzero multiple of 8 below 200; every caller in
    /// this crate passes one of the FIPS 202 constants.
    pub fn new(rate: usize, domain: u8) -> Self {
        debug_assert!(rate > 0 && rate < KECCAK_STATE_BYTES && rate.is_multiple_of(8));
        Self {
            state: [0u64; KECCAK_LANES],
            rate,
            pos: 0,
            domain,
            squeezing: false,
            _backend: PhantomData,
        }
    }

    /// Rate in bytes.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Whether the sponge has been padded and is producing output.
    pub fn is_squeezing(&self) -> bool {
        self.squeezing
    }

    /// Absorb more input. Fails once squeezing has started.
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        validate::processing(!self.squeezing, "KeccakSponge::absorb", "absorb after squeeze")?;
        self.absorb_bytes(data);
        Ok(())
    }

    /// Absorb without the phase check. Only for callers that own a sponge
    /// still in the absorbing phase.
    pub(crate) fn absorb_bytes(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = core::cmp::min(self.rate - self.pos, data.len());
            xor_bytes_into_state(&mut self.state, self.pos, &data[..take]);
            self.pos += take;
            data = &data[take..];
            if self.pos == self.rate {
                P::permute(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Pad the absorbed input and switch to squeezing. Idempotent.
    pub fn finalize(&mut self) {
        if self.squeezing {
            return;
        }
        xor_bytes_into_state(&mut self.state, self.pos, &[self.domain]);
        xor_bytes_into_state(&mut self.state, self.rate - 1, &[0x80]);
        P::permute(&mut self.state);
        self.pos = 0;
        self.squeezing = true;
    }

    /// Write the next `out.len()` bytes of output.
    ///
    /// Consecutive calls continue the same stream, so splitting a request
    /// never changes the bytes produced.
    pub fn squeeze(&mut self, mut out: &mut [u8]) {
        self.finalize();
        while !out.is_empty() {
            if self.pos == self.rate {
                P::permute(&mut self.state);
                self.pos = 0;
            }
            let take = core::cmp::min(self.rate - self.pos, out.len());
            let (head, tail) = out.split_at_mut(take);
            extract_bytes_from_state(&self.state, self.pos, head);
            self.pos += take;
            out = tail;
        }
    }

    /// Return to the empty absorbing state, keeping rate and domain.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.pos = 0;
        self.squeezing = false;
    }
}

impl<P: KeccakPermutation> Clone for KeccakSponge<P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            rate: self.rate,
            pos: self.pos,
            domain: self.domain,
            squeezing: self.squeezing,
            _backend: PhantomData,
        }
    }
}

impl<P: KeccakPermutation> fmt::Debug for KeccakSponge<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakSponge")
            .field("backend", &P::NAME)
            .field("rate", &self.rate)
            .field("squeezing", &self.squeezing)
            .finish_non_exhaustive()
    }
}

impl<P: KeccakPermutation> Zeroize for KeccakSponge<P> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos.zeroize();
        self.squeezing = false;
    }
}

impl<P: KeccakPermutation> Drop for KeccakSponge<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: KeccakPermutation> ZeroizeOnDrop for KeccakSponge<P> {}
