//! Extendable Output Functions (XOF)
//!
//! SHAKE128 and SHAKE256 over the Keccak sponge. ML-KEM uses SHAKE128 to
//! expand the public matrix and SHAKE256 as both the noise PRF and the
//! implicit-rejection function `J`.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

use crate::error::Result;

pub mod shake;

pub use shake::{shake128, shake256, Shake, ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction: Sized {
    /// Security level in bits
    const SECURITY_LEVEL: usize;

    /// Sponge rate in bytes
    const RATE: usize;

    /// Algorithm name
    const NAME: &'static str;

    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input. Fails once output has been squeezed.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Ends the input. Squeezing finalizes implicitly, so calling this is optional.
    fn finalize(&mut self);

    /// Writes the next `output.len()` bytes of the stream
    fn squeeze(&mut self, output: &mut [u8]);

    /// Squeezes the specified number of output bytes into a new vector
    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out);
        out
    }

    /// Resets to the empty absorbing state
    fn reset(&mut self);

    /// Hashes `data` and fills `output` in a single call
    fn generate(data: &[u8], output: &mut [u8]);
}
