//! Sampling polynomials from seeds
//!
//! [`sample_ntt`] expands a public seed into a uniform polynomial in the
//! NTT domain by rejection sampling on SHAKE128 output. [`sample_cbd`]
//! derives noise from a secret seed with SHAKE256 and the centered
//! binomial distribution. The CBD path runs in constant time; rejection
//! sampling does not, and must only be fed public data.

use mlkem_internal::endian::{load24_le, load32_le};
use mlkem_params::utils::hash::{SHAKE128_BLOCK_SIZE, SHAKE256_BLOCK_SIZE};
use zeroize::Zeroize;

use super::params::{N, Q};
use super::polynomial::Polynomial;
use crate::keccak::KeccakPermutation;
use crate::xof::Shake;

/// Width of the centered binomial distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eta {
    /// Coefficients in `[-2, 2]`, 128 bytes of randomness per polynomial
    Two,
    /// Coefficients in `[-3, 3]`, 192 bytes of randomness per polynomial
    Three,
}

impl Eta {
    /// The numeric parameter
    pub const fn value(self) -> usize {
        match self {
            Eta::Two => 2,
            Eta::Three => 3,
        }
    }

    /// Bytes of PRF output consumed per polynomial
    pub const fn buffer_len(self) -> usize {
        N * 2 * self.value() / 8
    }
}

/// Largest CBD input buffer
const MAX_CBD_BYTES: usize = Eta::Three.buffer_len();

/// Blocks of SHAKE128 squeezed up front; enough for a full polynomial
/// with overwhelming probability
const REJ_UNIFORM_BLOCKS: usize = 3;

/// CBD with `eta = 2`: each coefficient is the difference of two sums of
/// two bits.
pub fn cbd2(buf: &[u8]) -> Polynomial {
    let mut r = Polynomial::zero();
    for i in 0..N / 8 {
        let t = load32_le(&buf[4 * i..]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            r.coeffs[8 * i + j] = a - b;
        }
    }
    r
}

/// CBD with `eta = 3`: each coefficient is the difference of two sums of
/// three bits.
pub fn cbd3(buf: &[u8]) -> Polynomial {
    let mut r = Polynomial::zero();
    for i in 0..N / 4 {
        let t = load24_le(&buf[3 * i..]);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            r.coeffs[4 * i + j] = a - b;
        }
    }
    r
}

/// Accept 12-bit candidates below `q` from `buf` into `r`.
///
/// Returns the number of coefficients written. Stops early once `r` is
/// full or `buf` runs out of whole 3-byte groups.
pub fn rej_uniform(r: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr == r.len() {
            break;
        }
        let d1 = u16::from(chunk[0]) | (u16::from(chunk[1] & 0x0F) << 8);
        let d2 = u16::from(chunk[1] >> 4) | (u16::from(chunk[2]) << 4);

        if d1 < Q as u16 {
            r[ctr] = d1 as i16;
            ctr += 1;
        }
        if d2 < Q as u16 && ctr < r.len() {
            r[ctr] = d2 as i16;
            ctr += 1;
        }
    }
    ctr
}

/// `SampleNTT(rho || x || y)`: a uniform polynomial in the NTT domain with
/// coefficients in `[0, q)`.
pub fn sample_ntt<P: KeccakPermutation>(rho: &[u8; 32], x: u8, y: u8) -> Polynomial {
    let mut xof = Shake::<P, SHAKE128_BLOCK_SIZE>::absorb_parts(&[rho, &[x, y]]);
    let mut buf = [0u8; REJ_UNIFORM_BLOCKS * SHAKE128_BLOCK_SIZE];
    xof.squeeze_blocks(&mut buf, REJ_UNIFORM_BLOCKS);

    let mut r = Polynomial::zero();
    let mut ctr = rej_uniform(&mut r.coeffs, &buf);
    while ctr < N {
        let block = &mut buf[..SHAKE128_BLOCK_SIZE];
        xof.squeeze_blocks(block, 1);
        ctr += rej_uniform(&mut r.coeffs[ctr..], block);
    }
    r
}

/// `SamplePolyCBD_eta(PRF(sigma, nonce))` with `PRF = SHAKE256`.
pub fn sample_cbd<P: KeccakPermutation>(sigma: &[u8; 32], nonce: u8, eta: Eta) -> Polynomial {
    let mut buf = [0u8; MAX_CBD_BYTES];
    let len = eta.buffer_len();
    Shake::<P, SHAKE256_BLOCK_SIZE>::absorb_parts(&[sigma, &[nonce]]).squeeze(&mut buf[..len]);

    let r = match eta {
        Eta::Two => cbd2(&buf[..len]),
        Eta::Three => cbd3(&buf[..len]),
    };
    buf.zeroize();
    r
}
