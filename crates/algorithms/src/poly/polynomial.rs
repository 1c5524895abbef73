//! Polynomials in `R_q` and the operations ML-KEM performs on them

use core::fmt;
use core::ops::{AddAssign, SubAssign};

use mlkem_internal::constant_time::{ct_cmask_neg_i16, ct_sel_i16};
use zeroize::Zeroize;

use super::ntt::{self, barrett_reduce, basemul, fqmul, ZETAS};
use super::params::{MONT_R2, MSG_BYTES, N, POLY_BYTES, Q};
use super::serialize::{compress_d, decompress_d, pack_bits, unpack_bits};

/// An element of `R_q`, in either the standard or the NTT domain.
///
/// Which domain a value is in is tracked by the caller. Coefficients are
/// signed and may be unnormalized; see the bounds on each operation.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients, lowest degree first (bit-reversed order in the NTT domain)
    pub coeffs: [i16; N],
}

/// Map a coefficient in `(-q, q)` to `[0, q)`.
#[inline(always)]
fn to_unsigned(c: i16) -> u16 {
    (c + (Q & ct_cmask_neg_i16(c) as i16)) as u16
}

impl Polynomial {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Wrap raw coefficients
    pub const fn from_coeffs(coeffs: [i16; N]) -> Self {
        Self { coeffs }
    }

    /// Barrett-reduce every coefficient into `[-(q-1)/2, (q-1)/2]`.
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Reduce and map every coefficient into `[0, q)`.
    pub fn normalize(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = to_unsigned(barrett_reduce(*c)) as i16;
        }
    }

    /// Multiply every coefficient by `2^16` (into Montgomery form).
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, MONT_R2);
        }
    }

    /// Forward NTT followed by a reduction, so the output is bounded by `q`.
    pub fn ntt(&mut self) {
        ntt::ntt(&mut self.coeffs);
        self.reduce();
    }

    /// Inverse NTT, multiplying by `2^16` on the way out.
    pub fn invntt_tomont(&mut self) {
        ntt::invntt(&mut self.coeffs);
    }

    /// Product of two polynomials in the NTT domain, with a factor of
    /// `2^-16`. The output is bounded by `2q`.
    pub fn basemul_montgomery(a: &Self, b: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N / 4 {
            let zeta = ZETAS[64 + i];
            for (off, z) in [(4 * i, zeta), (4 * i + 2, -zeta)] {
                let p = basemul(
                    [a.coeffs[off], a.coeffs[off + 1]],
                    [b.coeffs[off], b.coeffs[off + 1]],
                    z,
                );
                r.coeffs[off] = p[0];
                r.coeffs[off + 1] = p[1];
            }
        }
        r
    }

    /// Serialize with 12 bits per coefficient (`ByteEncode_12`).
    ///
    /// Coefficients must be bounded by `q` in absolute value.
    ///
    /// # Panics
    /// Panics if `out` is shorter than `POLY_BYTES`.
    pub fn to_bytes(&self, out: &mut [u8]) {
        let mut values = [0u16; N];
        for (v, &c) in values.iter_mut().zip(self.coeffs.iter()) {
            *v = to_unsigned(c);
        }
        pack_bits(&values, 12, &mut out[..POLY_BYTES]);
        values.zeroize();
    }

    /// Deserialize 12-bit coefficients (`ByteDecode_12`).
    ///
    /// Values are taken as-is, so the result lies in `[0, 4096)`; callers
    /// that need canonical input check it separately.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than `POLY_BYTES`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut values = unpack_bits(&bytes[..POLY_BYTES], 12);
        let mut r = Self::zero();
        for (c, &v) in r.coeffs.iter_mut().zip(values.iter()) {
            *c = v as i16;
        }
        values.zeroize();
        r
    }

    /// Whether every 12-bit value in `bytes` is below `q`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than `POLY_BYTES`.
    pub fn is_canonical_encoding(bytes: &[u8]) -> bool {
        let values = unpack_bits(&bytes[..POLY_BYTES], 12);
        let mut bad = 0u16;
        for &v in values.iter() {
            bad |= (Q as u16 - 1).wrapping_sub(v) & 0x8000;
        }
        bad == 0
    }

    /// Map each message bit to `0` or `(q + 1) / 2`.
    pub fn from_msg(msg: &[u8; MSG_BYTES]) -> Self {
        let half = (Q + 1) / 2;
        let mut r = Self::zero();
        for (i, &byte) in msg.iter().enumerate() {
            for j in 0..8 {
                let bit = u16::from((byte >> j) & 1);
                r.coeffs[8 * i + j] = ct_sel_i16(half, 0, bit);
            }
        }
        r
    }

    /// Round each coefficient to one bit. Coefficients must be bounded by `q`.
    pub fn to_msg(&self) -> [u8; MSG_BYTES] {
        let mut msg = [0u8; MSG_BYTES];
        for (i, byte) in msg.iter_mut().enumerate() {
            for j in 0..8 {
                let bit = compress_d(to_unsigned(self.coeffs[8 * i + j]), 1);
                *byte |= (bit as u8) << j;
            }
        }
        msg
    }

    /// Compress to `d` bits per coefficient and pack into `32 * d` bytes.
    ///
    /// Coefficients must be bounded by `q` in absolute value.
    ///
    /// # Panics
    /// Panics if `out` is shorter than `32 * d` bytes.
    pub fn compress(&self, d: u32, out: &mut [u8]) {
        let mut values = [0u16; N];
        for (v, &c) in values.iter_mut().zip(self.coeffs.iter()) {
            *v = compress_d(to_unsigned(c), d);
        }
        pack_bits(&values, d, out);
    }

    /// Unpack `d`-bit values and decompress them into `[0, q)`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than `32 * d` bytes.
    pub fn decompress(bytes: &[u8], d: u32) -> Self {
        let values = unpack_bits(bytes, d);
        let mut r = Self::zero();
        for (c, &v) in r.coeffs.iter_mut().zip(values.iter()) {
            *c = decompress_d(v, d) as i16;
        }
        r
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    /// Coefficient-wise addition without reduction
    fn add_assign(&mut self, rhs: &Polynomial) {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += *b;
        }
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    /// Coefficient-wise subtraction without reduction
    fn sub_assign(&mut self, rhs: &Polynomial) {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a -= *b;
        }
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polynomial([REDACTED])")
    }
}
