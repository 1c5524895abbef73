//! Coefficient packing and lossy compression
//!
//! Packing is FIPS 203 `ByteEncode_d` / `ByteDecode_d`: coefficients are
//! written least-significant bit first into a continuous little-endian
//! bit stream. Compression maps `[0, q)` to `[0, 2^d)` by rounding
//! `x * 2^d / q`; the division is replaced by a multiply and shift so the
//! cost does not depend on `x`.

use super::params::{N, Q};

/// `floor(n / q)` for `n < 2^23`, without a division instruction.
#[inline(always)]
pub fn div_q(n: u32) -> u32 {
    ((u64::from(n) * 10_321_340) >> 35) as u32
}

/// `round(x * 2^d / q) mod 2^d` for `x` in `[0, q)` and `1 <= d <= 11`.
#[inline(always)]
pub fn compress_d(x: u16, d: u32) -> u16 {
    let n = (u32::from(x) << d) + (Q as u32 - 1) / 2;
    (div_q(n) & ((1 << d) - 1)) as u16
}

/// `round(y * q / 2^d)` for `y` in `[0, 2^d)`.
#[inline(always)]
pub fn decompress_d(y: u16, d: u32) -> u16 {
    ((u32::from(y) * Q as u32 + (1 << (d - 1))) >> d) as u16
}

/// Pack 256 values of `d` bits each into `32 * d` bytes.
///
/// Only the low `d` bits of each value are used.
///
/// # Panics
/// Panics if `out` is shorter than `32 * d` bytes.
pub fn pack_bits(values: &[u16; N], d: u32, out: &mut [u8]) {
    let mask = (1u32 << d) - 1;
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut idx = 0usize;
    for &v in values.iter() {
        acc |= (u32::from(v) & mask) << bits;
        bits += d;
        while bits >= 8 {
            out[idx] = acc as u8;
            idx += 1;
            acc >>= 8;
            bits -= 8;
        }
    }
}

/// Inverse of [`pack_bits`]: read 256 values of `d` bits each.
///
/// # Panics
/// Panics if `bytes` is shorter than `32 * d` bytes.
pub fn unpack_bits(bytes: &[u8], d: u32) -> [u16; N] {
    let mask = (1u32 << d) - 1;
    let mut values = [0u16; N];
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut idx = 0usize;
    for v in values.iter_mut() {
        while bits < d {
            acc |= u32::from(bytes[idx]) << bits;
            idx += 1;
            bits += 8;
        }
        *v = (acc & mask) as u16;
        acc >>= d;
        bits -= d;
    }
    values
}
