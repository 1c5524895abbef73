//! Number Theoretic Transform and modular reduction
//!
//! The forward transform is an in-place Cooley-Tukey butterfly network
//! with 7 layers, the inverse a Gentleman-Sande network. `Z_q` has 256th
//! but no 512th roots of unity, so `X^256 + 1` splits into 128 quadratic
//! factors and multiplication in the NTT domain is a product of 128
//! degree-1 polynomials modulo `X^2 - zeta`.
//!
//! ## Montgomery form
//! [`fqmul`] returns `a * b * 2^-16 mod q`. The twiddle factors carry a
//! factor of `2^16`, so butterflies stay in the standard domain. A base
//! multiplication leaves a `2^-16` behind, which the final scaling of
//! [`invntt`] cancels.

use super::params::{INVNTT_SCALE, N, Q, QINV};

/// Montgomery reduction: for `|a| < q * 2^15` returns `r` with
/// `r = a * 2^-16 mod q` and `|r| < q`.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - i32::from(t) * i32::from(Q)) >> 16) as i16
}

/// Barrett reduction: returns the representative of `a mod q` in
/// `[-(q-1)/2, (q-1)/2]`.
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = super::params::BARRETT_V;
    let t = ((V * i32::from(a) + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Multiplication followed by Montgomery reduction
#[inline(always)]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(i32::from(a) * i32::from(b))
}

const fn pow_mod(base: u32, mut exp: u32) -> u32 {
    let q = Q as u32;
    let mut acc = 1u32;
    let mut b = base % q;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = acc * b % q;
        }
        b = b * b % q;
        exp >>= 1;
    }
    acc
}

const fn bitrev7(i: usize) -> u32 {
    let mut r = 0u32;
    let mut bit = 0;
    while bit < 7 {
        r |= (((i >> bit) & 1) as u32) << (6 - bit);
        bit += 1;
    }
    r
}

/// Twiddle factors `17^bitrev7(i) * 2^16 mod q`, centered around zero.
pub const ZETAS: [i16; 128] = {
    let q = Q as u32;
    let mut table = [0i16; 128];
    let mut i = 0;
    while i < 128 {
        let v = (pow_mod(17, bitrev7(i)) << 16) % q;
        table[i] = if v > q / 2 { v as i16 - Q } else { v as i16 };
        i += 1;
    }
    table
};

/// Forward NTT in place.
///
/// Input coefficients must be bounded by `q` in absolute value; the output
/// is in bit-reversed order and bounded by `8q`.
pub fn ntt(r: &mut [i16; N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        for start in (0..N).step_by(2 * len) {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
        }
        len >>= 1;
    }
}

/// Inverse NTT in place, including the scaling by `2^16 / 128`.
///
/// Input coefficients must be bounded by `q` in absolute value; the output
/// is bounded by `q`.
pub fn invntt(r: &mut [i16; N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= 128 {
        for start in (0..N).step_by(2 * len) {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = fqmul(zeta, r[j + len] - t);
            }
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = fqmul(*c, INVNTT_SCALE);
    }
}

/// Product of `a0 + a1 X` and `b0 + b1 X` modulo `X^2 - zeta`, with a
/// Montgomery factor of `2^-16`.
#[inline(always)]
pub fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = fqmul(fqmul(a[1], b[1]), zeta) + fqmul(a[0], b[0]);
    let r1 = fqmul(a[0], b[1]) + fqmul(a[1], b[0]);
    [r0, r1]
}
