//! Constant-time operations to prevent timing attacks
//!
//! Two layers live here. The mask helpers (`ct_cmask_*`, `ct_sel_*`,
//! `ct_memcmp`, `ct_cmov_zero`) work on raw integers and route every
//! intermediate that is derived from secret data through a value barrier,
//! so the optimizer cannot prove its range and turn the blend back into a
//! branch. The generic helpers (`ct_eq`, `ct_select`, `ct_assign`) wrap
//! `subtle` for callers that already work with `Choice`.

use core::hint::black_box;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Opaque identity on `u8`.
#[inline(always)]
pub fn value_barrier_u8(b: u8) -> u8 {
    black_box(b)
}

/// Opaque identity on `u32`.
#[inline(always)]
pub fn value_barrier_u32(b: u32) -> u32 {
    black_box(b)
}

/// Returns `0xFF` if `x != 0` and `0x00` otherwise.
#[inline]
pub fn ct_cmask_nonzero_u8(x: u8) -> u8 {
    let t = 0u32.wrapping_sub(value_barrier_u32(x as u32));
    (t >> 24) as u8
}

/// Returns `0xFFFF` if `x != 0` and `0x0000` otherwise.
#[inline]
pub fn ct_cmask_nonzero_u16(x: u16) -> u16 {
    let t = 0u32.wrapping_sub(value_barrier_u32(x as u32));
    (t >> 16) as u16
}

/// Returns `0xFFFF` if `x < 0` and `0x0000` otherwise.
#[inline]
pub fn ct_cmask_neg_i16(x: i16) -> u16 {
    let t = value_barrier_u32(x as i32 as u32);
    (t >> 16) as u16
}

/// Returns `a` if `cond != 0` and `b` otherwise.
#[inline]
pub fn ct_sel_u8(a: u8, b: u8, cond: u8) -> u8 {
    b ^ (ct_cmask_nonzero_u8(cond) & (a ^ b))
}

/// Returns `a` if `cond != 0` and `b` otherwise.
#[inline]
pub fn ct_sel_i16(a: i16, b: i16, cond: u16) -> i16 {
    let mask = ct_cmask_nonzero_u16(cond) as i16;
    b ^ (mask & (a ^ b))
}

/// Compares two byte strings without an early exit.
///
/// Returns `0x00` if the slices are equal and `0xFF` otherwise. Slices of
/// different length compare unequal; the length itself is public.
pub fn ct_memcmp(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() {
        return 0xFF;
    }

    let mut r = 0u8;
    // `s` carries no information; it keeps the loop alive after `r`
    // saturates at 0xFF.
    let mut s = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        r |= x ^ y;
        s ^= x ^ y;
    }

    value_barrier_u8(ct_cmask_nonzero_u8(r) ^ s) ^ s
}

/// Copies `src` into `dst` if `cond == 0`, leaving `dst` untouched otherwise.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn ct_cmov_zero(dst: &mut [u8], src: &[u8], cond: u8) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = ct_sel_u8(*d, *s, cond);
    }
}

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the lengths
/// are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice`
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time selection
///
/// Returns `a` if `condition` is true, `b` otherwise.
pub fn ct_select<T>(a: T, b: T, condition: bool) -> T
where
    T: ConditionallySelectable,
{
    let choice = Choice::from(value_barrier_u8(condition as u8));
    T::conditional_select(&b, &a, choice)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `condition` is true, otherwise leaves `dst` unchanged.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: bool) {
    assert_eq!(dst.len(), src.len());

    let choice = Choice::from(value_barrier_u8(condition as u8));
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}
