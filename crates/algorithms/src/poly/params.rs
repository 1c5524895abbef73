//! Ring and arithmetic constants

use mlkem_params::pqc::mlkem::{MLKEM_N, MLKEM_POLYBYTES, MLKEM_Q, MLKEM_SYMBYTES};

/// Polynomial degree
pub const N: usize = MLKEM_N;

/// Modulus
pub const Q: i16 = MLKEM_Q as i16;

/// `q^-1 mod 2^16`, as a signed value
pub const QINV: i16 = -3327;

/// `2^32 mod q`, the factor that moves a value into Montgomery form
pub const MONT_R2: i16 = 1353;

/// `2^32 / 128 mod q`: undoes the Montgomery factor of a base
/// multiplication and scales by `1/128` at the end of the inverse NTT
pub const INVNTT_SCALE: i16 = 1441;

/// Multiplier for Barrett reduction, `round(2^26 / q)`
pub const BARRETT_V: i32 = ((1 << 26) + Q as i32 / 2) / Q as i32;

/// Bytes in a polynomial serialized at 12 bits per coefficient
pub const POLY_BYTES: usize = MLKEM_POLYBYTES;

/// Bytes in a message, one bit per coefficient
pub const MSG_BYTES: usize = MLKEM_SYMBYTES;

const _: () = assert!(BARRETT_V == 20159);
const _: () = assert!((Q as i32 * QINV as i32) & 0xFFFF == 1);
const _: () = assert!(N / 8 == MSG_BYTES);
