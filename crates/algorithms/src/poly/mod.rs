//! Polynomial arithmetic over `R_q = Z_q[X]/(X^256 + 1)` with `q = 3329`
//!
//! Coefficients are signed 16-bit values in the style of the reference
//! implementations: most operations keep them in a bounded but unnormalized
//! range, and [`polynomial::Polynomial::reduce`] brings them back to
//! `(-q/2, q/2]`. Serialization and compression normalize to `[0, q)`
//! themselves. Nothing in this module branches on or indexes by
//! coefficient values, except rejection sampling, which only ever sees
//! public data.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::ntt::{barrett_reduce, fqmul, montgomery_reduce, ZETAS};
    pub use super::params::{N, POLY_BYTES, Q};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{sample_cbd, sample_ntt, Eta};
}
