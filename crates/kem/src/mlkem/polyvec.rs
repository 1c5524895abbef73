//! Vectors of polynomials of dimension `K`.

use core::fmt;
use core::marker::PhantomData;

use mlkem_algorithms::poly::params::{N, POLY_BYTES};
use mlkem_algorithms::poly::polynomial::Polynomial;
use zeroize::Zeroize;

use super::params::{MlKemParams, MLKEM_MAX_K};

/// A vector of `P::K` polynomials.
///
/// Storage is sized for the largest rank; only the first `P::K` entries are
/// ever read or written.
pub(crate) struct PolyVec<P: MlKemParams> {
    polys: [Polynomial; MLKEM_MAX_K],
    _params: PhantomData<P>,
}

impl<P: MlKemParams> PolyVec<P> {
    /// The zero vector.
    pub fn zero() -> Self {
        Self {
            polys: [
                Polynomial::zero(),
                Polynomial::zero(),
                Polynomial::zero(),
                Polynomial::zero(),
            ],
            _params: PhantomData,
        }
    }

    pub fn polys(&self) -> &[Polynomial] {
        &self.polys[..P::K]
    }

    pub fn polys_mut(&mut self) -> &mut [Polynomial] {
        &mut self.polys[..P::K]
    }

    /// Forward NTT of every entry.
    pub fn ntt(&mut self) {
        for p in self.polys_mut() {
            p.ntt();
        }
    }

    /// Inverse NTT of every entry.
    pub fn invntt_tomont(&mut self) {
        for p in self.polys_mut() {
            p.invntt_tomont();
        }
    }

    pub fn reduce(&mut self) {
        for p in self.polys_mut() {
            p.reduce();
        }
    }

    /// Inner product in the NTT domain, reduced.
    ///
    /// Carries a factor of `2^-16` from the Montgomery multiplication.
    pub fn basemul_acc(&self, other: &Self) -> Polynomial {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys().iter().zip(other.polys()) {
            acc += &Polynomial::basemul_montgomery(a, b);
        }
        acc.reduce();
        acc
    }

    /// Coefficient-wise addition without reduction.
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys_mut().iter_mut().zip(other.polys()) {
            *a += b;
        }
    }

    /// 12-bit encoding into `K * POLY_BYTES` bytes.
    pub fn to_bytes(&self, out: &mut [u8]) {
        for (p, chunk) in self.polys().iter().zip(out.chunks_exact_mut(POLY_BYTES)) {
            p.to_bytes(chunk);
        }
    }

    /// 12-bit decoding of `K * POLY_BYTES` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut r = Self::zero();
        for (p, chunk) in r.polys_mut().iter_mut().zip(bytes.chunks_exact(POLY_BYTES)) {
            *p = Polynomial::from_bytes(chunk);
        }
        r
    }

    /// Compress every entry to `P::DU` bits.
    pub fn compress(&self, out: &mut [u8]) {
        let stride = N / 8 * P::DU as usize;
        for (p, chunk) in self.polys().iter().zip(out.chunks_exact_mut(stride)) {
            p.compress(P::DU, chunk);
        }
    }

    /// Inverse of [`PolyVec::compress`], up to rounding.
    pub fn decompress(bytes: &[u8]) -> Self {
        let stride = N / 8 * P::DU as usize;
        let mut r = Self::zero();
        for (p, chunk) in r.polys_mut().iter_mut().zip(bytes.chunks_exact(stride)) {
            *p = Polynomial::decompress(chunk, P::DU);
        }
        r
    }
}

impl<P: MlKemParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        self.polys.zeroize();
    }
}

impl<P: MlKemParams> fmt::Debug for PolyVec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolyVec<{}>([REDACTED])", P::NAME)
    }
}
