//! The hash functions ML-KEM is built from.
//!
//! `H = SHA3-256`, `G = SHA3-512`, `J = SHAKE256` truncated to 32 bytes,
//! `PRF = SHAKE256` (via [`sample_cbd`]) and `XOF = SHAKE128` (via
//! [`sample_ntt`]). Every function is generic over the Keccak backend.

use mlkem_algorithms::hash::sha3::Sha3;
use mlkem_algorithms::keccak::KeccakPermutation;
use mlkem_algorithms::poly::polynomial::Polynomial;
use mlkem_algorithms::poly::sampling::{sample_cbd, sample_ntt, Eta};
use mlkem_algorithms::xof::shake::Shake;
use mlkem_params::utils::hash::SHAKE256_BLOCK_SIZE;

use super::params::{MlKemParams, MLKEM_MAX_K, MLKEM_SYMBYTES};
use super::polyvec::PolyVec;

/// `H(data)`.
pub(crate) fn hash_h<B: KeccakPermutation>(data: &[u8]) -> [u8; MLKEM_SYMBYTES] {
    Sha3::<B, 32>::digest_parts(&[data])
}

/// `G(parts[0] || parts[1] || ...)` split into its two 32-byte halves.
pub(crate) fn hash_g<B: KeccakPermutation>(
    parts: &[&[u8]],
) -> ([u8; MLKEM_SYMBYTES], [u8; MLKEM_SYMBYTES]) {
    let digest = Sha3::<B, 64>::digest_parts(parts);
    let mut lo = [0u8; MLKEM_SYMBYTES];
    let mut hi = [0u8; MLKEM_SYMBYTES];
    lo.copy_from_slice(&digest[..MLKEM_SYMBYTES]);
    hi.copy_from_slice(&digest[MLKEM_SYMBYTES..]);
    (lo, hi)
}

/// `J(z || c)`, the implicit-rejection key.
pub(crate) fn rkprf<B: KeccakPermutation>(z: &[u8], ct: &[u8]) -> [u8; MLKEM_SYMBYTES] {
    let mut out = [0u8; MLKEM_SYMBYTES];
    Shake::<B, SHAKE256_BLOCK_SIZE>::absorb_parts(&[z, ct]).squeeze(&mut out);
    out
}

/// The matrix `A` expanded from `rho`, or its transpose.
///
/// Entry `(i, j)` of `A` is `SampleNTT(rho || j || i)`.
pub(crate) fn gen_matrix<P: MlKemParams, B: KeccakPermutation>(
    rho: &[u8; MLKEM_SYMBYTES],
    transposed: bool,
) -> [PolyVec<P>; MLKEM_MAX_K] {
    let mut a = [
        PolyVec::zero(),
        PolyVec::zero(),
        PolyVec::zero(),
        PolyVec::zero(),
    ];
    for (i, row) in a.iter_mut().take(P::K).enumerate() {
        for (j, entry) in row.polys_mut().iter_mut().enumerate() {
            *entry = if transposed {
                sample_ntt::<B>(rho, i as u8, j as u8)
            } else {
                sample_ntt::<B>(rho, j as u8, i as u8)
            };
        }
    }
    a
}

/// A vector of CBD samples with consecutive nonces starting at `nonce`.
pub(crate) fn sample_noise_vec<P: MlKemParams, B: KeccakPermutation>(
    sigma: &[u8; MLKEM_SYMBYTES],
    nonce: u8,
    eta: Eta,
) -> PolyVec<P> {
    let mut v = PolyVec::zero();
    for (i, p) in v.polys_mut().iter_mut().enumerate() {
        *p = sample_cbd::<B>(sigma, nonce + i as u8, eta);
    }
    v
}

/// A single CBD sample.
pub(crate) fn sample_noise<B: KeccakPermutation>(
    sigma: &[u8; MLKEM_SYMBYTES],
    nonce: u8,
    eta: Eta,
) -> Polynomial {
    sample_cbd::<B>(sigma, nonce, eta)
}
