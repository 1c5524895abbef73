//! Byte layouts of ML-KEM keys and ciphertexts.
//!
//! ```text
//! ek = ByteEncode_12(t_hat) || rho
//! dk = ByteEncode_12(s_hat) || ek || H(ek) || z
//! c  = Compress_du(u) || Compress_dv(v)
//! ```
//!
//! Every function here expects buffers of exactly the size the parameter
//! set dictates; the typed wrappers enforce that at construction.

use mlkem_algorithms::poly::params::POLY_BYTES;
use mlkem_algorithms::poly::polynomial::Polynomial;

use super::params::{MlKemParams, MLKEM_SYMBYTES};
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Borrowed views into the four fields of a decapsulation key.
pub(crate) struct SecretKeyParts<'a> {
    pub dk_pke: &'a [u8],
    pub ek: &'a [u8],
    pub h_ek: &'a [u8],
    pub z: &'a [u8],
}

pub(crate) fn pack_pk<P: MlKemParams>(
    t_hat: &PolyVec<P>,
    rho: &[u8; MLKEM_SYMBYTES],
    out: &mut [u8],
) {
    let (poly_part, rho_part) = out.split_at_mut(P::POLYVEC_BYTES);
    t_hat.to_bytes(poly_part);
    rho_part.copy_from_slice(rho);
}

pub(crate) fn unpack_pk<P: MlKemParams>(pk: &[u8]) -> (PolyVec<P>, [u8; MLKEM_SYMBYTES]) {
    let (poly_part, rho_part) = pk.split_at(P::POLYVEC_BYTES);
    let mut rho = [0u8; MLKEM_SYMBYTES];
    rho.copy_from_slice(rho_part);
    (PolyVec::from_bytes(poly_part), rho)
}

pub(crate) fn pack_sk<P: MlKemParams>(s_hat: &PolyVec<P>, out: &mut [u8]) {
    s_hat.to_bytes(out);
}

pub(crate) fn unpack_sk<P: MlKemParams>(dk_pke: &[u8]) -> PolyVec<P> {
    PolyVec::from_bytes(dk_pke)
}

pub(crate) fn pack_ciphertext<P: MlKemParams>(u: &PolyVec<P>, v: &Polynomial, out: &mut [u8]) {
    let (u_part, v_part) = out.split_at_mut(P::POLYVEC_COMPRESSED_BYTES);
    u.compress(u_part);
    v.compress(P::DV, v_part);
}

pub(crate) fn unpack_ciphertext<P: MlKemParams>(ct: &[u8]) -> (PolyVec<P>, Polynomial) {
    let (u_part, v_part) = ct.split_at(P::POLYVEC_COMPRESSED_BYTES);
    (PolyVec::decompress(u_part), Polynomial::decompress(v_part, P::DV))
}

pub(crate) fn split_secret_key<P: MlKemParams>(sk: &[u8]) -> SecretKeyParts<'_> {
    let (dk_pke, rest) = sk.split_at(P::POLYVEC_BYTES);
    let (ek, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (h_ek, z) = rest.split_at(MLKEM_SYMBYTES);
    SecretKeyParts { dk_pke, ek, h_ek, z }
}

/// Encapsulation key modulus check: every 12-bit value of the encoded
/// vector must already be reduced modulo `q`.
pub(crate) fn check_public_key<P: MlKemParams>(pk: &[u8]) -> Result<()> {
    let mut ok = true;
    for chunk in pk[..P::POLYVEC_BYTES].chunks_exact(POLY_BYTES) {
        ok &= Polynomial::is_canonical_encoding(chunk);
    }
    validate::key(ok, P::PUBLIC_KEY_LABEL, "coefficient not reduced modulo q")
}
