//! The Fujisaki-Okamoto transform turning K-PKE into ML-KEM.
//!
//! Decapsulation never branches on whether re-encryption matched: the
//! real key and the implicit-rejection key are both computed and one is
//! selected with a constant-time move.

use mlkem_algorithms::keccak::KeccakPermutation;
use mlkem_internal::constant_time::{ct_cmov_zero, ct_eq, ct_memcmp};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke;
use super::params::{MlKemParams, MLKEM_MAX_CIPHERTEXT_BYTES, MLKEM_SS_BYTES, MLKEM_SYMBYTES};
use super::serialize::{check_public_key, split_secret_key};
use super::symmetric::{hash_g, hash_h, rkprf};
use crate::error::{validate, Result};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; MLKEM_SS_BYTES]>;

/// `ML-KEM.KeyGen_internal(d, z)`.
pub(crate) fn keypair_derand<P: MlKemParams, B: KeccakPermutation>(
    d: &[u8; MLKEM_SYMBYTES],
    z: &[u8; MLKEM_SYMBYTES],
    pk: &mut [u8],
    sk: &mut [u8],
) {
    let (dk_pke, rest) = sk.split_at_mut(P::POLYVEC_BYTES);
    cpa_pke::keypair::<P, B>(d, pk, dk_pke);

    let (ek, rest) = rest.split_at_mut(P::PUBLIC_KEY_BYTES);
    ek.copy_from_slice(pk);
    let (h_ek, z_part) = rest.split_at_mut(MLKEM_SYMBYTES);
    h_ek.copy_from_slice(&hash_h::<B>(pk));
    z_part.copy_from_slice(z);
}

/// `ML-KEM.Encaps_internal(ek, m)` preceded by the encapsulation key check.
pub(crate) fn encaps_derand<P: MlKemParams, B: KeccakPermutation>(
    pk: &[u8],
    m: &[u8; MLKEM_SYMBYTES],
    ct: &mut [u8],
) -> Result<SharedSecretBytes> {
    check_public_key::<P>(pk)?;
    Ok(encaps_checked::<P, B>(pk, m, ct))
}

/// `ML-KEM.Encaps_internal(ek, m)` for a key that already passed
/// [`check_public_key`].
pub(crate) fn encaps_checked<P: MlKemParams, B: KeccakPermutation>(
    pk: &[u8],
    m: &[u8; MLKEM_SYMBYTES],
    ct: &mut [u8],
) -> SharedSecretBytes {
    let h_pk = hash_h::<B>(pk);
    let (k, mut r) = hash_g::<B>(&[m, &h_pk]);
    let k = Zeroizing::new(k);

    cpa_pke::encrypt::<P, B>(pk, m, &r, ct);
    r.zeroize();

    k
}

/// `ML-KEM.Decaps_internal(dk, c)` preceded by the decapsulation key check.
///
/// A ciphertext that does not re-encrypt to itself yields `J(z || c)`.
pub(crate) fn decaps<P: MlKemParams, B: KeccakPermutation>(
    sk: &[u8],
    ct: &[u8],
) -> Result<SharedSecretBytes> {
    check_secret_key::<P, B>(sk)?;
    let parts = split_secret_key::<P>(sk);

    let mut m = cpa_pke::decrypt::<P>(parts.dk_pke, ct);
    let (mut k, mut r) = hash_g::<B>(&[&m, parts.h_ek]);
    let mut ss = Zeroizing::new(rkprf::<B>(parts.z, ct));

    // c' is derived from m', so it is wiped with the other intermediates
    let mut cmp_buf = Zeroizing::new([0u8; MLKEM_MAX_CIPHERTEXT_BYTES]);
    let cmp = &mut cmp_buf[..P::CIPHERTEXT_BYTES];
    cpa_pke::encrypt::<P, B>(parts.ek, &m, &r, cmp);

    let fail = ct_memcmp(ct, cmp);
    ct_cmov_zero(&mut ss[..], &k, fail);

    m.zeroize();
    k.zeroize();
    r.zeroize();
    Ok(ss)
}

/// Decapsulation key check: the stored `H(ek)` must match the stored `ek`.
pub(crate) fn check_secret_key<P: MlKemParams, B: KeccakPermutation>(sk: &[u8]) -> Result<()> {
    let parts = split_secret_key::<P>(sk);
    validate::key(
        ct_eq(hash_h::<B>(parts.ek), parts.h_ek),
        P::SECRET_KEY_LABEL,
        "embedded public key hash mismatch",
    )
}
