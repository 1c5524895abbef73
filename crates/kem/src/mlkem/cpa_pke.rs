//! K-PKE, the IND-CPA public-key encryption scheme underneath ML-KEM.
//!
//! Keys and ciphertexts are written straight into caller-provided buffers
//! of the exact encoded size.

use mlkem_algorithms::keccak::KeccakPermutation;
use mlkem_algorithms::poly::polynomial::Polynomial;
use zeroize::Zeroize;

use super::params::{MlKemParams, MLKEM_SYMBYTES};
use super::polyvec::PolyVec;
use super::serialize::{pack_ciphertext, pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use super::symmetric::{gen_matrix, hash_g, sample_noise, sample_noise_vec};

/// `K-PKE.KeyGen(d)`.
///
/// Writes `ek` to `pk` and the encoded `s_hat` to `sk`.
pub(crate) fn keypair<P: MlKemParams, B: KeccakPermutation>(
    d: &[u8; MLKEM_SYMBYTES],
    pk: &mut [u8],
    sk: &mut [u8],
) {
    // The rank byte separates the parameter sets.
    let (rho, mut sigma) = hash_g::<B>(&[d, &[P::K as u8]]);

    let a = gen_matrix::<P, B>(&rho, false);
    let mut s = sample_noise_vec::<P, B>(&sigma, 0, P::ETA1);
    let mut e = sample_noise_vec::<P, B>(&sigma, P::K as u8, P::ETA1);
    sigma.zeroize();

    s.ntt();
    e.ntt();

    let mut t = PolyVec::<P>::zero();
    for (ti, row) in t.polys_mut().iter_mut().zip(a.iter()) {
        *ti = row.basemul_acc(&s);
        ti.to_mont();
    }
    t.add_assign(&e);
    t.reduce();

    pack_sk(&s, sk);
    pack_pk(&t, &rho, pk);

    s.zeroize();
    e.zeroize();
}

/// `K-PKE.Encrypt(ek, m, r)`.
///
/// `pk` must already have passed the modulus check.
pub(crate) fn encrypt<P: MlKemParams, B: KeccakPermutation>(
    pk: &[u8],
    msg: &[u8; MLKEM_SYMBYTES],
    coins: &[u8; MLKEM_SYMBYTES],
    ct: &mut [u8],
) {
    let (t_hat, rho) = unpack_pk::<P>(pk);
    let at = gen_matrix::<P, B>(&rho, true);

    let mut r = sample_noise_vec::<P, B>(coins, 0, P::ETA1);
    let mut e1 = sample_noise_vec::<P, B>(coins, P::K as u8, P::ETA2);
    let mut e2 = sample_noise::<B>(coins, 2 * P::K as u8, P::ETA2);

    r.ntt();

    let mut u = PolyVec::<P>::zero();
    for (ui, row) in u.polys_mut().iter_mut().zip(at.iter()) {
        *ui = row.basemul_acc(&r);
    }
    let mut v = t_hat.basemul_acc(&r);

    u.invntt_tomont();
    v.invntt_tomont();

    u.add_assign(&e1);
    let mut k = Polynomial::from_msg(msg);
    v += &e2;
    v += &k;
    u.reduce();
    v.reduce();

    pack_ciphertext(&u, &v, ct);

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    k.zeroize();
    v.zeroize();
}

/// `K-PKE.Decrypt(dk, c)`.
pub(crate) fn decrypt<P: MlKemParams>(sk: &[u8], ct: &[u8]) -> [u8; MLKEM_SYMBYTES] {
    let (mut u, v) = unpack_ciphertext::<P>(ct);
    let mut s_hat = unpack_sk::<P>(sk);

    u.ntt();
    let mut mp = s_hat.basemul_acc(&u);
    mp.invntt_tomont();

    let mut m = v;
    m -= &mp;
    m.reduce();
    let msg = m.to_msg();

    s_hat.zeroize();
    mp.zeroize();
    m.zeroize();
    msg
}
