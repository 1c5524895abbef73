//! Malformed inputs and the randomized entry points

use mlkem_algorithms::shake256;
use mlkem_api::{Error, Kem, KemDerand, Serialize, SerializeSecret};
use mlkem_kem::mlkem::{
    MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams, MLKEM_SYMBYTES,
};
use mlkem_kem::{
    MlKem, MlKem1024, MlKem512, MlKem768, MlKemCiphertext, MlKemPublicKey, MlKemSecretKey,
};
use mlkem_tests::suites::kat::ReplayRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

type Keys<P> = (MlKemPublicKey<P>, MlKemSecretKey<P>);

fn keys<P: MlKemParams>(seed: u8) -> Keys<P> {
    MlKem::<P>::keypair_derand(&[seed; 64])
}

/// Offset of the `H(ek)` field inside an encoded decapsulation key.
fn h_ek_offset<P: MlKemParams>() -> usize {
    P::POLYVEC_BYTES + P::PUBLIC_KEY_BYTES
}

fn unreduced_public_key<P: MlKemParams>(pk: &MlKemPublicKey<P>, poly: usize) -> Vec<u8> {
    let mut bytes = pk.to_bytes();
    // first coefficient of `poly` becomes 0xFFF
    bytes[384 * poly] = 0xFF;
    bytes[384 * poly + 1] |= 0x0F;
    bytes
}

fn reject_unreduced_public_key<P: MlKemParams>() {
    let (pk, _) = keys::<P>(1);
    for poly in 0..P::K {
        let bad = unreduced_public_key(&pk, poly);
        assert!(matches!(
            MlKem::<P>::check_public_key(&bad),
            Err(Error::InvalidKey { .. })
        ));

        let bad_pk = MlKemPublicKey::<P>::from_bytes(&bad).unwrap();
        let res = MlKem::<P>::encapsulate_derand(&bad_pk, &[7u8; 32]);
        assert!(matches!(res, Err(Error::InvalidKey { .. })), "poly {}", poly);

        // No randomness is consumed for an invalid key.
        let mut rng = ReplayRng::new(&[0u8; 32]);
        assert!(<MlKem<P> as Kem>::encapsulate(&mut rng, &bad_pk).is_err());
        assert_eq!(rng.remaining(), 32);
    }
}

#[test]
fn test_unreduced_public_key_rejected() {
    reject_unreduced_public_key::<MlKem512Params>();
    reject_unreduced_public_key::<MlKem768Params>();
    reject_unreduced_public_key::<MlKem1024Params>();
}

#[test]
fn test_boundary_coefficient_accepted() {
    let (pk, _) = keys::<MlKem768Params>(2);
    let mut bytes = pk.to_bytes();
    // q - 1 = 0xD00 is the largest canonical value
    bytes[0] = 0x00;
    bytes[1] = (bytes[1] & 0xF0) | 0x0D;
    assert!(MlKem768::check_public_key(&bytes).is_ok());

    bytes[0] = 0x01;
    assert!(MlKem768::check_public_key(&bytes).is_err());
}

fn corrupted_hash_rejected<P: MlKemParams>() {
    let (pk, sk) = keys::<P>(3);
    let (ct, _) = MlKem::<P>::encapsulate_derand(&pk, &[9u8; 32]).unwrap();

    let mut bytes = sk.to_bytes();
    bytes[h_ek_offset::<P>()] ^= 0x01;
    assert!(MlKem::<P>::check_secret_key(&bytes).is_err());

    let bad_sk = MlKemSecretKey::<P>::from_bytes(&bytes).unwrap();
    assert!(matches!(
        <MlKem<P> as Kem>::decapsulate(&bad_sk, &ct),
        Err(Error::InvalidKey { .. })
    ));
}

fn corrupted_embedded_key_rejected<P: MlKemParams>() {
    let (pk, sk) = keys::<P>(4);
    let (ct, _) = MlKem::<P>::encapsulate_derand(&pk, &[9u8; 32]).unwrap();

    let mut bytes = sk.to_bytes();
    bytes[P::POLYVEC_BYTES + 17] ^= 0x40;
    assert!(MlKem::<P>::check_secret_key(&bytes).is_err());

    let bad_sk = MlKemSecretKey::<P>::from_bytes(&bytes).unwrap();
    assert!(<MlKem<P> as Kem>::decapsulate(&bad_sk, &ct).is_err());
}

#[test]
fn test_inconsistent_secret_key_rejected() {
    corrupted_hash_rejected::<MlKem512Params>();
    corrupted_hash_rejected::<MlKem768Params>();
    corrupted_hash_rejected::<MlKem1024Params>();

    corrupted_embedded_key_rejected::<MlKem512Params>();
    corrupted_embedded_key_rejected::<MlKem768Params>();
    corrupted_embedded_key_rejected::<MlKem1024Params>();
}

fn corrupted_secret_vector_gives_wrong_secret<P: MlKemParams>() {
    let (pk, sk) = keys::<P>(5);
    let (ct, ss) = MlKem::<P>::encapsulate_derand(&pk, &[8u8; 32]).unwrap();

    // Only H(ek) is checked; the secret vector is opaque to the key check.
    let mut bytes = sk.to_bytes();
    for b in bytes[..P::POLYVEC_BYTES].iter_mut().step_by(97) {
        *b ^= 0x5A;
    }
    assert!(MlKem::<P>::check_secret_key(&bytes).is_ok());

    let bad_sk = MlKemSecretKey::<P>::from_bytes(&bytes).unwrap();
    let first = <MlKem<P> as Kem>::decapsulate(&bad_sk, &ct).unwrap();
    let second = <MlKem<P> as Kem>::decapsulate(&bad_sk, &ct).unwrap();
    assert_ne!(first, ss);
    assert_eq!(first, second);
}

#[test]
fn test_corrupted_secret_vector_is_not_an_error() {
    corrupted_secret_vector_gives_wrong_secret::<MlKem512Params>();
    corrupted_secret_vector_gives_wrong_secret::<MlKem768Params>();
    corrupted_secret_vector_gives_wrong_secret::<MlKem1024Params>();

    let (_, sk) = keys::<MlKem512Params>(6);
    let mut bytes = sk.to_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    assert!(MlKem512::check_secret_key(&bytes).is_ok());
}

fn implicit_rejection<P: MlKemParams>(rng: &mut ChaCha20Rng) {
    let mut seed = [0u8; 64];
    rng.fill_bytes(&mut seed);
    let (pk, sk) = MlKem::<P>::keypair_derand(&seed);
    let sk_bytes = sk.to_bytes();
    let z = &sk_bytes[P::SECRET_KEY_BYTES - MLKEM_SYMBYTES..];

    let (ct, ss) = <MlKem<P> as Kem>::encapsulate(rng, &pk).unwrap();

    for pos in [0, P::CIPHERTEXT_BYTES / 2, P::CIPHERTEXT_BYTES - 1] {
        let mut bytes = ct.as_bytes().to_vec();
        bytes[pos] ^= 0x80;
        let bad = MlKemCiphertext::<P>::from_bytes(&bytes).unwrap();
        let rejected = <MlKem<P> as Kem>::decapsulate(&sk, &bad).unwrap();
        assert_ne!(rejected, ss);

        let mut expected = [0u8; 32];
        let input = [z, bad.as_bytes()].concat();
        shake256(&input, &mut expected);
        assert_eq!(rejected.as_bytes(), &expected);
        assert_eq!(<MlKem<P> as Kem>::decapsulate(&sk, &bad).unwrap(), rejected);
    }
}

#[test]
fn test_tampered_ciphertext_yields_rejection_key() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xbad);
    implicit_rejection::<MlKem512Params>(&mut rng);
    implicit_rejection::<MlKem768Params>(&mut rng);
    implicit_rejection::<MlKem1024Params>(&mut rng);
}

#[test]
fn test_wrong_lengths() {
    assert!(matches!(
        MlKemPublicKey::<MlKem768Params>::from_bytes(&[0u8; 800]),
        Err(Error::InvalidLength {
            expected: 1184,
            actual: 800,
            ..
        })
    ));
    assert!(MlKemSecretKey::<MlKem512Params>::from_bytes(&[0u8; 2400]).is_err());
    assert!(MlKemCiphertext::<MlKem1024Params>::from_bytes(&[0u8; 1088]).is_err());
    assert!(<MlKem768 as KemDerand>::keypair_derand(&[0u8; 96]).is_err());
    assert!(MlKem768::check_secret_key(&[0u8; 10]).is_err());

    let (pk, _) = <MlKem768 as KemDerand>::keypair_derand(&[0u8; 64]).unwrap();
    assert!(matches!(
        <MlKem768 as KemDerand>::encapsulate_derand(&pk, &[0u8; 31]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31,
            ..
        })
    ));
}

fn randomized_matches_derand<K: KemDerand>(bytes: &[u8]) {
    let (seed, coins) = bytes.split_at(K::KEYPAIR_SEED_BYTES);

    let mut rng = ReplayRng::new(seed);
    let keypair = K::keypair(&mut rng).unwrap();
    assert_eq!(rng.remaining(), 0);
    let derand = K::keypair_derand(seed).unwrap();
    let pk = K::public_key(&keypair);
    assert_eq!(pk.to_bytes(), K::public_key(&derand).to_bytes());
    assert_eq!(
        K::secret_key(&keypair).to_bytes_zeroizing().as_slice(),
        K::secret_key(&derand).to_bytes_zeroizing().as_slice()
    );

    let mut rng = ReplayRng::new(coins);
    let (ct, ss) = K::encapsulate(&mut rng, &pk).unwrap();
    let (ct_d, ss_d) = K::encapsulate_derand(&pk, coins).unwrap();
    assert_eq!(ct.to_bytes(), ct_d.to_bytes());
    assert_eq!(
        ss.to_bytes_zeroizing().as_slice(),
        ss_d.to_bytes_zeroizing().as_slice()
    );
}

#[test]
fn test_randomized_api_consumes_exactly_the_derand_inputs() {
    let bytes: Vec<u8> = (0u8..96).collect();
    randomized_matches_derand::<MlKem512>(&bytes);
    randomized_matches_derand::<MlKem768>(&bytes);
    randomized_matches_derand::<MlKem1024>(&bytes);
}

#[test]
fn test_exhausted_rng_is_an_error() {
    let mut rng = ReplayRng::new(&[0u8; 63]);
    assert!(matches!(
        MlKem768::keypair(&mut rng),
        Err(Error::RandomGenerationError { .. })
    ));

    let (pk, _) = MlKem768::keypair_derand(&[1u8; 64]);
    let mut rng = ReplayRng::new(&[0u8; 16]);
    assert!(matches!(
        MlKem768::encapsulate(&mut rng, &pk),
        Err(Error::RandomGenerationError { .. })
    ));
}

#[test]
fn test_public_key_embedded_in_secret_key() {
    let (pk, sk) = MlKem1024::keypair_derand(&[6u8; 64]);
    assert_eq!(sk.public_key(), pk);
    assert_eq!(MlKem1024::name(), "ML-KEM-1024");
}
