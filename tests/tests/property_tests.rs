//! Property-based tests for ML-KEM

use mlkem_algorithms::poly::prelude::{Polynomial, Q};
use mlkem_algorithms::poly::serialize::{compress_d, decompress_d};
use mlkem_api::{Kem, Serialize};
use mlkem_kem::mlkem::{MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams};
use mlkem_kem::{MlKem, MlKemCiphertext, MlKemPublicKey};
use proptest::prelude::*;

fn agreement<P: MlKemParams>(seed: [u8; 64], m: [u8; 32]) -> Result<(), TestCaseError> {
    let (pk, sk) = MlKem::<P>::keypair_derand(&seed);
    let (ct, ss) = MlKem::<P>::encapsulate_derand(&pk, &m).unwrap();
    prop_assert_eq!(ct.as_bytes().len(), P::CIPHERTEXT_BYTES);
    let ss2 = <MlKem<P> as Kem>::decapsulate(&sk, &ct).unwrap();
    prop_assert_eq!(ss, ss2);
    Ok(())
}

fn seed_and_message() -> impl Strategy<Value = ([u8; 64], [u8; 32])> {
    (prop::collection::vec(any::<u8>(), 64), any::<[u8; 32]>()).prop_map(|(s, m)| {
        let mut seed = [0u8; 64];
        seed.copy_from_slice(&s);
        (seed, m)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn mlkem512_parties_agree((seed, m) in seed_and_message()) {
        agreement::<MlKem512Params>(seed, m)?;
    }

    #[test]
    fn mlkem768_parties_agree((seed, m) in seed_and_message()) {
        agreement::<MlKem768Params>(seed, m)?;
    }

    #[test]
    fn mlkem1024_parties_agree((seed, m) in seed_and_message()) {
        agreement::<MlKem1024Params>(seed, m)?;
    }

    #[test]
    fn any_flipped_bit_changes_the_secret(
        (seed, m) in seed_and_message(),
        pos in 0usize..1088,
        bit in 0u8..8,
    ) {
        let (pk, sk) = MlKem::<MlKem768Params>::keypair_derand(&seed);
        let (ct, ss) = MlKem::<MlKem768Params>::encapsulate_derand(&pk, &m).unwrap();

        let mut bytes = ct.to_bytes();
        bytes[pos] ^= 1 << bit;
        let bad = MlKemCiphertext::<MlKem768Params>::from_bytes(&bytes).unwrap();
        let rejected = <MlKem<MlKem768Params> as Kem>::decapsulate(&sk, &bad).unwrap();
        prop_assert_ne!(rejected, ss);
    }

    #[test]
    fn arbitrary_public_key_is_checked_not_panicking(bytes in prop::collection::vec(any::<u8>(), 800)) {
        let pk = MlKemPublicKey::<MlKem512Params>::from_bytes(&bytes).unwrap();
        let canonical = MlKem::<MlKem512Params>::check_public_key(&bytes).is_ok();
        let res = MlKem::<MlKem512Params>::encapsulate_derand(&pk, &[0u8; 32]);
        prop_assert_eq!(res.is_ok(), canonical);
    }

    #[test]
    fn compression_error_is_bounded(x in 0u16..Q as u16, d in prop::sample::select(vec![1u32, 4, 5, 10, 11])) {
        let y = decompress_d(compress_d(x, d), d);
        let diff = (i32::from(x) - i32::from(y)).rem_euclid(i32::from(Q));
        let dist = diff.min(i32::from(Q) - diff);
        // round(q / 2^(d+1))
        let bound = (i32::from(Q) + (1 << d)) >> (d + 1);
        prop_assert!(dist <= bound, "x = {}, d = {}, y = {}", x, d, y);
    }

    #[test]
    fn encoding_roundtrip_normalizes(coeffs in prop::collection::vec(-(Q - 1)..Q, 256)) {
        let mut p = Polynomial::zero();
        p.coeffs.copy_from_slice(&coeffs);
        let mut bytes = [0u8; 384];
        p.to_bytes(&mut bytes);
        prop_assert!(Polynomial::is_canonical_encoding(&bytes));

        let back = Polynomial::from_bytes(&bytes);
        for (&c, &b) in coeffs.iter().zip(back.coeffs.iter()) {
            prop_assert_eq!(i32::from(c).rem_euclid(i32::from(Q)), i32::from(b));
        }
    }
}
