//! Derandomized entry points are pure functions of their inputs

use mlkem_algorithms::keccak::{KeccakPermutation, NativeKeccak, ReferenceKeccak, UnrolledKeccak};
use mlkem_algorithms::{Sha3, Shake};
use mlkem_api::{Kem, Serialize};
use mlkem_kem::mlkem::{MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams};
use mlkem_kem::MlKem;
use mlkem_params::utils::hash::{SHAKE128_BLOCK_SIZE, SHAKE256_BLOCK_SIZE};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn transcript<P: MlKemParams, B: KeccakPermutation>(seed: &[u8; 64], m: &[u8; 32]) -> Vec<u8> {
    let (pk, sk) = MlKem::<P, B>::keypair_derand(seed);
    let (ct, ss) = MlKem::<P, B>::encapsulate_derand(&pk, m).unwrap();
    let ss2 = <MlKem<P, B> as Kem>::decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss, ss2);

    let mut out = pk.to_bytes();
    out.extend_from_slice(&sk.to_bytes());
    out.extend_from_slice(ct.as_bytes());
    out.extend_from_slice(ss.as_bytes());
    out
}

fn backends_agree<P: MlKemParams>(rng: &mut ChaCha20Rng) {
    for _ in 0..5 {
        let mut seed = [0u8; 64];
        let mut m = [0u8; 32];
        rng.fill_bytes(&mut seed);
        rng.fill_bytes(&mut m);

        let unrolled = transcript::<P, UnrolledKeccak>(&seed, &m);
        assert_eq!(unrolled, transcript::<P, UnrolledKeccak>(&seed, &m));
        assert_eq!(unrolled, transcript::<P, ReferenceKeccak>(&seed, &m));
        assert_eq!(unrolled, transcript::<P, NativeKeccak>(&seed, &m));
    }
}

#[test]
fn test_repeatable_and_backend_independent() {
    let mut rng = ChaCha20Rng::seed_from_u64(203);
    backends_agree::<MlKem512Params>(&mut rng);
    backends_agree::<MlKem768Params>(&mut rng);
    backends_agree::<MlKem1024Params>(&mut rng);
}

fn sponge_outputs<B: KeccakPermutation>(input: &[u8]) -> Vec<u8> {
    let mut out = Sha3::<B, 32>::digest_parts(&[input]).to_vec();
    out.extend_from_slice(&Sha3::<B, 64>::digest_parts(&[input]));

    let mut stream = [0u8; 500];
    Shake::<B, SHAKE128_BLOCK_SIZE>::absorb_parts(&[input]).squeeze(&mut stream);
    out.extend_from_slice(&stream);
    Shake::<B, SHAKE256_BLOCK_SIZE>::absorb_parts(&[input]).squeeze(&mut stream);
    out.extend_from_slice(&stream);
    out
}

#[test]
fn test_sponge_backends_agree_on_corpus() {
    let mut rng = ChaCha20Rng::seed_from_u64(202);
    for len in [0usize, 1, 71, 72, 135, 136, 137, 167, 168, 169, 1000] {
        let mut input = vec![0u8; len];
        rng.fill_bytes(&mut input);

        let reference = sponge_outputs::<ReferenceKeccak>(&input);
        assert_eq!(reference, sponge_outputs::<UnrolledKeccak>(&input), "len {}", len);
        assert_eq!(reference, sponge_outputs::<NativeKeccak>(&input), "len {}", len);
    }
}
