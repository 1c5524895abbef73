//! Timing comparisons between input classes
//!
//! Wall-clock measurements are noisy on shared machines, so these are
//! ignored by default. Run with `cargo test --release -- --ignored`.

use mlkem_algorithms::keccak::{KeccakPermutation, ReferenceKeccak, UnrolledKeccak};
use mlkem_api::Kem;
use mlkem_internal::constant_time::{ct_cmov_zero, ct_memcmp};
use mlkem_kem::mlkem::MlKem768Params;
use mlkem_kem::{MlKem768, MlKemCiphertext};
use mlkem_tests::suites::constant_time::{generate_test_insights, TestConfig, TimingTester};
use std::hint::black_box;

fn run(name: &str, config: &TestConfig, mut a: impl FnMut(), mut b: impl FnMut()) {
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::from_config(config);
    let (t1, t2) = tester.measure_pair(&mut a, &mut b);
    let analysis = match tester.analyze(&t1, &t2, config) {
        Ok(result) => result,
        Err(e) => panic!("{}: analysis error: {}", name, e),
    };

    println!("{} timing analysis:", name);
    println!("  mean times: {:.2} ns vs {:.2} ns", analysis.mean_a, analysis.mean_b);
    println!("  mean ratio: {:.3}", analysis.mean_ratio);
    println!("  t-statistic: {:.3}, p-value: {:.4}", analysis.t_statistic, analysis.p_value);
    println!("  combined score: {:.3}", analysis.combined_score);
    println!("\n{}", generate_test_insights(&analysis, name));

    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold: {:.3})",
        name, analysis.combined_score, config.combined_score_threshold
    );
}

#[test]
#[ignore]
fn test_memcmp_constant_time() {
    let config = TestConfig::for_ct_primitive();
    let a = [0x5Au8; 1088];
    let equal = a;
    let mut early = a;
    early[0] ^= 1;

    run(
        "ct_memcmp",
        &config,
        || {
            black_box(ct_memcmp(black_box(&a), black_box(&equal)));
        },
        || {
            black_box(ct_memcmp(black_box(&a), black_box(&early)));
        },
    );
}

#[test]
#[ignore]
fn test_cmov_constant_time() {
    let config = TestConfig::for_ct_primitive();
    let src = [0x11u8; 32];
    let mut dst = [0u8; 32];
    let mut dst2 = [0u8; 32];

    run(
        "ct_cmov_zero",
        &config,
        || ct_cmov_zero(black_box(&mut dst), &src, black_box(0)),
        || ct_cmov_zero(black_box(&mut dst2), &src, black_box(0xFF)),
    );
}

#[test]
#[ignore]
fn test_decapsulation_constant_time() {
    let config = TestConfig::for_kem_decaps();
    let (pk, sk) = MlKem768::keypair_derand(&[0x42u8; 64]);
    let (valid, _) = MlKem768::encapsulate_derand(&pk, &[0x24u8; 32]).unwrap();
    let mut bytes = valid.as_bytes().to_vec();
    bytes[0] ^= 1;
    let invalid = MlKemCiphertext::<MlKem768Params>::from_bytes(&bytes).unwrap();

    run(
        "ML-KEM-768 decapsulation",
        &config,
        || {
            black_box(MlKem768::decapsulate(&sk, black_box(&valid)).unwrap());
        },
        || {
            black_box(MlKem768::decapsulate(&sk, black_box(&invalid)).unwrap());
        },
    );
}

fn keccak_state_independence<P: KeccakPermutation>() {
    let config = TestConfig::for_keccak();
    let mut zeros = [0u64; 25];
    let mut ones = [u64::MAX; 25];

    run(
        P::NAME,
        &config,
        || P::permute(black_box(&mut zeros)),
        || P::permute(black_box(&mut ones)),
    );
}

#[test]
#[ignore]
fn test_keccak_constant_time() {
    keccak_state_independence::<UnrolledKeccak>();
    keccak_state_independence::<ReferenceKeccak>();
}
