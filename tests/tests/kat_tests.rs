//! Known-answer tests
//!
//! The digests below are SHA3-256 over the `pk/sk/ct/ss` text lines of the
//! chained deterministic run described in `suites::kat::runner`.

use mlkem_algorithms::keccak::ReferenceKeccak;
use mlkem_kem::mlkem::{MlKem1024Params, MlKem512Params, MlKem768Params};
use mlkem_kem::{MlKem, MlKem1024, MlKem512, MlKem768};
use mlkem_tests::suites::kat::{expect_hex, run_kat, KatVector};

struct Expected {
    first: KatVector,
    ten: &'static str,
    thousand: &'static str,
}

fn vector(pk: &str, sk: &str, ct: &str, ss: &str) -> KatVector {
    KatVector {
        pk_sha3_256: pk.to_string(),
        sk_sha3_256: sk.to_string(),
        ct_sha3_256: ct.to_string(),
        ss: ss.to_string(),
    }
}

fn mlkem512() -> Expected {
    Expected {
        first: vector(
            "c0e5bd902a63de9580be0f3365951e36691c7e23c128b9c9b4e10aed2ae98ed4",
            "9b6f0af79d6cb70b071ff112fd2f5d1f553f15fcea4f51cd101e2709ed9d1cb1",
            "c30df27b4964eadf74493c3351e1496bc34b42bae9a75b42df1f501c4aba8e3e",
            "767affeb0a3eade53d61cbe8f11b208b49a81fab48ab46ed745fef21b1df86b2",
        ),
        ten: "8c0fa4bfbe9914e95adef9fad539e0ce91e38824a7e3d2c7a9b9005276d64f10",
        thousand: "796de88302b1d9c610edb08954612ac59b2258cc8e5c5625f925b331e4457377",
    }
}

fn mlkem768() -> Expected {
    Expected {
        first: vector(
            "526bc9c127960465d664f4fce2cde14a1775bccd6488c01792c33ce11f7fabd5",
            "d022001a6c0ae1a5bddb9e676794a2c03a4221b1ddd280eb535084b34cbbeaa7",
            "0dbca04ac7b40ee3be13230f04f2e8c349cca0704493e6477a0e6554129a5dda",
            "1ee4a82a9664a6be6e4574cd22f1d3c03d66d0588dcfe5d0a7d9b19d3203ea7f",
        ),
        ten: "e66cbad2ad5a0952cd73f92224849a3b22d91a86d28a4199d0cd173c9036a725",
        thousand: "33d4d79b725d9e423eb0067771f48aac03194efde7818e6e09a0a5dd12a06069",
    }
}

fn mlkem1024() -> Expected {
    Expected {
        first: vector(
            "56e333ca89c23054e763ab97874b92319125f06094783be75d568f9b81757b6a",
            "d63c94df53b2f79c1bcd03dd0f276ae3ebc435eb28fa841677aeb92b6df6e964",
            "1023fc44bf5e74afac413007d2bfe972971e3b5dadb5cefca2950917ffbf0b2f",
            "7572c02ced051d1a930a96b11f555e9bc3b16efd97c17ee8104fe506a1cd502f",
        ),
        ten: "a26084f8f7ad9f0ba444ec8e77c0141f25ebd86da24d319006d462ba04560c39",
        thousand: "3d7c4c98c568292ef97e333c5c4325feb829174ea5aee4923d9888608f6d0694",
    }
}

fn check_first(expected: &KatVector, actual: &KatVector) {
    expect_hex("pk", &expected.pk_sha3_256, &actual.pk_sha3_256).unwrap();
    expect_hex("sk", &expected.sk_sha3_256, &actual.sk_sha3_256).unwrap();
    expect_hex("ct", &expected.ct_sha3_256, &actual.ct_sha3_256).unwrap();
    expect_hex("ss", &expected.ss, &actual.ss).unwrap();
}

#[test]
fn test_mlkem512_first_vector_and_short_transcript() {
    let expected = mlkem512();
    let summary = run_kat::<MlKem512>(10).unwrap();
    check_first(&expected.first, summary.first.as_ref().unwrap());
    expect_hex("transcript", expected.ten, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_mlkem768_first_vector_and_short_transcript() {
    let expected = mlkem768();
    let summary = run_kat::<MlKem768>(10).unwrap();
    check_first(&expected.first, summary.first.as_ref().unwrap());
    expect_hex("transcript", expected.ten, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_mlkem1024_first_vector_and_short_transcript() {
    let expected = mlkem1024();
    let summary = run_kat::<MlKem1024>(10).unwrap();
    check_first(&expected.first, summary.first.as_ref().unwrap());
    expect_hex("transcript", expected.ten, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_reference_backend_matches_known_answers() {
    let summary = run_kat::<MlKem<MlKem512Params, ReferenceKeccak>>(10).unwrap();
    expect_hex("transcript", mlkem512().ten, &summary.transcript_sha3_256).unwrap();

    let summary = run_kat::<MlKem<MlKem768Params, ReferenceKeccak>>(1).unwrap();
    check_first(&mlkem768().first, summary.first.as_ref().unwrap());

    let summary = run_kat::<MlKem<MlKem1024Params, ReferenceKeccak>>(1).unwrap();
    check_first(&mlkem1024().first, summary.first.as_ref().unwrap());
}

#[test]
fn test_mlkem512_full_transcript() {
    let summary = run_kat::<MlKem512>(1000).unwrap();
    assert_eq!(summary.iterations, 1000);
    expect_hex("transcript", mlkem512().thousand, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_mlkem768_full_transcript() {
    let summary = run_kat::<MlKem768>(1000).unwrap();
    expect_hex("transcript", mlkem768().thousand, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_mlkem1024_full_transcript() {
    let summary = run_kat::<MlKem1024>(1000).unwrap();
    expect_hex("transcript", mlkem1024().thousand, &summary.transcript_sha3_256).unwrap();
}

#[test]
fn test_zero_iterations_is_empty_transcript() {
    let summary = run_kat::<MlKem768>(0).unwrap();
    assert!(summary.first.is_none());
    // SHA3-256 of the empty string
    expect_hex(
        "transcript",
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        &summary.transcript_sha3_256,
    )
    .unwrap();
}
