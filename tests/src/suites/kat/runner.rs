//! Chained known-answer run
//!
//! Starting from the seed `0x20..0x5f` expanded with SHAKE256 to 96 bytes,
//! every iteration replaces the coins with `SHAKE256(coins)`, derives a key
//! pair from the first 64 bytes (`d || z`), encapsulates with the last 32,
//! and decapsulates. Each iteration appends
//!
//! ```text
//! pk = <hex>
//! sk = <hex>
//! ct = <hex>
//! ss = <hex>
//! ```
//!
//! to a transcript whose SHA3-256 digest is the value pinned by the tests.

use mlkem_algorithms::{shake256, Sha3_256};
use mlkem_api::{KemDerand, Serialize, SerializeSecret};

use super::error::{KatError, Result};

/// Bytes of PRNG state carried between iterations.
pub const KAT_COINS_BYTES: usize = 96;

/// Digest of a run, plus the first iteration in detail.
#[derive(Debug, Clone)]
pub struct KatSummary {
    pub iterations: usize,
    pub transcript_sha3_256: String,
    pub first: Option<KatVector>,
}

/// SHA3-256 of the encoded keys and ciphertext of one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KatVector {
    pub pk_sha3_256: String,
    pub sk_sha3_256: String,
    pub ct_sha3_256: String,
    pub ss: String,
}

/// The initial coins: SHAKE256 of the bytes `32, 33, ..., 95`.
pub fn initial_coins() -> [u8; KAT_COINS_BYTES] {
    let seed: Vec<u8> = (32u8..96).collect();
    let mut coins = [0u8; KAT_COINS_BYTES];
    shake256(&seed, &mut coins);
    coins
}

fn sha3_hex(data: &[u8]) -> String {
    hex::encode(Sha3_256::digest_parts(&[data]))
}

fn absorb_line(transcript: &mut Sha3_256, label: &str, data: &[u8]) {
    transcript
        .update(label.as_bytes())
        .update(b" = ")
        .update(hex::encode(data).as_bytes())
        .update(b"\n");
}

/// Run `iterations` chained rounds of `K`.
pub fn run_kat<K: KemDerand>(iterations: usize) -> Result<KatSummary> {
    let mut coins = initial_coins();
    let mut transcript = Sha3_256::new();
    let mut first = None;

    for i in 0..iterations {
        let prev = coins;
        shake256(&prev, &mut coins);

        let keypair = K::keypair_derand(&coins[..64])?;
        let (pk, sk) = (K::public_key(&keypair), K::secret_key(&keypair));
        let (ct, ss_enc) = K::encapsulate_derand(&pk, &coins[64..])?;
        let ss_dec = K::decapsulate(&sk, &ct)?;

        let pk_bytes = pk.to_bytes();
        let sk_bytes = sk.to_bytes_zeroizing();
        let ct_bytes = ct.to_bytes();
        let ss_bytes = ss_enc.to_bytes_zeroizing();
        if ss_bytes.as_slice() != ss_dec.to_bytes_zeroizing().as_slice() {
            return Err(KatError::SharedSecretMismatch(i));
        }

        absorb_line(&mut transcript, "pk", &pk_bytes);
        absorb_line(&mut transcript, "sk", &sk_bytes);
        absorb_line(&mut transcript, "ct", &ct_bytes);
        absorb_line(&mut transcript, "ss", &ss_bytes);

        if i == 0 {
            first = Some(KatVector {
                pk_sha3_256: sha3_hex(&pk_bytes),
                sk_sha3_256: sha3_hex(&sk_bytes),
                ct_sha3_256: sha3_hex(&ct_bytes),
                ss: hex::encode(ss_bytes.as_slice()),
            });
        }
    }

    Ok(KatSummary {
        iterations,
        transcript_sha3_256: hex::encode(transcript.finalize()),
        first,
    })
}

/// Compare a hex digest against an expected value, case-insensitively.
pub fn expect_hex(what: &'static str, expected: &str, actual: &str) -> Result<()> {
    let want = hex::decode(expected)?;
    let got = hex::decode(actual)?;
    if want != got {
        return Err(KatError::Mismatch {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_coins_are_deterministic() {
        assert_eq!(initial_coins(), initial_coins());
        assert_ne!(initial_coins(), [0u8; KAT_COINS_BYTES]);
    }

    #[test]
    fn test_expect_hex() {
        assert!(expect_hex("x", "ABcd", "abCD").is_ok());
        assert!(matches!(
            expect_hex("x", "abcd", "abce"),
            Err(KatError::Mismatch { what: "x", .. })
        ));
        assert!(matches!(expect_hex("x", "zz", "00"), Err(KatError::Hex(_))));
    }
}
