//! Trait definitions for Key Encapsulation Mechanisms (KEM)
//!
//! [`Kem`] is the randomized interface every mechanism implements.
//! [`KemDerand`] adds the deterministic entry points used by known-answer
//! tests and by protocols that manage their own randomness.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Zeroized on drop by the implementation.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type. Should be fed to a KDF immediately.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// All randomness is drawn from `rng`; a failing generator surfaces as
    /// [`crate::Error::RandomGenerationError`].
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// The public key is validated before any randomness is consumed.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the secret key.
    ///
    /// A ciphertext that fails re-encryption is never reported as an error;
    /// the implicit-rejection key is returned instead. Only a structurally
    /// malformed secret key produces `Err`.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}

/// Deterministic entry points of a KEM.
pub trait KemDerand: Kem {
    /// Length of the seed consumed by [`KemDerand::keypair_derand`].
    const KEYPAIR_SEED_BYTES: usize;

    /// Length of the coins consumed by [`KemDerand::encapsulate_derand`].
    const ENCAPS_SEED_BYTES: usize;

    /// Generate a keypair from an explicit seed.
    fn keypair_derand(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Encapsulate with explicit coins instead of an RNG.
    fn encapsulate_derand(
        public_key: &Self::PublicKey,
        coins: &[u8],
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;
}
