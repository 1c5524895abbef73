//! Typed ML-KEM keys and the generic `MlKem` mechanism.

use core::fmt;
use core::marker::PhantomData;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use mlkem_algorithms::keccak::{DefaultKeccak, KeccakPermutation};
use mlkem_api::error::{validate, Error as ApiError, ResultExt};
use mlkem_api::{Kem, KemDerand, Result as ApiResult, Serialize, SerializeSecret};
use mlkem_common::security::{SecretBuffer, SecretVec};
use mlkem_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca;
use super::params::{MlKemParams, MLKEM_SS_BYTES, MLKEM_SYMBYTES};
use super::serialize;

/// Seed consumed by key generation: `d || z`.
pub const MLKEM_KEYPAIR_SEED_BYTES: usize = 2 * MLKEM_SYMBYTES;
/// Coins consumed by encapsulation: the message `m`.
pub const MLKEM_ENCAPS_SEED_BYTES: usize = MLKEM_SYMBYTES;

/// ML-KEM encapsulation key.
pub struct MlKemPublicKey<P: MlKemParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// ML-KEM decapsulation key. Zeroized on drop.
pub struct MlKemSecretKey<P: MlKemParams> {
    bytes: SecretVec,
    _params: PhantomData<P>,
}

/// ML-KEM ciphertext.
pub struct MlKemCiphertext<P: MlKemParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// The 32-byte shared secret. Zeroized on drop; compares in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKemSharedSecret(SecretBuffer<MLKEM_SS_BYTES>);

impl<P: MlKemParams> MlKemPublicKey<P> {
    /// Wrap an encoded encapsulation key after checking its length.
    ///
    /// The modulus check runs at encapsulation; use
    /// [`MlKem::check_public_key`] to run it eagerly.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("MlKemPublicKey::from_bytes", bytes.len(), P::PUBLIC_KEY_BYTES)?;
        Ok(Self {
            bytes: bytes.to_vec(),
            _params: PhantomData,
        })
    }

    /// The encoded key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: MlKemParams> MlKemSecretKey<P> {
    /// Wrap an encoded decapsulation key after checking its length.
    ///
    /// The caller should zeroize `bytes` afterwards.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("MlKemSecretKey::from_bytes", bytes.len(), P::SECRET_KEY_BYTES)?;
        Ok(Self {
            bytes: SecretVec::from_slice(bytes),
            _params: PhantomData,
        })
    }

    /// Export the encoded key; the copy is zeroized on drop.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.as_slice().to_vec())
    }

    /// The encapsulation key embedded in this decapsulation key.
    pub fn public_key(&self) -> MlKemPublicKey<P> {
        let parts = serialize::split_secret_key::<P>(self.bytes.as_slice());
        MlKemPublicKey {
            bytes: parts.ek.to_vec(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> MlKemCiphertext<P> {
    /// Wrap a ciphertext after checking its length.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("MlKemCiphertext::from_bytes", bytes.len(), P::CIPHERTEXT_BYTES)?;
        Ok(Self {
            bytes: bytes.to_vec(),
            _params: PhantomData,
        })
    }

    /// The encoded ciphertext.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl MlKemSharedSecret {
    fn new(bytes: [u8; MLKEM_SS_BYTES]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Borrow the secret. Feed it to a KDF rather than storing it.
    pub fn as_bytes(&self) -> &[u8; MLKEM_SS_BYTES] {
        self.0.as_array()
    }
}

impl<P: MlKemParams> Clone for MlKemPublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> Clone for MlKemSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> Clone for MlKemCiphertext<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> PartialEq for MlKemPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: MlKemParams> Eq for MlKemPublicKey<P> {}

impl<P: MlKemParams> PartialEq for MlKemCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: MlKemParams> Eq for MlKemCiphertext<P> {}

impl PartialEq for MlKemSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0.as_slice(), other.0.as_slice())
    }
}

impl Eq for MlKemSharedSecret {}

impl<P: MlKemParams> Zeroize for MlKemSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

// The inner `SecretVec` zeroizes itself on drop.
impl<P: MlKemParams> ZeroizeOnDrop for MlKemSecretKey<P> {}

impl<P: MlKemParams> fmt::Debug for MlKemPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemPublicKey<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: MlKemParams> fmt::Debug for MlKemSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemSecretKey<{}>([REDACTED])", P::NAME)
    }
}

impl<P: MlKemParams> fmt::Debug for MlKemCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemCiphertext<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl fmt::Debug for MlKemSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlKemSharedSecret([REDACTED])")
    }
}

impl<P: MlKemParams> Serialize for MlKemPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: MlKemParams> Serialize for MlKemCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: MlKemParams> SerializeSecret for MlKemSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("MlKemSharedSecret::from_bytes", bytes.len(), MLKEM_SS_BYTES)?;
        let mut buf = [0u8; MLKEM_SS_BYTES];
        buf.copy_from_slice(bytes);
        let ss = Self::new(buf);
        buf.zeroize();
        Ok(ss)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// ML-KEM over the parameter set `P` and Keccak backend `B`.
///
/// All operations are pure functions of their inputs; the type carries no
/// state.
pub struct MlKem<P: MlKemParams, B: KeccakPermutation = DefaultKeccak> {
    _params: PhantomData<(P, B)>,
}

impl<P: MlKemParams, B: KeccakPermutation> MlKem<P, B> {
    /// Deterministic key generation from `d || z`.
    pub fn keypair_derand(
        seed: &[u8; MLKEM_KEYPAIR_SEED_BYTES],
    ) -> (MlKemPublicKey<P>, MlKemSecretKey<P>) {
        let mut d = [0u8; MLKEM_SYMBYTES];
        let mut z = [0u8; MLKEM_SYMBYTES];
        d.copy_from_slice(&seed[..MLKEM_SYMBYTES]);
        z.copy_from_slice(&seed[MLKEM_SYMBYTES..]);

        let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
        let mut sk = SecretVec::zeroed(P::SECRET_KEY_BYTES);
        ind_cca::keypair_derand::<P, B>(&d, &z, &mut pk, sk.as_mut_slice());

        d.zeroize();
        z.zeroize();
        (
            MlKemPublicKey {
                bytes: pk,
                _params: PhantomData,
            },
            MlKemSecretKey {
                bytes: sk,
                _params: PhantomData,
            },
        )
    }

    /// Deterministic encapsulation with the message `m` as coins.
    pub fn encapsulate_derand(
        public_key: &MlKemPublicKey<P>,
        coins: &[u8; MLKEM_ENCAPS_SEED_BYTES],
    ) -> ApiResult<(MlKemCiphertext<P>, MlKemSharedSecret)> {
        let mut ct = vec![0u8; P::CIPHERTEXT_BYTES];
        let ss = ind_cca::encaps_derand::<P, B>(&public_key.bytes, coins, &mut ct)?;
        Ok((
            MlKemCiphertext {
                bytes: ct,
                _params: PhantomData,
            },
            MlKemSharedSecret::new(*ss),
        ))
    }

    // Encapsulation for a key the caller has already run through
    // `serialize::check_public_key`.
    fn encapsulate_checked(
        public_key: &MlKemPublicKey<P>,
        coins: &[u8; MLKEM_ENCAPS_SEED_BYTES],
    ) -> (MlKemCiphertext<P>, MlKemSharedSecret) {
        let mut ct = vec![0u8; P::CIPHERTEXT_BYTES];
        let ss = ind_cca::encaps_checked::<P, B>(&public_key.bytes, coins, &mut ct);
        (
            MlKemCiphertext {
                bytes: ct,
                _params: PhantomData,
            },
            MlKemSharedSecret::new(*ss),
        )
    }

    /// Length and modulus check of an encoded encapsulation key.
    pub fn check_public_key(bytes: &[u8]) -> ApiResult<()> {
        validate::length("MlKem::check_public_key", bytes.len(), P::PUBLIC_KEY_BYTES)?;
        serialize::check_public_key::<P>(bytes)?;
        Ok(())
    }

    /// Length and `H(ek)` check of an encoded decapsulation key.
    pub fn check_secret_key(bytes: &[u8]) -> ApiResult<()> {
        validate::length("MlKem::check_secret_key", bytes.len(), P::SECRET_KEY_BYTES)?;
        ind_cca::check_secret_key::<P, B>(bytes)?;
        Ok(())
    }
}

impl<P: MlKemParams, B: KeccakPermutation> Kem for MlKem<P, B> {
    type PublicKey = MlKemPublicKey<P>;
    type SecretKey = MlKemSecretKey<P>;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = [0u8; MLKEM_KEYPAIR_SEED_BYTES];
        rng.try_fill_bytes(&mut seed).with_context("MlKem::keypair")?;
        let keypair = Self::keypair_derand(&seed);
        seed.zeroize();
        Ok(keypair)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        serialize::check_public_key::<P>(&public_key.bytes)?;

        let mut m = [0u8; MLKEM_ENCAPS_SEED_BYTES];
        rng.try_fill_bytes(&mut m).with_context("MlKem::encapsulate")?;
        let out = Self::encapsulate_checked(public_key, &m);
        m.zeroize();
        Ok(out)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = ind_cca::decaps::<P, B>(secret_key.bytes.as_slice(), &ciphertext.bytes)?;
        Ok(MlKemSharedSecret::new(*ss))
    }
}

impl<P: MlKemParams, B: KeccakPermutation> KemDerand for MlKem<P, B> {
    const KEYPAIR_SEED_BYTES: usize = MLKEM_KEYPAIR_SEED_BYTES;
    const ENCAPS_SEED_BYTES: usize = MLKEM_ENCAPS_SEED_BYTES;

    fn keypair_derand(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        let seed: &[u8; MLKEM_KEYPAIR_SEED_BYTES] =
            seed.try_into().map_err(|_| ApiError::InvalidLength {
                context: "MlKem::keypair_derand",
                expected: MLKEM_KEYPAIR_SEED_BYTES,
                actual: seed.len(),
            })?;
        Ok(Self::keypair_derand(seed))
    }

    fn encapsulate_derand(
        public_key: &Self::PublicKey,
        coins: &[u8],
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let coins: &[u8; MLKEM_ENCAPS_SEED_BYTES] =
            coins.try_into().map_err(|_| ApiError::InvalidLength {
                context: "MlKem::encapsulate_derand",
                expected: MLKEM_ENCAPS_SEED_BYTES,
                actual: coins.len(),
            })?;
        Self::encapsulate_derand(public_key, coins)
    }
}
