//! ML-KEM parameter definitions.

use mlkem_algorithms::poly::sampling::Eta;
use mlkem_params::pqc::mlkem::{self as global_params, MlKemParamSet};

/// Size of seeds, hashes, messages and implicit-rejection values.
pub const MLKEM_SYMBYTES: usize = global_params::MLKEM_SYMBYTES;
/// Shared secret size for all ML-KEM variants.
pub const MLKEM_SS_BYTES: usize = global_params::MLKEM_SSBYTES;
/// Largest module rank of any parameter set.
pub const MLKEM_MAX_K: usize = 4;
/// Largest ciphertext of any parameter set.
pub(crate) const MLKEM_MAX_CIPHERTEXT_BYTES: usize = global_params::MLKEM1024.ciphertext_size;

const fn eta(v: u8) -> Eta {
    match v {
        2 => Eta::Two,
        3 => Eta::Three,
        _ => panic!("unsupported eta"),
    }
}

/// Trait defining parameters for a specific ML-KEM variant.
pub trait MlKemParams: Send + Sync + 'static {
    /// The parameter table this variant is built from.
    const SET: MlKemParamSet;
    /// Algorithm name string.
    const NAME: &'static str;

    /// Module rank.
    const K: usize = Self::SET.k;
    /// Noise width for the secret, the key error and the encryption mask.
    const ETA1: Eta = eta(Self::SET.eta1);
    /// Noise width for the encryption errors.
    const ETA2: Eta = eta(Self::SET.eta2);
    /// Bits per coefficient of the compressed vector `u`.
    const DU: u32 = Self::SET.du as u32;
    /// Bits per coefficient of the compressed polynomial `v`.
    const DV: u32 = Self::SET.dv as u32;

    /// Bytes in a 12-bit packed vector of `K` polynomials.
    const POLYVEC_BYTES: usize = Self::SET.polyvec_size();
    /// Bytes in the compressed `u` part of a ciphertext.
    const POLYVEC_COMPRESSED_BYTES: usize = Self::SET.polyvec_compressed_size();
    /// Bytes in the compressed `v` part of a ciphertext.
    const POLY_COMPRESSED_BYTES: usize = Self::SET.poly_compressed_size();

    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize = Self::SET.public_key_size;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize = Self::SET.secret_key_size;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize = Self::SET.ciphertext_size;

    /// Label used in errors about the public key.
    const PUBLIC_KEY_LABEL: &'static str;
    /// Label used in errors about the secret key.
    const SECRET_KEY_LABEL: &'static str;
}

/// ML-KEM-512 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MlKem512Params;
impl MlKemParams for MlKem512Params {
    const SET: MlKemParamSet = global_params::MLKEM512;
    const NAME: &'static str = "ML-KEM-512";
    const PUBLIC_KEY_LABEL: &'static str = "ML-KEM-512 public key";
    const SECRET_KEY_LABEL: &'static str = "ML-KEM-512 secret key";
}

/// ML-KEM-768 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MlKem768Params;
impl MlKemParams for MlKem768Params {
    const SET: MlKemParamSet = global_params::MLKEM768;
    const NAME: &'static str = "ML-KEM-768";
    const PUBLIC_KEY_LABEL: &'static str = "ML-KEM-768 public key";
    const SECRET_KEY_LABEL: &'static str = "ML-KEM-768 secret key";
}

/// ML-KEM-1024 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MlKem1024Params;
impl MlKemParams for MlKem1024Params {
    const SET: MlKemParamSet = global_params::MLKEM1024;
    const NAME: &'static str = "ML-KEM-1024";
    const PUBLIC_KEY_LABEL: &'static str = "ML-KEM-1024 public key";
    const SECRET_KEY_LABEL: &'static str = "ML-KEM-1024 secret key";
}
