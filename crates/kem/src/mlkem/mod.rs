//! ML-KEM, the module-lattice key-encapsulation mechanism of FIPS 203.
//!
//! The three parameter sets share one generic implementation,
//! [`MlKem`], parameterized by an [`MlKemParams`] type and a Keccak
//! backend. Decapsulation uses implicit rejection: a ciphertext that does
//! not re-encrypt to itself yields a pseudorandom key, never an error.

mod cpa_pke;
mod ind_cca;
mod kem;
mod params;
mod polyvec;
mod serialize;
mod symmetric;

#[cfg(feature = "mlkem-1024")]
mod ml_kem_1024;
#[cfg(feature = "mlkem-512")]
mod ml_kem_512;
#[cfg(feature = "mlkem-768")]
mod ml_kem_768;

#[cfg(feature = "mlkem-1024")]
pub use self::ml_kem_1024::MlKem1024;
#[cfg(feature = "mlkem-512")]
pub use self::ml_kem_512::MlKem512;
#[cfg(feature = "mlkem-768")]
pub use self::ml_kem_768::MlKem768;

pub use self::kem::{
    MlKem, MlKemCiphertext, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
    MLKEM_ENCAPS_SEED_BYTES, MLKEM_KEYPAIR_SEED_BYTES,
};
pub use self::params::{
    MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams, MLKEM_SS_BYTES,
    MLKEM_SYMBYTES,
};
