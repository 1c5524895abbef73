//! ML-KEM-512 (NIST security category 1).

use super::kem::MlKem;
use super::params::MlKem512Params;

/// ML-KEM-512 over the default Keccak backend, implementing `api::Kem`.
pub type MlKem512 = MlKem<MlKem512Params>;
