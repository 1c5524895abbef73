//! ML-KEM-768 (NIST security category 3).

use super::kem::MlKem;
use super::params::MlKem768Params;

/// ML-KEM-768 over the default Keccak backend, implementing `api::Kem`.
pub type MlKem768 = MlKem<MlKem768Params>;
