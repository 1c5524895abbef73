//! Byte encodings of keys, ciphertexts and shared secrets

use crate::Result;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Encoding of a public value
pub trait Serialize: Sized {
    /// Parse from the canonical encoding; fails on a length mismatch
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The canonical encoding
    fn to_bytes(&self) -> Vec<u8>;
}

/// Encoding of a secret value
///
/// The output buffer is wiped when dropped. Callers own the input buffer
/// of `from_bytes` and should wipe it themselves.
pub trait SerializeSecret: Sized {
    /// Parse from the canonical encoding; fails on a length mismatch
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The canonical encoding in a zeroizing buffer
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
