//! Constants for the Keccak family of hash functions

/// Width of the Keccak-f[1600] state in bytes
pub const KECCAK_STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the Keccak-f[1600] state
pub const KECCAK_LANES: usize = 25;

/// Number of rounds of Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Internal block size (rate) of SHA3-256 in bytes
pub const SHA3_256_BLOCK_SIZE: usize = 136;

/// Internal block size (rate) of SHA3-512 in bytes
pub const SHA3_512_BLOCK_SIZE: usize = 72;

/// Internal block size (rate) of SHAKE128 in bytes
pub const SHAKE128_BLOCK_SIZE: usize = 168;

/// Internal block size (rate) of SHAKE256 in bytes
pub const SHAKE256_BLOCK_SIZE: usize = 136;

/// Padding domain byte for SHA3 hashes
pub const SHA3_DOMAIN: u8 = 0x06;

/// Padding domain byte for SHAKE extendable-output functions
pub const SHAKE_DOMAIN: u8 = 0x1F;
