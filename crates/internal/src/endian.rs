//! Little-endian load helpers
//!
//! The centered binomial sampler reads its byte stream as little-endian
//! words. Callers guarantee the slice lengths; these helpers index directly.

/// Load 3 bytes into the low 24 bits of a `u32`
#[inline]
pub fn load24_le(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) | (u32::from(bytes[1]) << 8) | (u32::from(bytes[2]) << 16)
}

/// Convert a u32 from little-endian byte order to native byte order
#[inline]
pub fn load32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
