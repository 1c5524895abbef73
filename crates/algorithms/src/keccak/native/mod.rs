//! Keccak-f[1600] on architecture-specific instructions
//!
//! - **x86_64**: the lane-explicit round compiled with BMI1/BMI2, so χ
//!   lowers to `ANDN` and the ρ rotations to `RORX`
//! - **aarch64**: the ARMv8.2 SHA3 extension (`EOR3`, `RAX1`, `XAR`,
//!   `BCAX`)
//!
//! The CPU is checked at run time when `std` is available and at compile
//! time otherwise. Without the extension, or on any other architecture,
//! [`NativeKeccak`] runs the portable [`UnrolledKeccak`] round.
//!
//! # Safety
//!
//! The intrinsics live in the per-architecture submodules. Each
//! `#[target_feature]` function is only entered after
//! [`NativeKeccak::accelerated`] confirmed the feature.

#![allow(unsafe_code)]

use super::{KeccakPermutation, KeccakState, UnrolledKeccak};

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
mod x86_64;

/// Keccak-f[1600] using the host's hash-friendly instructions when present.
///
/// Bit-exact with every other backend; only the instruction selection
/// differs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeKeccak;

impl NativeKeccak {
    /// Whether [`KeccakPermutation::permute`] takes the accelerated path on
    /// this machine.
    #[inline]
    pub fn accelerated() -> bool {
        has_extension()
    }
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn has_extension() -> bool {
    #[cfg(all(target_feature = "bmi1", target_feature = "bmi2"))]
    {
        true
    }
    #[cfg(not(all(target_feature = "bmi1", target_feature = "bmi2")))]
    {
        #[cfg(feature = "std")]
        {
            std::arch::is_x86_feature_detected!("bmi1")
                && std::arch::is_x86_feature_detected!("bmi2")
        }
        #[cfg(not(feature = "std"))]
        {
            false
        }
    }
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn has_extension() -> bool {
    #[cfg(target_feature = "sha3")]
    {
        true
    }
    #[cfg(not(target_feature = "sha3"))]
    {
        #[cfg(feature = "std")]
        {
            std::arch::is_aarch64_feature_detected!("sha3")
        }
        #[cfg(not(feature = "std"))]
        {
            false
        }
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
fn has_extension() -> bool {
    false
}

impl KeccakPermutation for NativeKeccak {
    const NAME: &'static str = "native";

    #[inline]
    fn permute(state: &mut KeccakState) {
        #[cfg(target_arch = "x86_64")]
        if has_extension() {
            // SAFETY: BMI1 and BMI2 confirmed by has_extension()
            unsafe { x86_64::permute_bmi(state) };
            return;
        }

        #[cfg(target_arch = "aarch64")]
        if has_extension() {
            // SAFETY: the SHA3 extension confirmed by has_extension()
            unsafe { aarch64::permute_sha3(state) };
            return;
        }

        UnrolledKeccak::permute(state);
    }
}
