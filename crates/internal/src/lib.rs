//! Internal utilities for the mlkem library
//!
//! Nothing in this crate is part of the public API. It holds the
//! constant-time building blocks and the little-endian load helpers used
//! by the noise sampler.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_cmov_zero, ct_eq, ct_memcmp, ct_select};
