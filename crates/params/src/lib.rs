//! Constant values for the mlkem library
//!
//! Parameter sets and primitive sizes live here so that every crate in the
//! workspace agrees on them without depending on one another.

#![no_std]

pub mod pqc;
pub mod utils;
