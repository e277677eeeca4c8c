//! Common building blocks for CRC-64 computation.
//!
//! This module provides:
//! - Const-fn lookup table generation
//! - Bitwise and bytewise reference kernels
//! - The portable slice-by-8 kernel
//! - GF(2) matrix operations for `combine()`

pub mod combine;
pub mod portable;
pub mod reference;
pub mod tables;
