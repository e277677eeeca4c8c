//! Streaming checksum traits for fastcrc64.
//!
//! This crate defines the capability contract that every checksum
//! accumulator in the workspace satisfies. It is `no_std` compatible and has
//! zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming accumulator: write, sum, reset, size, block size |
//! | [`ChecksumCombine`] | O(log n) combination of independently computed checksums |
//! | [`ChecksumOutput`] | Fixed-width integer output with a big-endian wire form |
//!
//! # Error Types
//!
//! - [`ChecksumMismatch`] - returned by [`Checksum::verify`]
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine, ChecksumOutput};
pub use error::ChecksumMismatch;
