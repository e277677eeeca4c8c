//! Streaming CRC-64/ISO checksums with a slice-by-8 table kernel.
//!
//! `fastcrc64` re-exports the checksum accumulator and its traits. It is
//! `no_std` compatible and has no third-party dependencies.
//!
//! # Quick Start
//!
//! ```
//! use fastcrc64::{Checksum, Crc64Iso};
//!
//! // One-shot computation
//! let crc = Crc64Iso::checksum(b"123456789");
//! assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);
//!
//! // Streaming computation
//! let mut hasher = Crc64Iso::new();
//! hasher.update(b"12345");
//! hasher.update(b"6789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Append the big-endian state to a buffer
//! let framed = hasher.sum(b"msg".to_vec());
//! assert_eq!(&framed[3..], &crc.to_be_bytes());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Lazily built tables, env overrides, `io` adapters |
//! | `alloc` | Yes | `Checksum::sum` (implied by `std`) |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! fastcrc64 = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, the lookup tables are evaluated at compile time and the
//! `FASTCRC64_FORCE` override is not consulted.
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Checksums
// =============================================================================

#[cfg(feature = "std")]
pub use checksum::io;
pub use checksum::{
  // Traits
  Checksum,
  ChecksumCombine,
  // Errors
  ChecksumMismatch,
  ChecksumOutput,
  // CRC-64/ISO
  Crc64Config,
  Crc64Force,
  Crc64Iso,
  ParseForceError,
};
