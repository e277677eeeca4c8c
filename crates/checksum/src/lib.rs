//! CRC-64/ISO checksums with a slice-by-8 table kernel.
//!
//! This crate provides a streaming CRC-64/ISO accumulator ([`Crc64Iso`]) built
//! on process-wide lookup tables and a portable slice-by-8 kernel.
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc64Iso`] | 0x000000000000001B | `u64` | ISO 3309 / HDLC, Go `hash/crc64` |
//!
//! The accumulator exposes the raw register: it starts at 0 and applies no
//! final XOR. Its state is independent of how the input is split across
//! writes.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, Crc64Iso};
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = Crc64Iso::checksum(data);
//! assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);
//!
//! // Streaming computation
//! let mut hasher = Crc64Iso::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Combine independently computed parts
//! let (a, b) = data.split_at(4);
//! let combined = Crc64Iso::combine(Crc64Iso::checksum(a), Crc64Iso::checksum(b), b.len());
//! assert_eq!(combined, crc);
//! ```
//!
//! # Kernel Selection
//!
//! The slice-by-8 kernel is the default. Set `FASTCRC64_FORCE` to `bytewise`
//! or `reference` before process start to route every update through a
//! slower kernel; all kernels produce identical results.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;
mod crc64;
pub mod dispatchers;

#[doc(hidden)]
pub mod __internal {
  pub use crate::{
    common::{
      combine::{combine_crc64, generate_shift8_matrix_64},
      portable::{SLICE8_ALIGN, head_len, slice8_64, slice8_64_at},
      reference::{crc64_bitwise, crc64_bytewise},
      tables::{CRC64_ISO_POLY, generate_crc64_tables_8},
    },
    crc64::kernels,
  };
}

pub use crc64::{Crc64Config, Crc64Force, Crc64Iso, Crc64Tables, ParseForceError, tables};
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{Checksum, ChecksumCombine, ChecksumMismatch, ChecksumOutput};
