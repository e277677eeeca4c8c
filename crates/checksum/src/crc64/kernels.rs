//! Kernel name table and selection helpers for CRC-64.
//!
//! Every kernel shares the [`Crc64Fn`] signature and produces the same
//! register for the same input; they differ only in throughput.

use super::{Crc64Tables, config::Crc64Force};
use crate::{
  common::{
    portable::slice8_64,
    reference::{crc64_bitwise, crc64_bytewise},
    tables::CRC64_ISO_POLY,
  },
  dispatchers::{Crc64Fn, Selected},
};

/// Slice-by-8 table kernel name (the default).
pub const PORTABLE: &str = "portable/slice8";
/// Single-table, byte-at-a-time kernel name.
pub const BYTEWISE: &str = "portable/bytewise";
/// Bitwise reference kernel name.
pub const REFERENCE: &str = "reference/bitwise";

/// All kernels, for exhaustive cross-checks.
pub const ALL: &[Selected<Crc64Fn>] = &[
  Selected::new(PORTABLE, crc64_slice8),
  Selected::new(BYTEWISE, crc64_bytewise_kernel),
  Selected::new(REFERENCE, crc64_reference),
];

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Wrappers
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn crc64_slice8(crc: u64, data: &[u8], tables: &Crc64Tables) -> u64 {
  slice8_64(crc, data, tables.as_tables())
}

#[inline]
fn crc64_bytewise_kernel(crc: u64, data: &[u8], tables: &Crc64Tables) -> u64 {
  crc64_bytewise(crc, data, tables.row0())
}

#[inline]
fn crc64_reference(crc: u64, data: &[u8], _tables: &Crc64Tables) -> u64 {
  crc64_bitwise(CRC64_ISO_POLY, crc, data)
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Kernel for a force mode. `Auto` picks slice-by-8 for every length.
#[inline]
#[must_use]
pub const fn select(force: Crc64Force) -> Selected<Crc64Fn> {
  match force {
    Crc64Force::Auto | Crc64Force::Slice8 => Selected::new(PORTABLE, crc64_slice8),
    Crc64Force::Bytewise => Selected::new(BYTEWISE, crc64_bytewise_kernel),
    Crc64Force::Reference => Selected::new(REFERENCE, crc64_reference),
  }
}
