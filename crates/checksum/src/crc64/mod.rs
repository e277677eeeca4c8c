//! CRC-64/ISO implementation.
//!
//! This module provides:
//! - [`Crc64Iso`] - streaming CRC-64/ISO accumulator (raw register semantics)
//! - [`Crc64Tables`] - the shared slice-by-8 lookup tables
//!
//! # Properties
//!
//! - **Polynomial**: 0x000000000000001B (normal), 0xD800000000000000 (reflected)
//! - **Initial value**: 0 (a fresh accumulator)
//! - **Final XOR**: none
//! - **Reflect input/output**: Yes
//!
//! The catalog CRC-64/GO-ISO check value is obtained with
//! `Crc64Iso::with_initial(!0)` and a final `^ !0`.

pub(crate) mod config;
pub mod kernels;

#[cfg(all(test, not(miri)))]
mod proptests;

use core::fmt;

pub use config::{Crc64Config, Crc64Force, ParseForceError};
use traits::{Checksum, ChecksumCombine};

use crate::{
  common::{
    combine::{Gf2Matrix64, combine_crc64, generate_shift8_matrix_64},
    tables::{CRC64_ISO_POLY, Tables8, generate_crc64_tables_8},
  },
  dispatchers::{Crc64Dispatcher, Crc64Fn, Selected},
};

// ─────────────────────────────────────────────────────────────────────────────
// Lookup Tables
// ─────────────────────────────────────────────────────────────────────────────

/// Slice-by-8 lookup tables for CRC-64/ISO.
///
/// Built exactly once per process and shared read-only by every accumulator.
#[derive(Clone, PartialEq, Eq)]
pub struct Crc64Tables(Tables8);

impl Crc64Tables {
  const fn generate() -> Self {
    Self(generate_crc64_tables_8(CRC64_ISO_POLY))
  }

  /// All eight rows.
  #[inline]
  #[must_use]
  pub const fn as_tables(&self) -> &Tables8 {
    &self.0
  }

  /// Row 0: the byte-at-a-time table.
  #[inline]
  #[must_use]
  pub const fn row0(&self) -> &[u64; 256] {
    let [row0, ..] = &self.0;
    row0
  }
}

impl fmt::Debug for Crc64Tables {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc64Tables")
      .field("poly", &format_args!("{CRC64_ISO_POLY:#018x}"))
      .finish_non_exhaustive()
  }
}

/// The process-wide CRC-64/ISO tables.
///
/// Under `std` the tables are generated on first use; concurrent first calls
/// block until one of them has published the tables. Without `std` they are
/// evaluated at compile time.
#[must_use]
pub fn tables() -> &'static Crc64Tables {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static TABLES: OnceLock<Crc64Tables> = OnceLock::new();
    TABLES.get_or_init(Crc64Tables::generate)
  }

  #[cfg(not(feature = "std"))]
  {
    static TABLES: Crc64Tables = Crc64Tables::generate();
    &TABLES
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

fn select_crc64_iso() -> Selected<Crc64Fn> {
  kernels::select(config::get().effective_force)
}

static CRC64_ISO_DISPATCHER: Crc64Dispatcher = Crc64Dispatcher::new(select_crc64_iso);

// ─────────────────────────────────────────────────────────────────────────────
// Accumulator
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-64/ISO streaming accumulator.
///
/// Used by ISO 3309 / HDLC and Go's `hash/crc64` (`crc64.ISO`).
///
/// The observable state is the raw CRC register: a fresh accumulator holds 0,
/// every write folds bytes into it, and [`finalize`](Checksum::finalize)
/// returns it unchanged. Splitting the input across any number of writes
/// yields the same state as a single write.
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc64Iso};
///
/// let crc = Crc64Iso::checksum(b"123456789");
/// assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);
///
/// let mut hasher = Crc64Iso::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
#[derive(Clone)]
pub struct Crc64Iso {
  state: u64,
  tables: &'static Crc64Tables,
}

impl Crc64Iso {
  /// Pre-computed shift-by-8 matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix64 = generate_shift8_matrix_64(CRC64_ISO_POLY);

  /// Create an accumulator that continues from a previous raw state.
  #[inline]
  #[must_use]
  pub fn resume(state: u64) -> Self {
    Self { state, tables: tables() }
  }

  /// Current raw register value.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u64 {
    self.state
  }

  /// Current state as a `u64`. Does not change the state.
  #[inline]
  #[must_use]
  pub const fn sum64(&self) -> u64 {
    self.state
  }

  /// Current state as 8 big-endian bytes.
  #[inline]
  #[must_use]
  pub const fn to_be_bytes(&self) -> [u8; 8] {
    self.state.to_be_bytes()
  }

  /// Get the name of the currently selected backend (e.g. "portable/slice8").
  #[must_use]
  pub fn backend_name() -> &'static str {
    CRC64_ISO_DISPATCHER.backend_name()
  }

  /// Get the effective CRC-64 configuration (overrides applied).
  #[must_use]
  pub fn config() -> Crc64Config {
    config::get()
  }
}

impl fmt::Debug for Crc64Iso {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc64Iso")
      .field("state", &format_args!("{:#018x}", self.state))
      .finish_non_exhaustive()
  }
}

impl Default for Crc64Iso {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc64Iso {
  const OUTPUT_SIZE: usize = 8;
  const BLOCK_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn new() -> Self {
    Self::resume(0)
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = CRC64_ISO_DISPATCHER.call(self.state, data, self.tables);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.state
  }

  #[inline]
  fn reset(&mut self) {
    self.state = 0;
  }
}

impl ChecksumCombine for Crc64Iso {
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    combine_crc64(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
