//! Const-fn CRC-64 lookup table generation.
//!
//! The slice-by-8 kernel needs eight 256-entry tables. Row 0 is the classic
//! byte-at-a-time table; row `k` holds the contribution of a byte followed by
//! `k` zero bytes, which is what lets eight input bytes be folded into the
//! state with eight independent lookups.
//!
//! | Row | Entry `n` |
//! |-----|-----------|
//! | 0 | CRC of the single byte `n` |
//! | k (1..8) | `T[0][T[k-1][n] & 0xFF] ^ (T[k-1][n] >> 8)` |
//!
//! Generation is deterministic and total: the same polynomial always yields
//! the same tables, so building them more than once is harmless.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8)
// or `& 0xFF` masks. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

/// Number of tables used by the slicing kernel.
pub const SLICE8_TABLES: usize = 8;

/// Slice-by-8 lookup tables for a 64-bit CRC.
pub type Tables8 = [[u64; 256]; SLICE8_TABLES];

/// CRC-64/ISO polynomial (`x^64 + x^4 + x^3 + x + 1`, normal form
/// `0x000000000000001B`) in reflected form.
///
/// Used by ISO 3309 / HDLC, Go's `hash/crc64` (`crc64.ISO`), and SWISS-PROT.
pub const CRC64_ISO_POLY: u64 = 0xD800_0000_0000_0000;

/// Generate a single CRC-64 lookup table entry.
///
/// XORs `index` into the low bits of a zero register, then runs 8 reflected
/// shift rounds: shift right, and XOR the polynomial when the bit shifted out
/// was set.
#[must_use]
pub const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-64 lookup tables for slice-by-8 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc64_tables_8(poly: u64) -> Tables8 {
  let mut tables = [[0u64; 256]; SLICE8_TABLES];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < SLICE8_TABLES {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
