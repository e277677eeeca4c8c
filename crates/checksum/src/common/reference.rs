//! Reference CRC-64 implementations.
//!
//! These are the "source of truth" every optimized kernel is checked against:
//!
//! - [`crc64_bitwise`]: one bit at a time, no tables. Obviously correct and
//!   const-evaluable, so check values are verified at compile time below.
//! - [`crc64_bytewise`]: one byte at a time through table row 0. This is the
//!   exact per-byte rule the slicing kernel uses for its unaligned head and
//!   trailing tail.
//!
//! # CRC Model
//!
//! Raw register semantics, reflected (LSB-first):
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `width`   | 64 |
//! | `poly`    | `0xD800000000000000` (reflected) |
//! | `init`    | caller supplied (0 for a fresh accumulator) |
//! | `refin`/`refout` | true |
//! | `xorout`  | none |
//!
//! These are intentionally slow. Use them for test oracles and for the
//! `reference` force mode, never for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()) or `& 0xFF`.
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::tables::CRC64_ISO_POLY;

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., [`CRC64_ISO_POLY`])
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies a final XOR if its
/// parameterization needs one).
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Byte-at-a-time CRC-64 update through a single lookup table.
///
/// `state = table[(state ^ byte) & 0xFF] ^ (state >> 8)` for each byte.
#[inline]
#[must_use]
pub fn crc64_bytewise(mut crc: u64, data: &[u8], table: &[u64; 256]) -> u64 {
  for &byte in data {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// Raw register, init=0, no final XOR.
const _: () = {
  let raw = crc64_bitwise(CRC64_ISO_POLY, 0, CHECK_INPUT);
  assert!(raw == 0x46A5_A938_8A5B_EFFE);
};

// CRC-64/GO-ISO catalog parameterization: init=!0, xorout=!0.
// Check value: 0xB90956C775A41001
const _: () = {
  let check = crc64_bitwise(CRC64_ISO_POLY, !0u64, CHECK_INPUT) ^ !0u64;
  assert!(check == 0xB909_56C7_75A4_1001);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;
  use crate::common::tables::generate_crc64_tables_8;

  #[test]
  fn empty_returns_init() {
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0, &[]), 0);
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
  }

  #[test]
  fn zero_bytes_keep_zero_state() {
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0, &[0u8; 64]), 0);
  }

  #[test]
  fn bitwise_incremental() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc64_bitwise(CRC64_ISO_POLY, 0, data);
    assert_eq!(oneshot, 0xB10E_B1B0_3E5A_1D71);

    for split in 0..=data.len() {
      let first = crc64_bitwise(CRC64_ISO_POLY, 0, &data[..split]);
      let second = crc64_bitwise(CRC64_ISO_POLY, first, &data[split..]);
      assert_eq!(second, oneshot, "split {split}");
    }
  }

  #[test]
  fn bytewise_matches_bitwise() {
    let tables = generate_crc64_tables_8(CRC64_ISO_POLY);
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(crc64_bytewise(0, &data, &tables[0]), crc64_bitwise(CRC64_ISO_POLY, 0, &data));
    assert_eq!(crc64_bytewise(0, &data, &tables[0]), 0x6C27_EAA7_8BA3_F822);

    let seeded = 0x0123_4567_89AB_CDEF;
    assert_eq!(crc64_bytewise(seeded, &data, &tables[0]), crc64_bitwise(CRC64_ISO_POLY, seeded, &data));
  }

  #[test]
  fn single_byte_vector() {
    assert_eq!(crc64_bitwise(CRC64_ISO_POLY, 0, b"a"), 0x5BB0_0000_0000_0000);
  }
}
