//! Fuzz target for CRC-64/ISO.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume and combine produce correct results
//! - The slicing kernel is independent of the alignment base offset

#![no_main]

use arbitrary::Arbitrary;
use checksum::{
  Checksum, ChecksumCombine, Crc64Iso,
  __internal::{CRC64_ISO_POLY, crc64_bitwise, slice8_64_at},
  tables,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  base: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc64Iso::checksum(data);
  assert_eq!(oneshot, crc64_bitwise(CRC64_ISO_POLY, 0, data), "crc64/iso reference mismatch");

  let (a, b) = data.split_at(split);
  let mut hasher = Crc64Iso::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "crc64/iso incremental mismatch");

  let crc_a = Crc64Iso::checksum(a);
  let mut resumed = Crc64Iso::resume(crc_a);
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "crc64/iso resume mismatch");

  let crc_b = Crc64Iso::checksum(b);
  assert_eq!(oneshot, Crc64Iso::combine(crc_a, crc_b, b.len()), "crc64/iso combine mismatch");

  let shifted = slice8_64_at(0, data, input.base, tables().as_tables());
  assert_eq!(oneshot, shifted, "crc64/iso base offset {} mismatch", input.base);
});
