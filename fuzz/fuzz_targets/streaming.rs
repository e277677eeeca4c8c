//! Fuzz target for the streaming CRC-64/ISO API.
//!
//! Tests that arbitrary sequences of write and reset calls produce correct
//! results.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc64Iso};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
  Write(Vec<u8>),
  Reset,
  Sum,
}

fuzz_target!(|ops: Vec<Op>| {
  let mut hasher = Crc64Iso::new();
  // Everything written since the last reset.
  let mut since_reset: Vec<u8> = Vec::new();

  for op in ops {
    match op {
      Op::Write(bytes) => {
        assert_eq!(hasher.write(&bytes), bytes.len(), "write must report full length");
        since_reset.extend_from_slice(&bytes);
      }
      Op::Reset => {
        hasher.reset();
        since_reset.clear();
      }
      Op::Sum => {
        let out = hasher.sum(Vec::new());
        assert_eq!(out, hasher.finalize().to_be_bytes(), "sum must append the big-endian state");
      }
    }

    assert_eq!(hasher.finalize(), Crc64Iso::checksum(&since_reset), "crc64/iso streaming mismatch");
  }
});
