//! Differential fuzzing against the `crc` crate.
//!
//! Compares CRC-64/ISO against a custom raw `crc::Algorithm` and the
//! catalog CRC-64/GO-ISO parameterization.

#![no_main]

use checksum::{Checksum, Crc64Iso};
use crc::{CRC_64_GO_ISO, Crc};
use libfuzzer_sys::fuzz_target;

const CRC_64_ISO_RAW: crc::Algorithm<u64> = crc::Algorithm {
  width: 64,
  poly: 0x000000000000001B,
  init: 0x0000000000000000,
  refin: true,
  refout: true,
  xorout: 0x0000000000000000,
  check: 0x46a5a9388a5beffe,
  residue: 0x0000000000000000,
};

const RAW: Crc<u64> = Crc::<u64>::new(&CRC_64_ISO_RAW);
const GO_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

fuzz_target!(|data: &[u8]| {
  let ours = Crc64Iso::checksum(data);
  let reference = RAW.checksum(data);
  assert_eq!(
    ours, reference,
    "CRC-64/ISO differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours, reference, data.len()
  );

  let mut go = Crc64Iso::with_initial(!0);
  go.update(data);
  let ours_go = go.finalize() ^ !0;
  let reference_go = GO_ISO.checksum(data);
  assert_eq!(
    ours_go, reference_go,
    "CRC-64/GO-ISO differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours_go, reference_go, data.len()
  );
});
