extern crate std;

use proptest::prelude::*;

use super::*;
use crate::common::{
  portable::{slice8_64, slice8_64_at},
  reference::{crc64_bitwise, crc64_bytewise},
};

proptest! {
  #[test]
  fn crc64_iso_matches_bitwise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc64Iso::checksum(&data);
    prop_assert_eq!(ours, crc64_bitwise(CRC64_ISO_POLY, 0, &data));
  }

  #[test]
  fn slice8_matches_bytewise_with_any_seed(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    seed in any::<u64>(),
  ) {
    let t = tables();
    prop_assert_eq!(slice8_64(seed, &data, t.as_tables()), crc64_bytewise(seed, &data, t.row0()));
  }

  #[test]
  fn base_offset_never_changes_state(
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    base in any::<usize>(),
    seed in any::<u64>(),
  ) {
    let t = tables().as_tables();
    prop_assert_eq!(slice8_64_at(seed, &data, base, t), slice8_64(seed, &data, t));
  }

  #[test]
  fn every_kernel_agrees(data in proptest::collection::vec(any::<u8>(), 0..=1024), seed in any::<u64>()) {
    let expected = crc64_bitwise(CRC64_ISO_POLY, seed, &data);
    for kernel in kernels::ALL {
      prop_assert_eq!((kernel.func)(seed, &data, tables()), expected, "{}", kernel.name);
    }
  }

  #[test]
  fn crc64_iso_streaming_and_combine(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    chunk in 1usize..=257,
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let oneshot = Crc64Iso::checksum(&data);

    let mut hasher = Crc64Iso::new();
    for part in a.chunks(chunk) {
      hasher.update(part);
    }
    for part in b.chunks(chunk) {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.finalize(), oneshot);

    let crc_a = Crc64Iso::checksum(a);
    let crc_b = Crc64Iso::checksum(b);
    prop_assert_eq!(Crc64Iso::combine(crc_a, crc_b, b.len()), oneshot);

    let mut resumed = Crc64Iso::resume(crc_a);
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), oneshot);
  }

  #[test]
  fn reset_forgets_history(
    junk in proptest::collection::vec(any::<u8>(), 0..=256),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let mut hasher = Crc64Iso::new();
    hasher.update(&junk);
    hasher.reset();
    hasher.update(&data);
    prop_assert_eq!(hasher.finalize(), Crc64Iso::checksum(&data));
  }
}
