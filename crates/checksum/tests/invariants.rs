use checksum::{
  Checksum, ChecksumCombine, ChecksumOutput, Crc64Iso,
  __internal::{CRC64_ISO_POLY, SLICE8_ALIGN, crc64_bitwise, generate_crc64_tables_8, slice8_64, slice8_64_at},
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn crc64_iso_bitwise(init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  for &b in data {
    crc ^= u64::from(b);
    for _ in 0..8 {
      let mask = 0u64.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (CRC64_ISO_POLY & mask);
    }
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Known Answers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn known_answer_vectors() {
  let all_bytes: Vec<u8> = (0..=255u8).collect();
  let cases: [(&[u8], u64); 5] = [
    (b"", 0),
    (b"123456789", 0x46A5_A938_8A5B_EFFE),
    (b"a", 0x5BB0_0000_0000_0000),
    (b"The quick brown fox jumps over the lazy dog", 0xB10E_B1B0_3E5A_1D71),
    (&all_bytes, 0x6C27_EAA7_8BA3_F822),
  ];

  for (input, expected) in cases {
    let got = Crc64Iso::checksum(input);
    assert_eq!(got, expected, "len={}: got {got:#018X}, expected {expected:#018X}", input.len());
  }
}

#[test]
fn go_iso_check_value() {
  let mut h = Crc64Iso::with_initial(!0);
  h.update(b"123456789");
  assert_eq!(h.finalize() ^ !0, 0xB909_56C7_75A4_1001);
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn crc64_iso_invariants() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 9, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
  let seeds = [1u64, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = Crc64Iso::checksum(&data);
      assert_eq!(oneshot, crc64_iso_bitwise(0, &data), "reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = Crc64Iso::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "streaming mismatch at len={len} split={split}");

        let combined = Crc64Iso::combine(Crc64Iso::checksum(a), Crc64Iso::checksum(b), b.len());
        assert_eq!(combined, oneshot, "combine mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn three_way_split_matches_oneshot() {
  let data = gen_bytes(300, 7);
  let oneshot = Crc64Iso::checksum(&data);

  for i in (0..=data.len()).step_by(13) {
    for j in (i..=data.len()).step_by(17) {
      let mut h = Crc64Iso::new();
      h.update(&data[..i]);
      h.update(&data[i..j]);
      h.update(&data[j..]);
      assert_eq!(h.finalize(), oneshot, "split at {i}/{j}");
    }
  }
}

#[test]
fn vectored_matches_oneshot() {
  let data = b"The quick brown fox jumps over the lazy dog";
  let (a, b) = data.split_at(7);
  let (b, c) = b.split_at(13);
  let bufs: [&[u8]; 3] = [a, b, c];

  assert_eq!(Crc64Iso::checksum_vectored(&bufs), Crc64Iso::checksum(data));
}

#[test]
fn io_slices_match_oneshot() {
  use std::io::IoSlice;

  let data = b"The quick brown fox jumps over the lazy dog";
  let (a, b) = data.split_at(7);
  let (b, c) = b.split_at(13);
  let bufs = [IoSlice::new(a), IoSlice::new(b), IoSlice::new(c)];

  assert_eq!(Crc64Iso::checksum_io_slices(&bufs), Crc64Iso::checksum(data));
}

#[test]
fn reset_then_reuse() {
  let junk = gen_bytes(513, 3);
  let data = gen_bytes(100, 4);

  let mut h = Crc64Iso::new();
  h.update(&junk);
  h.reset();
  h.update(&data);
  assert_eq!(h.finalize(), Crc64Iso::checksum(&data));
}

#[test]
fn sum_round_trips_through_big_endian() {
  let mut h = Crc64Iso::new();
  h.update(b"123456789");

  let out = h.sum(b"prefix:".to_vec());
  assert_eq!(&out[..7], b"prefix:");
  assert_eq!(u64::from_be_slice(&out[7..]), Some(h.sum64()));
  assert_eq!(out[7..], 0x46A5_A938_8A5B_EFFEu64.to_be_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Alignment
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn misaligned_subslices_match_reference() {
  let backing = gen_bytes(4096 + 2 * SLICE8_ALIGN, 11);

  for start in 0..(2 * SLICE8_ALIGN) {
    for len in [0usize, 1, 7, 8, 9, 100, 4096] {
      let data = &backing[start..start + len];
      assert_eq!(
        Crc64Iso::checksum(data),
        crc64_iso_bitwise(0, data),
        "start={start} len={len}"
      );
    }
  }
}

#[test]
fn slicing_engine_is_independent_of_base_offset() {
  let tables = generate_crc64_tables_8(CRC64_ISO_POLY);
  let data = gen_bytes(1000, 5);
  let expected = crc64_bitwise(CRC64_ISO_POLY, 0, &data);

  for base in 0..64 {
    assert_eq!(slice8_64_at(0, &data, base, &tables), expected, "base {base}");
  }
  assert_eq!(slice8_64(0, &data, &tables), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// I/O Adapters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reader_checksums_bytes_read() {
  use std::io::Read;

  let data = gen_bytes(10_000, 9);
  let mut reader = Crc64Iso::reader(std::io::Cursor::new(data.clone()));
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();

  assert_eq!(sink, data);
  assert_eq!(reader.crc(), Crc64Iso::checksum(&data));
}

#[test]
fn writer_checksums_bytes_written() {
  use std::io::Write;

  let data = gen_bytes(10_000, 10);
  let mut writer = Crc64Iso::writer(Vec::new());
  for chunk in data.chunks(333) {
    writer.write_all(chunk).unwrap();
  }

  assert_eq!(writer.crc(), Crc64Iso::checksum(&data));
  assert_eq!(writer.into_inner(), data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn independent_accumulators_across_threads() {
  let results: Vec<(u64, u64)> = std::thread::scope(|scope| {
    let handles: Vec<_> = (0..16u64)
      .map(|i| {
        scope.spawn(move || {
          let data = gen_bytes(2048 + i as usize, i + 1);
          let mut h = Crc64Iso::new();
          for chunk in data.chunks(1 + i as usize) {
            h.update(chunk);
          }
          (h.finalize(), crc64_iso_bitwise(0, &data))
        })
      })
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  for (i, (got, expected)) in results.into_iter().enumerate() {
    assert_eq!(got, expected, "thread {i}");
  }
}
