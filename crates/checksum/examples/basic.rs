//! Basic checksum usage: one-shot, streaming, sum and combine.
//!
//! Run with: `cargo run --example basic -p checksum`
//! Force a kernel: `FASTCRC64_FORCE=bytewise cargo run --example basic -p checksum`

use std::io::Write;

use checksum::{Checksum, ChecksumCombine, Crc64Iso};

fn main() -> std::io::Result<()> {
  println!("=== CRC-64/ISO Basic Examples ===\n");

  println!("Backend: {}", Crc64Iso::backend_name());
  println!("Config:  {:?}\n", Crc64Iso::config());

  one_shot_example();
  streaming_example();
  resume_example();
  combine_example();
  writer_example()
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_example() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // Raw register: zero init, no final XOR.
  let crc = Crc64Iso::checksum(data);
  println!("CRC-64/ISO (raw):    0x{crc:016X}");
  assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);

  // Go's hash/crc64 with crc64.ISO inverts on entry and exit.
  let mut go = Crc64Iso::with_initial(!0);
  go.update(data);
  let go_iso = go.finalize() ^ !0;
  println!("CRC-64/GO-ISO:       0x{go_iso:016X}");
  assert_eq!(go_iso, 0xB909_56C7_75A4_1001);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";

  // Process in chunks - result matches one-shot
  let mut hasher = Crc64Iso::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC-64: 0x{crc:016X}");
  assert_eq!(crc, Crc64Iso::checksum(data));

  // sum() appends the big-endian state without resetting
  let framed = hasher.sum(b"payload:".to_vec());
  println!("Sum with prefix:  {framed:02X?}");

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  println!("Extended CRC-64:  0x{:016X}", hasher.finalize());

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  println!("Reset CRC-64:     0x{:016X}", hasher.finalize());
  println!("Size: {} bytes, block size: {} bytes", hasher.size(), hasher.block_size());

  println!();
}

/// Resume computation from a saved checksum state.
fn resume_example() {
  println!("--- Resume from Saved State ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let mut hasher = Crc64Iso::new();
  hasher.update(part1);
  let saved_state = hasher.state();
  println!("Saved state after part1: 0x{saved_state:016X}");

  let mut resumed = Crc64Iso::resume(saved_state);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:016X}");

  let mut full = Crc64Iso::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}

/// Combine checksums of independently processed parts.
fn combine_example() {
  println!("--- Combine ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";
  let (a, b) = data.split_at(20);
  let combined = Crc64Iso::combine(Crc64Iso::checksum(a), Crc64Iso::checksum(b), b.len());
  println!("Combined CRC-64: 0x{combined:016X}");
  assert_eq!(combined, 0xB10E_B1B0_3E5A_1D71);

  println!();
}

/// Checksum bytes as they are written to a sink.
fn writer_example() -> std::io::Result<()> {
  println!("--- Writer Adapter ---\n");

  let mut writer = Crc64Iso::writer(Vec::new());
  writer.write_all(b"1234")?;
  writer.write_all(b"56789")?;
  let (buf, crc) = writer.into_parts();
  println!("Wrote {} bytes, CRC-64: 0x{crc:016X}", buf.len());
  assert_eq!(crc, 0x46A5_A938_8A5B_EFFE);

  Ok(())
}
