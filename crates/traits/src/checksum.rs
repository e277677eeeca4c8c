//! Streaming checksum traits.
//!
//! - **Streaming**: incremental `write`/`update` calls over arbitrary splits
//! - **Serialization**: the running state has a fixed big-endian wire form
//! - **Parallelism**: combine operation for independently computed chunks

use core::fmt::Debug;

use crate::error::ChecksumMismatch;

/// Fixed-width checksum output.
///
/// The wire form of every output is big-endian (most significant byte first),
/// so a CRC-64 state `0x0102_0304_0506_0708` serializes to the bytes
/// `01 02 03 04 05 06 07 08`.
pub trait ChecksumOutput: Copy + Eq + Debug + Default {
  /// Serialized width in bytes.
  const BYTES: usize;

  /// Append the big-endian bytes of `self` to `out`.
  fn extend_be<E: Extend<u8>>(self, out: &mut E);

  /// Decode a big-endian value. Returns `None` unless `bytes` is exactly
  /// [`BYTES`](Self::BYTES) long.
  #[must_use]
  fn from_be_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_checksum_output {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ChecksumOutput for $ty {
        const BYTES: usize = core::mem::size_of::<$ty>();

        #[inline]
        fn extend_be<E: Extend<u8>>(self, out: &mut E) {
          out.extend(self.to_be_bytes());
        }

        #[inline]
        fn from_be_slice(bytes: &[u8]) -> Option<Self> {
          bytes.try_into().ok().map(<$ty>::from_be_bytes)
        }
      }
    )*
  };
}

impl_checksum_output!(u16, u32, u64);

/// Streaming checksum accumulator.
///
/// This is the capability contract consumed by callers: `write` bytes in any
/// number of calls, read the state with [`finalize`](Self::finalize) or
/// [`sum`](Self::sum), and [`reset`](Self::reset) to start over. Alternative
/// accumulators (a different kernel, a buffered wrapper) implement the same
/// trait without touching callers.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc64Iso};
///
/// // One-shot
/// let crc = Crc64Iso::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc64Iso::new();
/// hasher.write(b"hello ");
/// hasher.write(b"world");
/// assert_eq!(hasher.finalize(), crc);
///
/// // Big-endian serialization appended to a prefix
/// let framed = hasher.sum(b"frame:".to_vec());
/// assert_eq!(framed.len(), 6 + 8);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not alter the state
/// - `reset()` must restore the hasher to the state returned by `new()`
/// - `update(a); update(b)` must equal `update(a ++ b)` for every split
pub trait Checksum: Clone + Default {
  /// Output size in bytes (`Size`).
  ///
  /// - CRC-64: 8
  /// - CRC-32: 4
  const OUTPUT_SIZE: usize;

  /// Preferred input granularity in bytes (`BlockSize`).
  ///
  /// Purely advisory: every implementation accepts input of any length.
  const BLOCK_SIZE: usize;

  /// The checksum output type.
  type Output: ChecksumOutput;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial state.
  ///
  /// Useful for resuming a checksum computation or for non-standard initial values.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Consume `data` and return the number of bytes consumed.
  ///
  /// Always consumes the full slice and never fails; the return value is
  /// `data.len()`.
  #[inline]
  fn write(&mut self, data: &[u8]) -> usize {
    self.update(data);
    data.len()
  }

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the current checksum without consuming or resetting the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Instance accessor for [`OUTPUT_SIZE`](Self::OUTPUT_SIZE).
  #[inline]
  #[must_use]
  fn size(&self) -> usize {
    Self::OUTPUT_SIZE
  }

  /// Instance accessor for [`BLOCK_SIZE`](Self::BLOCK_SIZE).
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Append the big-endian checksum to `prefix` and return it.
  ///
  /// The hasher state is left untouched, so further writes continue from
  /// the same point.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  fn sum(&self, mut prefix: alloc::vec::Vec<u8>) -> alloc::vec::Vec<u8> {
    prefix.reserve(Self::OUTPUT_SIZE);
    self.finalize().extend_be(&mut prefix);
    prefix
  }

  /// Compare the current checksum against `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`ChecksumMismatch`] carrying both values when they differ.
  #[inline]
  fn verify(&self, expected: Self::Output) -> Result<(), ChecksumMismatch<Self::Output>> {
    let actual = self.finalize();
    if actual == expected {
      Ok(())
    } else {
      Err(ChecksumMismatch::new(expected, actual))
    }
  }

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Compute the checksum of `std::io::IoSlice` buffers in one shot.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn checksum_io_slices(bufs: &[std::io::IoSlice<'_>]) -> Self::Output {
    let mut h = Self::new();
    h.update_io_slices(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use checksum::{Checksum, Crc64Iso};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc64Iso::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:016x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self> {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self> {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently (one accumulator per chunk)
/// 3. Combine results
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  #[derive(Clone, Default)]
  struct Sum16(u16);

  impl Checksum for Sum16 {
    const OUTPUT_SIZE: usize = 2;
    const BLOCK_SIZE: usize = 1;
    type Output = u16;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u16) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
    }
    fn finalize(&self) -> u16 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn output_be_roundtrip() {
    let mut out = Vec::new();
    0x0102_0304_0506_0708u64.extend_be(&mut out);
    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(u64::from_be_slice(&out), Some(0x0102_0304_0506_0708));
  }

  #[test]
  fn output_rejects_wrong_width() {
    assert_eq!(u64::from_be_slice(&[0; 7]), None);
    assert_eq!(u32::from_be_slice(&[0; 8]), None);
    assert_eq!(u16::from_be_slice(&[0xAB, 0xCD]), Some(0xABCD));
  }

  #[test]
  fn write_reports_full_length() {
    let mut h = Sum16::new();
    assert_eq!(h.write(b"abc"), 3);
    assert_eq!(h.write(&[]), 0);
    assert_eq!(h.finalize(), u16::from(b'a') + u16::from(b'b') + u16::from(b'c'));
  }

  #[test]
  fn metadata_matches_constants() {
    let h = Sum16::new();
    assert_eq!(h.size(), 2);
    assert_eq!(h.block_size(), 1);
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn sum_appends_without_resetting() {
    let mut h = Sum16::new();
    h.update(&[0x12, 0x22]);
    let out = h.sum(b"xy".to_vec());
    assert_eq!(out, [b'x', b'y', 0x00, 0x34]);
    assert_eq!(h.finalize(), 0x34);
  }

  #[test]
  fn verify_reports_both_values() {
    let h = Sum16::with_initial(7);
    assert!(h.verify(7).is_ok());
    let err = h.verify(9).unwrap_err();
    assert_eq!(err.expected(), 9);
    assert_eq!(err.actual(), 7);
  }
}
