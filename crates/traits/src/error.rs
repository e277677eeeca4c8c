//! Error types for checksum verification.
//!
//! The hot path of every checksum is total. The only failure a caller can
//! observe is a verification mismatch against an expected value.

use core::fmt;

/// A computed checksum did not match the expected value.
///
/// Returned by [`Checksum::verify`](crate::Checksum::verify).
///
/// # Examples
///
/// ```
/// use traits::ChecksumMismatch;
///
/// fn check(expected: u64, actual: u64) -> Result<(), ChecksumMismatch<u64>> {
///   if expected == actual { Ok(()) } else { Err(ChecksumMismatch::new(expected, actual)) }
/// }
///
/// let err = check(0x10, 0x2f).unwrap_err();
/// assert_eq!(err.to_string(), "checksum mismatch: expected 0x10, got 0x2f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecksumMismatch<T> {
  expected: T,
  actual: T,
}

impl<T: Copy> ChecksumMismatch<T> {
  #[inline]
  #[must_use]
  pub const fn new(expected: T, actual: T) -> Self {
    Self { expected, actual }
  }

  /// The value the caller expected.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> T {
    self.expected
  }

  /// The value actually computed.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> T {
    self.actual
  }
}

impl<T: fmt::LowerHex> fmt::Display for ChecksumMismatch<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "checksum mismatch: expected {:#x}, got {:#x}", self.expected, self.actual)
  }
}

impl<T: fmt::Debug + fmt::LowerHex> core::error::Error for ChecksumMismatch<T> {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    let err = ChecksumMismatch::new(0x46a5_a938_8a5b_effe_u64, 0);
    assert_eq!(err.to_string(), "checksum mismatch: expected 0x46a5a9388a5beffe, got 0x0");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", ChecksumMismatch::new(1u32, 2u32));
    assert_eq!(dbg, "ChecksumMismatch { expected: 1, actual: 2 }");
  }

  #[test]
  fn accessors() {
    let err = ChecksumMismatch::new(3u16, 4u16);
    assert_eq!(err.expected(), 3);
    assert_eq!(err.actual(), 4);
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<ChecksumMismatch<u64>>();
    assert_sync::<ChecksumMismatch<u64>>();
    assert_error::<ChecksumMismatch<u64>>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    let err = ChecksumMismatch::new(0u64, 1u64);
    assert!(err.source().is_none());
  }
}
