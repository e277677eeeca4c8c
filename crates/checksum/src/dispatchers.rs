//! Kernel dispatch for CRC-64.
//!
//! A dispatcher wraps a selector function and caches the [`Selected`] kernel
//! on first access. Under `std` the cache is a `OnceLock`; without `std` the
//! selector runs on every call. Selectors are pure functions of the process
//! configuration, so both give the same answer.
//!
//! # Usage
//!
//! ```ignore
//! use checksum::dispatchers::{Crc64Dispatcher, Crc64Fn, Selected};
//!
//! fn select() -> Selected<Crc64Fn> {
//!     Selected::new("portable/slice8", slice8_kernel)
//! }
//!
//! static DISPATCHER: Crc64Dispatcher = Crc64Dispatcher::new(select);
//! ```

use crate::crc64::Crc64Tables;

/// The result of kernel selection: a name for introspection and the kernel.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Dispatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Function signature for CRC-64/ISO kernels.
///
/// # Arguments
///
/// * `state` - Current raw CRC register (0 for a fresh accumulator)
/// * `data` - Input data to process
/// * `tables` - Slice-by-8 lookup tables
///
/// # Returns
///
/// Updated register after processing the input data.
pub type Crc64Fn = fn(u64, &[u8], &Crc64Tables) -> u64;

/// Dispatcher for CRC-64 kernels.
///
/// Caches the selected kernel on first access. Thread-safe.
#[derive(Debug)]
pub struct Crc64Dispatcher {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<Crc64Fn>>,

  /// The selector function that chooses the kernel.
  selector: fn() -> Selected<Crc64Fn>,
}

impl Crc64Dispatcher {
  /// Create a new dispatcher with the given selector function.
  #[must_use]
  pub const fn new(selector: fn() -> Selected<Crc64Fn>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<Crc64Fn> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| (self.selector)())
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Get the name of the selected backend.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }

  /// Call the selected kernel.
  #[inline]
  #[must_use]
  pub fn call(&self, crc: u64, data: &[u8], tables: &Crc64Tables) -> u64 {
    (self.get().func)(crc, data, tables)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crc64::tables;

  fn fixed_crc64(_state: u64, _data: &[u8], _tables: &Crc64Tables) -> u64 {
    0xDEAD_BEEF_CAFE_BABE
  }

  fn echo_len(state: u64, data: &[u8], _tables: &Crc64Tables) -> u64 {
    state + data.len() as u64
  }

  fn fixed_selector() -> Selected<Crc64Fn> {
    Selected::new("test/fixed", fixed_crc64)
  }

  fn echo_selector() -> Selected<Crc64Fn> {
    Selected::new("test/echo", echo_len)
  }

  #[test]
  fn dispatcher_reports_selected_kernel() {
    static DISPATCH: Crc64Dispatcher = Crc64Dispatcher::new(fixed_selector);
    assert_eq!(DISPATCH.get().name, "test/fixed");
    assert_eq!(DISPATCH.backend_name(), "test/fixed");
    assert_eq!(DISPATCH.call(0, &[], tables()), 0xDEAD_BEEF_CAFE_BABE);
  }

  #[test]
  fn dispatcher_forwards_arguments() {
    static DISPATCH: Crc64Dispatcher = Crc64Dispatcher::new(echo_selector);
    assert_eq!(DISPATCH.call(10, b"abc", tables()), 13);
    assert_eq!(DISPATCH.call(10, b"abc", tables()), 13);
  }
}
