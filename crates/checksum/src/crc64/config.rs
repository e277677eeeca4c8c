//! CRC-64 runtime configuration (kernel overrides).
//!
//! This module centralizes the CRC-64 selection knob so:
//! - Benchmarks/tests can force a specific kernel
//! - Introspection can report the active configuration without allocation
//!
//! Every kernel is portable and produces bit-identical state, so any request
//! can be honored as-is.

use core::{fmt, str::FromStr};

/// Environment variable consulted (once per process) for a forced kernel.
#[cfg(feature = "std")]
pub const FORCE_ENV: &str = "FASTCRC64_FORCE";

/// Forced kernel selection for CRC-64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc64Force {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the slice-by-8 table kernel.
  Slice8,
  /// Force the single-table, byte-at-a-time kernel.
  Bytewise,
  /// Force the bitwise reference implementation (slowest, table-free).
  Reference,
}

impl Crc64Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Slice8 => "slice8",
      Self::Bytewise => "bytewise",
      Self::Reference => "reference",
    }
  }
}

impl fmt::Display for Crc64Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a string does not name a [`Crc64Force`] mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseForceError;

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC-64 force mode (expected auto, slice8, bytewise or reference)")
  }
}

impl core::error::Error for ParseForceError {}

impl FromStr for Crc64Force {
  type Err = ParseForceError;

  /// Parse a force mode, ignoring surrounding whitespace and ASCII case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();

    if value.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    if value.eq_ignore_ascii_case("slice8")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("table")
    {
      return Ok(Self::Slice8);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("byte") {
      return Ok(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Ok(Self::Reference);
    }

    Err(ParseForceError)
  }
}

/// Full CRC-64 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc64Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Crc64Force,
  /// Force mode the selector acts on.
  pub effective_force: Crc64Force,
}

#[cfg(feature = "std")]
fn read_env_force() -> Crc64Force {
  let Ok(value) = std::env::var(FORCE_ENV) else {
    return Crc64Force::Auto;
  };
  value.parse().unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> Crc64Force {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Crc64Force> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Crc64Force {
  Crc64Force::Auto
}

/// Compute the effective CRC-64 config for a requested force mode.
#[inline]
#[must_use]
pub const fn config(requested_force: Crc64Force) -> Crc64Config {
  Crc64Config {
    requested_force,
    effective_force: requested_force,
  }
}

/// Cached process-wide CRC-64 configuration.
///
/// The `FASTCRC64_FORCE` environment variable is read once, on first use, and
/// is expected to be set before process start. Unrecognized values fall back
/// to [`Crc64Force::Auto`].
#[inline]
#[must_use]
pub fn get() -> Crc64Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc64Config> = OnceLock::new();
    *CACHED.get_or_init(|| config(requested_force()))
  }

  #[cfg(not(feature = "std"))]
  {
    config(requested_force())
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn parse_canonical_names() {
    for force in [Crc64Force::Auto, Crc64Force::Slice8, Crc64Force::Bytewise, Crc64Force::Reference] {
      assert_eq!(force.as_str().parse::<Crc64Force>(), Ok(force));
    }
  }

  #[test]
  fn parse_aliases_and_case() {
    assert_eq!("portable".parse(), Ok(Crc64Force::Slice8));
    assert_eq!("TABLE".parse(), Ok(Crc64Force::Slice8));
    assert_eq!("  byte\n".parse(), Ok(Crc64Force::Bytewise));
    assert_eq!("Bitwise".parse(), Ok(Crc64Force::Reference));
    assert_eq!("AUTO".parse(), Ok(Crc64Force::Auto));
  }

  #[test]
  fn parse_rejects_unknown() {
    assert_eq!("".parse::<Crc64Force>(), Err(ParseForceError));
    assert_eq!("pclmul".parse::<Crc64Force>(), Err(ParseForceError));
    assert_eq!("slice 8".parse::<Crc64Force>(), Err(ParseForceError));
  }

  #[test]
  fn config_passes_force_through() {
    let cfg = config(Crc64Force::Bytewise);
    assert_eq!(cfg.requested_force, Crc64Force::Bytewise);
    assert_eq!(cfg.effective_force, Crc64Force::Bytewise);
    assert_eq!(config(Crc64Force::Auto), Crc64Config::default());
  }

  #[test]
  #[cfg(feature = "std")]
  fn env_override_name() {
    assert_eq!(FORCE_ENV, "FASTCRC64_FORCE");
  }

  #[test]
  fn cached_config_is_stable() {
    assert_eq!(get(), get());
  }

  #[test]
  fn display_matches_as_str() {
    assert_eq!(Crc64Force::Reference.to_string(), "reference");
    assert!(!ParseForceError.to_string().is_empty());
  }
}
