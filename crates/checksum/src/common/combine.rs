//! GF(2) matrix operations for CRC-64 combination.
//!
//! Given `crc(A)` and `crc(B)`, `crc(A || B)` is computed without
//! reprocessing `A`, in O(log len(B)) matrix squarings.
//!
//! # Mathematical Background
//!
//! With a zero initial register and no final XOR the CRC is linear over
//! GF(2), and appending `n` bytes to `A` multiplies its register by
//! `x^(8n) mod G(x)`:
//!
//! ```text
//! crc(A || B) = M^len(B) · crc(A) XOR crc(B)
//! ```
//!
//! where `M` is the 64x64 "shift by one zero byte" matrix.

// SAFETY: All array indexing in this module uses bounded loop indices (0..64).
// Clippy cannot prove this in const fn contexts, but the bounds are statically
// guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// A 64x64 GF(2) matrix stored column-wise: entry `i` is the image of bit `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix64([u64; 64]);

impl Gf2Matrix64 {
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u64; 64];
    let mut i = 0;
    while i < 64 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply matrix by a vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u64) -> u64 {
    let mut result = 0u64;
    let mut i = 0;
    while i < 64 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (`self * other`).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u64; 64];
    let mut i = 0;
    while i < 64 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Generate the "shift by 1 bit" matrix for a reflected CRC-64 polynomial.
///
/// One reflected step is `crc >> 1`, XORed with `poly` when the bit shifted
/// out was set: bit 0 maps to `poly`, bit `j` maps to bit `j - 1`.
#[must_use]
pub const fn generate_shift1_matrix_64(poly: u64) -> Gf2Matrix64 {
  let mut m = [0u64; 64];
  m[0] = poly;
  let mut j = 1;
  while j < 64 {
    m[j] = 1 << (j - 1);
    j += 1;
  }
  Gf2Matrix64(m)
}

/// Generate the "shift by 8 bits" (one zero byte) matrix.
#[must_use]
pub const fn generate_shift8_matrix_64(poly: u64) -> Gf2Matrix64 {
  let shift1 = generate_shift1_matrix_64(poly);
  let shift2 = shift1.square();
  let shift4 = shift2.square();

  shift4.square()
}

/// Combine two raw CRC-64 registers.
///
/// # Arguments
///
/// * `crc_a` - CRC of the first part (A), computed from a zero register
/// * `crc_b` - CRC of the second part (B), computed from a zero register
/// * `len_b` - Length of the second part in bytes
/// * `shift8_matrix` - Pre-computed "shift by 8 bits" matrix for the polynomial
#[must_use]
pub const fn combine_crc64(crc_a: u64, crc_b: u64, len_b: usize, shift8_matrix: Gf2Matrix64) -> u64 {
  let mut mat = shift8_matrix;
  let mut result_mat = Gf2Matrix64::identity();
  let mut remaining = len_b;

  // Square-and-multiply: result_mat = shift8^len_b
  while remaining > 0 {
    if remaining & 1 != 0 {
      result_mat = result_mat.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result_mat.mul_vec(crc_a) ^ crc_b
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
