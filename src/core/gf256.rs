//! GF(2^8) arithmetic module.
//!
//! Finite field arithmetic over GF(2^8) with the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B), using log/exp tables generated by 0xE5.
//! The tables match the ones used by other deployed implementations of this
//! share format, so shares produced elsewhere combine here and vice versa.
//!
//! # Design Choices
//! - **Static Tables**: `LOG_TABLE` and `EXP_TABLE` are `static` data, immutable for the life
//!   of the process and safe for unsynchronized reads.
//! - **Branch-Free Zero Handling**: 0 has no logarithm. Instead of branching on operand zeroness,
//!   the candidate product is masked with an all-ones/all-zeros byte derived by OR-folding the
//!   operand's bits (see [`zero_if_zero`]).
//! - **Addition**: XOR; the field has characteristic 2.
//!
//! # Usage
//! ```
//! use spliterati::core::gf256::GF256;
//!
//! let a = GF256(0x02);
//! let b = GF256(0x03);
//! assert_eq!(a * b, GF256(0x06));
//! assert_eq!(a + b, GF256(0x01));
//! assert_eq!((a * b).div(b).unwrap(), a);
//! ```

#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, MulAssign};
use zeroize::Zeroize;

use crate::error::DomainError;

/// Number of nonzero field elements; the order of the multiplicative group.
pub const ORDER: usize = 255;

/// Discrete logarithm base 0xE5. Index 0 is a sentinel: 0 has no logarithm.
static LOG_TABLE: [u8; 256] = [
    0x00, 0xff, 0xc8, 0x08, 0x91, 0x10, 0xd0, 0x36,
    0x5a, 0x3e, 0xd8, 0x43, 0x99, 0x77, 0xfe, 0x18,
    0x23, 0x20, 0x07, 0x70, 0xa1, 0x6c, 0x0c, 0x7f,
    0x62, 0x8b, 0x40, 0x46, 0xc7, 0x4b, 0xe0, 0x0e,
    0xeb, 0x16, 0xe8, 0xad, 0xcf, 0xcd, 0x39, 0x53,
    0x6a, 0x27, 0x35, 0x93, 0xd4, 0x4e, 0x48, 0xc3,
    0x2b, 0x79, 0x54, 0x28, 0x09, 0x78, 0x0f, 0x21,
    0x90, 0x87, 0x14, 0x2a, 0xa9, 0x9c, 0xd6, 0x74,
    0xb4, 0x7c, 0xde, 0xed, 0xb1, 0x86, 0x76, 0xa4,
    0x98, 0xe2, 0x96, 0x8f, 0x02, 0x32, 0x1c, 0xc1,
    0x33, 0xee, 0xef, 0x81, 0xfd, 0x30, 0x5c, 0x13,
    0x9d, 0x29, 0x17, 0xc4, 0x11, 0x44, 0x8c, 0x80,
    0xf3, 0x73, 0x42, 0x1e, 0x1d, 0xb5, 0xf0, 0x12,
    0xd1, 0x5b, 0x41, 0xa2, 0xd7, 0x2c, 0xe9, 0xd5,
    0x59, 0xcb, 0x50, 0xa8, 0xdc, 0xfc, 0xf2, 0x56,
    0x72, 0xa6, 0x65, 0x2f, 0x9f, 0x9b, 0x3d, 0xba,
    0x7d, 0xc2, 0x45, 0x82, 0xa7, 0x57, 0xb6, 0xa3,
    0x7a, 0x75, 0x4f, 0xae, 0x3f, 0x37, 0x6d, 0x47,
    0x61, 0xbe, 0xab, 0xd3, 0x5f, 0xb0, 0x58, 0xaf,
    0xca, 0x5e, 0xfa, 0x85, 0xe4, 0x4d, 0x8a, 0x05,
    0xfb, 0x60, 0xb7, 0x7b, 0xb8, 0x26, 0x4a, 0x67,
    0xc6, 0x1a, 0xf8, 0x69, 0x25, 0xb3, 0xdb, 0xbd,
    0x66, 0xdd, 0xf1, 0xd2, 0xdf, 0x03, 0x8d, 0x34,
    0xd9, 0x92, 0x0d, 0x63, 0x55, 0xaa, 0x49, 0xec,
    0xbc, 0x95, 0x3c, 0x84, 0x0b, 0xf5, 0xe6, 0xe7,
    0xe5, 0xac, 0x7e, 0x6e, 0xb9, 0xf9, 0xda, 0x8e,
    0x9a, 0xc9, 0x24, 0xe1, 0x0a, 0x15, 0x6b, 0x3a,
    0xa0, 0x51, 0xf4, 0xea, 0xb2, 0x97, 0x9e, 0x5d,
    0x22, 0x88, 0x94, 0xce, 0x19, 0x01, 0x71, 0x4c,
    0xa5, 0xe3, 0xc5, 0x31, 0xbb, 0xcc, 0x1f, 0x2d,
    0x3b, 0x52, 0x6f, 0xf6, 0x2e, 0x89, 0xf7, 0xc0,
    0x68, 0x1b, 0x64, 0x04, 0x06, 0xbf, 0x83, 0x38,];

/// Powers of 0xE5. `EXP_TABLE[LOG_TABLE[a] % 255] == a` for all nonzero `a`.
static EXP_TABLE: [u8; 256] = [
    0x01, 0xe5, 0x4c, 0xb5, 0xfb, 0x9f, 0xfc, 0x12,
    0x03, 0x34, 0xd4, 0xc4, 0x16, 0xba, 0x1f, 0x36,
    0x05, 0x5c, 0x67, 0x57, 0x3a, 0xd5, 0x21, 0x5a,
    0x0f, 0xe4, 0xa9, 0xf9, 0x4e, 0x64, 0x63, 0xee,
    0x11, 0x37, 0xe0, 0x10, 0xd2, 0xac, 0xa5, 0x29,
    0x33, 0x59, 0x3b, 0x30, 0x6d, 0xef, 0xf4, 0x7b,
    0x55, 0xeb, 0x4d, 0x50, 0xb7, 0x2a, 0x07, 0x8d,
    0xff, 0x26, 0xd7, 0xf0, 0xc2, 0x7e, 0x09, 0x8c,
    0x1a, 0x6a, 0x62, 0x0b, 0x5d, 0x82, 0x1b, 0x8f,
    0x2e, 0xbe, 0xa6, 0x1d, 0xe7, 0x9d, 0x2d, 0x8a,
    0x72, 0xd9, 0xf1, 0x27, 0x32, 0xbc, 0x77, 0x85,
    0x96, 0x70, 0x08, 0x69, 0x56, 0xdf, 0x99, 0x94,
    0xa1, 0x90, 0x18, 0xbb, 0xfa, 0x7a, 0xb0, 0xa7,
    0xf8, 0xab, 0x28, 0xd6, 0x15, 0x8e, 0xcb, 0xf2,
    0x13, 0xe6, 0x78, 0x61, 0x3f, 0x89, 0x46, 0x0d,
    0x35, 0x31, 0x88, 0xa3, 0x41, 0x80, 0xca, 0x17,
    0x5f, 0x53, 0x83, 0xfe, 0xc3, 0x9b, 0x45, 0x39,
    0xe1, 0xf5, 0x9e, 0x19, 0x5e, 0xb6, 0xcf, 0x4b,
    0x38, 0x04, 0xb9, 0x2b, 0xe2, 0xc1, 0x4a, 0xdd,
    0x48, 0x0c, 0xd0, 0x7d, 0x3d, 0x58, 0xde, 0x7c,
    0xd8, 0x14, 0x6b, 0x87, 0x47, 0xe8, 0x79, 0x84,
    0x73, 0x3c, 0xbd, 0x92, 0xc9, 0x23, 0x8b, 0x97,
    0x95, 0x44, 0xdc, 0xad, 0x40, 0x65, 0x86, 0xa2,
    0xa4, 0xcc, 0x7f, 0xec, 0xc0, 0xaf, 0x91, 0xfd,
    0xf7, 0x4f, 0x81, 0x2f, 0x5b, 0xea, 0xa8, 0x1c,
    0x02, 0xd1, 0x98, 0x71, 0xed, 0x25, 0xe3, 0x24,
    0x06, 0x68, 0xb3, 0x93, 0x2c, 0x6f, 0x3e, 0x6c,
    0x0a, 0xb8, 0xce, 0xae, 0x74, 0xb1, 0x42, 0xb4,
    0x1e, 0xd3, 0x49, 0xe9, 0x9c, 0xc8, 0xc6, 0xc7,
    0x22, 0x6e, 0xdb, 0x20, 0xbf, 0x43, 0x51, 0x52,
    0x66, 0xb2, 0x76, 0x60, 0xda, 0xc5, 0xf3, 0xf6,
    0xaa, 0xcd, 0x9a, 0xa0, 0x75, 0x54, 0x0e, 0x01,];

/// The finite field element type, wrapping a u8.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Zeroize)]
#[repr(transparent)]
pub struct GF256(pub u8);

impl From<u8> for GF256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF256(value)
    }
}

impl From<GF256> for u8 {
    #[inline(always)]
    fn from(gf: GF256) -> u8 {
        gf.0
    }
}

/// Returns 0 if `cond == 0`, else `value`, without branching on `cond`.
///
/// Each fold ORs the byte with copies of itself shifted both ways, so after
/// the 4/2/1 rounds every bit holds the OR of all eight input bits. The mask
/// is therefore 0x00 for `cond == 0` and 0xFF otherwise.
#[inline(always)]
pub fn zero_if_zero(cond: u8, value: u8) -> u8 {
    let mut mask = cond;
    mask |= (mask << 4) | (mask >> 4);
    mask |= (mask << 2) | (mask >> 2);
    mask |= (mask << 1) | (mask >> 1);
    mask & value
}

/// Field addition (and subtraction): XOR.
#[inline(always)]
pub fn xor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication via log/exp tables, 0 if either operand is 0.
#[inline(always)]
pub fn mul(a: u8, b: u8) -> u8 {
    let sum = (LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize) % ORDER;
    zero_if_zero(b, zero_if_zero(a, EXP_TABLE[sum]))
}

/// Field division `a / b`.
///
/// # Failure Modes
/// - `b == 0`: `DomainError::DivisionByZero`. `b` is a public x-coordinate
///   difference at every call site, so this check does not branch on secrets.
#[inline(always)]
pub fn div(a: u8, b: u8) -> Result<u8, DomainError> {
    if b == 0 {
        return Err(DomainError::DivisionByZero);
    }
    let diff = (LOG_TABLE[a as usize] as usize + ORDER - LOG_TABLE[b as usize] as usize) % ORDER;
    Ok(zero_if_zero(a, EXP_TABLE[diff]))
}

impl Add for GF256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF256(xor(self.0, rhs.0))
    }
}

impl AddAssign for GF256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for GF256 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        GF256(mul(self.0, rhs.0))
    }
}

impl MulAssign for GF256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    /// Computes `self / rhs`.
    #[inline(always)]
    pub fn div(self, rhs: Self) -> Result<Self, DomainError> {
        div(self.0, rhs.0).map(GF256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-serial multiply mod 0x11B, used as an independent reference for the tables.
    fn mul_reference(a: u8, b: u8) -> u8 {
        let mut result: u8 = 0;
        let mut aa: u16 = a as u16;
        let mut bb: u8 = b;
        for _ in 0..8 {
            if bb & 1 == 1 {
                result ^= aa as u8;
            }
            aa <<= 1;
            if aa & 0x100 != 0 {
                aa ^= 0x11B;
            }
            bb >>= 1;
        }
        result
    }

    #[test]
    fn test_tables_are_inverse() {
        for a in 1..=255u8 {
            let log = LOG_TABLE[a as usize] as usize;
            assert_eq!(EXP_TABLE[log % ORDER], a, "exp[log[{:02x}]] != {:02x}", a, a);
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(GF256(0x01) + GF256(0x01), GF256(0x00));
        assert_eq!(GF256(0x80) + GF256(0x7F), GF256(0xFF));
    }

    #[test]
    fn test_mul() {
        assert_eq!(GF256(0x02) * GF256(0x03), GF256(0x06));
        assert_eq!(GF256(0x02) * GF256(0x1B), GF256(0x36));
        assert_eq!(GF256(0x57) * GF256(0x83), GF256(0xC1));
        assert_eq!(GF256(0x00) * GF256(0xFF), GF256(0x00));
        assert_eq!(GF256(0xFF) * GF256(0x00), GF256(0x00));
        assert_eq!(GF256(0x01) * GF256(0x01), GF256(0x01));
    }

    #[test]
    fn test_mul_matches_reference_exhaustive() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), mul_reference(a, b), "{:02x} * {:02x}", a, b);
            }
        }
    }

    #[test]
    fn test_div() {
        assert_eq!(GF256(0x02).div(GF256(0x02)), Ok(GF256(0x01)));
        assert_eq!(GF256(0x00).div(GF256(0x01)), Ok(GF256(0x00)));
        assert_eq!(GF256(0x01).div(GF256(0x02)), Ok(GF256(0x8D)));
        assert_eq!(GF256(0x03).div(GF256(0x02)), Ok(GF256(0x8C)));
        assert_eq!(GF256(0x02).div(GF256(0x00)), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn test_div_inverts_mul_exhaustive() {
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                assert_eq!(div(mul(a, b), b), Ok(a), "({:02x} * {:02x}) / {:02x}", a, b, b);
            }
        }
    }

    #[test]
    fn test_zero_if_zero() {
        assert_eq!(zero_if_zero(0, 0xAB), 0);
        for cond in 1..=255u8 {
            assert_eq!(zero_if_zero(cond, 0xAB), 0xAB, "cond {:02x}", cond);
        }
    }
}
