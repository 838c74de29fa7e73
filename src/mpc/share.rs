//! Secret Share Definition.
//!
//! A share is stored in its wire form: the y-values of every per-byte polynomial
//! followed by the shared x-coordinate, `y[0..len(secret)] ‖ x`.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe sensitive data from memory.
//! - `Debug` implementation redacts the y-values.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One share of a split secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    bytes: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x())
            .field("length", &self.bytes.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Wraps a share in wire form. No validation happens here; `combine`
    /// checks lengths and x-uniqueness across the whole set.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The x-coordinate (last byte), or `None` for an empty buffer.
    pub fn x(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    /// The y-values, one per secret byte.
    pub fn y_values(&self) -> &[u8] {
        match self.bytes.split_last() {
            Some((_, ys)) => ys,
            None => &[],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Share {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Share {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_layout() {
        let s = Share::from_bytes(alloc::vec![10, 20, 7]);
        assert_eq!(s.x(), Some(7));
        assert_eq!(s.y_values(), &[10, 20]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_empty_share() {
        let s = Share::from_bytes(alloc::vec![]);
        assert_eq!(s.x(), None);
        assert!(s.y_values().is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn test_debug_redaction() {
        let mut bytes = alloc::vec![0xFF; 32];
        bytes.push(5);
        let s = Share::from_bytes(bytes);
        let debug_str = alloc::format!("{:?}", s);
        assert!(debug_str.contains("x: Some(5)"));
        assert!(debug_str.contains("length: 33"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("255"));
    }
}
