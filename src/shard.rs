//! Shard record: a share plus the threshold metadata that binds it to one split.
//!
//! # Format
//! `key_id (16) ‖ t (1) ‖ n (1) ‖ share (≥ 2)`
//!
//! The key identifier lets `reconstruct` reject shards from different splits,
//! which `combine` on its own cannot detect.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::ct::bytes_eq;
use crate::entropy::{EntropyError, EntropySource};
use crate::error::DomainError;
use crate::util::Slicer;

/// Length of a key identifier in bytes.
pub const KEY_ID_LEN: usize = 16;

/// Shortest share a shard may carry: one y-value and the x-coordinate.
pub const MIN_SHARE_LEN: usize = 2;

/// Identifier binding the shards of one key-splitting operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId([u8; KEY_ID_LEN]);

impl KeyId {
    pub const fn from_bytes(bytes: [u8; KEY_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn random<R: EntropySource + ?Sized>(rng: &mut R) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; KEY_ID_LEN];
        rng.fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_ID_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for KeyId {
    type Error = DomainError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; KEY_ID_LEN] = bytes.try_into().map_err(|_| DomainError::InvalidKeyIdLength {
            expected: KEY_ID_LEN,
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for KeyId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self)
    }
}

/// A share with its threshold metadata.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Shard {
    #[zeroize(skip)]
    key_id: KeyId,
    #[zeroize(skip)]
    t: u8,
    #[zeroize(skip)]
    n: u8,
    share: Vec<u8>,
}

impl fmt::Debug for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shard")
            .field("key_id", &self.key_id)
            .field("t", &self.t)
            .field("n", &self.n)
            .field("share_len", &self.share.len())
            .field("share", &"***SENSITIVE***")
            .finish()
    }
}

impl Shard {
    /// Builds a shard. `share` must hold at least [`MIN_SHARE_LEN`] bytes.
    ///
    /// `t` and `n` are recorded as given; their relationship is enforced by
    /// `split` on the way in and by `reconstruct` on the way out.
    pub fn new(key_id: KeyId, t: u8, n: u8, share: Vec<u8>) -> Result<Self, DomainError> {
        if share.len() < MIN_SHARE_LEN {
            return Err(DomainError::ShareTooShort);
        }
        Ok(Self { key_id, t, n, share })
    }

    pub fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    pub fn t(&self) -> u8 {
        self.t
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn share(&self) -> &[u8] {
        &self.share
    }

    /// Serializes to `key_id ‖ t ‖ n ‖ share`.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(KEY_ID_LEN + 2 + self.share.len());
        out.extend_from_slice(self.key_id.as_bytes());
        out.push(self.t);
        out.push(self.n);
        out.extend_from_slice(&self.share);
        out
    }

    /// Parses a packed shard.
    ///
    /// # Failure Modes
    /// - fewer than 18 bytes: `ShardTooShort`
    /// - a share shorter than [`MIN_SHARE_LEN`]: `ShareTooShort`
    pub fn unpack(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < KEY_ID_LEN + 2 {
            return Err(DomainError::ShardTooShort);
        }

        let mut slicer = Slicer::new(bytes);
        let key_id = KeyId::try_from(slicer.take(KEY_ID_LEN).ok_or(DomainError::ShardTooShort)?)?;
        let t = slicer.take_one().ok_or(DomainError::ShardTooShort)?;
        let n = slicer.take_one().ok_or(DomainError::ShardTooShort)?;
        Self::new(key_id, t, n, slicer.rest().to_vec())
    }

    /// True iff both shards claim the same `t`, `n` and key identifier.
    /// The identifier is compared in constant time.
    pub fn metadata_eq(&self, other: &Shard) -> bool {
        // Evaluate every comparison; no short-circuit on the public fields either.
        let same_counts = (self.n == other.n) & (self.t == other.t);
        let same_id = bytes_eq(self.key_id.as_bytes(), other.key_id.as_bytes());
        same_counts & same_id
    }
}
