//! Per-call options for the signed-shard protocol.

use alloc::vec::Vec;

use crate::error::DomainError;
use crate::shard::KeyId;

/// Options for [`crate::protocol::signed::generate`].
///
/// ```
/// use spliterati::GenerateOptions;
///
/// let opts = GenerateOptions::default()
///     .with_message(b"rotation 2026-10".to_vec())
///     .with_key_id(&[7u8; 16])
///     .unwrap();
/// assert!(opts.message.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Message to sign with the ephemeral signing key; returned as `signed_message`.
    pub message: Option<Vec<u8>>,

    /// Key identifier to stamp on every shard. If `None`, a random one is drawn.
    pub key_id: Option<KeyId>,
}

impl GenerateOptions {
    pub fn with_message(mut self, message: Vec<u8>) -> Self {
        self.message = Some(message);
        self
    }

    /// Sets the key identifier. Fails unless `key_id` is exactly 16 bytes.
    pub fn with_key_id(mut self, key_id: &[u8]) -> Result<Self, DomainError> {
        self.key_id = Some(KeyId::try_from(key_id)?);
        Ok(self)
    }
}
