//! Error types.
//!
//! Two kinds of failure matter to callers: `DomainError` for structurally or
//! semantically invalid input, and `CryptoError` for a failed verification step,
//! which may mean tampering. Entropy failures from the random source are carried
//! separately as `Error::Entropy`.

use thiserror::Error;

use crate::entropy::EntropyError;

/// Invalid input supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("division by zero in field")]
    DivisionByZero,
    #[error("xs.length != ys.length")]
    SampleLengthMismatch,
    #[error("threshold must be greater than 1")]
    ThresholdTooLow,
    #[error("threshold greater than shard count")]
    ThresholdExceedsCount,
    #[error("data required for split")]
    EmptySecret,
    #[error("too many shares for this field")]
    TooManyShares,
    #[error("need 2 or more shares")]
    NotEnoughShares,
    #[error("unequal share lengths")]
    UnequalShareLengths,
    #[error("share carries no x-coordinate")]
    EmptyShare,
    #[error("duplicate x values for shares not allowed")]
    DuplicateX,
    #[error("cannot take more elements than there are")]
    TakeExceedsLength,
    #[error("keyID must be {expected} bytes long, got {got}")]
    InvalidKeyIdLength { expected: usize, got: usize },
    #[error("share length too short")]
    ShareTooShort,
    #[error("share invalid -- too short")]
    ShardTooShort,
    #[error("2 or more shards are required for reassembly")]
    NotEnoughShards,
    #[error("insufficient shards for reassembly. {t}..{n} required, got {got}")]
    InsufficientShards { t: u8, n: u8, got: usize },
    #[error("more shards than expected. wanted {t}..{n}, got {got}")]
    TooManyShards { t: u8, n: u8, got: usize },
    #[error("metadata mismatch for shard[{index}]")]
    MetadataMismatch { index: usize },
    #[error("reassembled secret key has length {got}, expected {expected}")]
    InvalidSecretKeyLength { expected: usize, got: usize },
}

/// A cryptographic verification step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("could not verify shard[{index}]")]
    Verification { index: usize },
    #[error("sealed box could not be opened")]
    SealedBoxOpen,
    #[error("sealed box encryption failed")]
    SealedBoxSeal,
}

/// Crate-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("entropy source failure: {0}")]
    Entropy(#[from] EntropyError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
