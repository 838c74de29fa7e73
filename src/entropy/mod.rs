//! Entropy sources.
//!
//! Every random draw in the crate (polynomial coefficients, x-coordinate
//! selection, key generation) goes through an [`EntropySource`], so tests can
//! substitute a deterministic source and embedders can supply their own CSPRNG.
//!
//! # Design
//! - **Caller-Owned**: sources are passed by `&mut`, never stored in globals.
//! - **Fail Loudly**: a source that cannot deliver returns `EntropyError`; nothing
//!   falls back to weaker randomness.

#[cfg(feature = "std")]
pub mod os;

#[cfg(feature = "std")]
pub use os::OsEntropy;

use thiserror::Error;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// Failed to collect sufficient entropy bytes.
    #[error("failed to collect entropy")]
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    #[error("entropy source exhausted")]
    Exhausted,
    /// A bounded draw was requested with an empty range.
    #[error("cannot draw from an empty range")]
    EmptyRange,
}

/// A trait for cryptographically secure entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with uniformly distributed random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Draws a uniformly distributed integer in `[0, bound)`.
///
/// Uses rejection sampling on 32-bit draws: values at or above the largest
/// multiple of `bound` are discarded, so every residue is equally likely.
pub fn uniform_below<R: EntropySource + ?Sized>(rng: &mut R, bound: u32) -> Result<u32, EntropyError> {
    if bound == 0 {
        return Err(EntropyError::EmptyRange);
    }
    let zone = u32::MAX - (u32::MAX % bound);
    let mut buf = [0u8; 4];
    loop {
        rng.fill(&mut buf)?;
        let v = u32::from_le_bytes(buf);
        if v < zone {
            return Ok(v % bound);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use alloc::vec::Vec;

    use super::{EntropyError, EntropySource};

    /// Deterministic counter source for reproducible tests.
    pub struct MockEntropy {
        pub fill_val: u8,
    }

    impl EntropySource for MockEntropy {
        fn name(&self) -> &'static str {
            "Mock"
        }

        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            for b in dest.iter_mut() {
                *b = self.fill_val;
                self.fill_val = self.fill_val.wrapping_add(1);
            }
            Ok(())
        }
    }

    /// Replays a fixed byte sequence, then reports exhaustion.
    pub struct ScriptedEntropy {
        pub bytes: Vec<u8>,
    }

    impl EntropySource for ScriptedEntropy {
        fn name(&self) -> &'static str {
            "Scripted"
        }

        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            if self.bytes.len() < dest.len() {
                return Err(EntropyError::Exhausted);
            }
            let drained: Vec<u8> = self.bytes.drain(0..dest.len()).collect();
            dest.copy_from_slice(&drained);
            Ok(())
        }
    }
}
