#![cfg_attr(not(feature = "std"), no_std)]

//! Threshold secret splitting over GF(2^8) and a signed-shard protocol that
//! distributes an encryption keypair across `n` custodians.
//!
//! - [`mpc`]: Shamir split/combine on arbitrary-length byte secrets.
//! - [`shard`]: the `key_id ‖ t ‖ n ‖ share` record bound to one split.
//! - [`protocol`]: `generate` / `reconstruct` of signed shards.

extern crate alloc;

pub mod core;
pub mod config;
pub mod entropy;
pub mod error;
pub mod mpc;
pub mod protocol;
pub mod shard;
pub mod util;

pub use config::GenerateOptions;
pub use error::{CryptoError, DomainError, Error};
pub use mpc::{combine, split, share::Share};
pub use protocol::signed::{generate, reconstruct, Reconstructed, ThresholdBundle};
pub use shard::{KeyId, Shard};
