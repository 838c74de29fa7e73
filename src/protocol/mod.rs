//! Protocol Layer.
//!
//! Distributes an encryption keypair across `n` custodians as signed shards:
//! - `keys`: Ed25519 signing and X25519 box-key adapter
//! - `signed`: `generate` / `reconstruct`
//! - `sealed_box`: encrypting to the distributed public key

pub mod keys;
pub mod sealed_box;
pub mod signed;
