//! Signed shards.
//!
//! `generate` creates an ephemeral Ed25519 signing key and an X25519 box keypair,
//! splits the box secret key t-of-n, and signs every packed shard (and an
//! optional message) with the signing key. The signing secret never leaves the
//! call. `reconstruct` verifies every shard against the signing public key,
//! checks that all of them carry the same metadata, and recombines the box keypair.
//!
//! # Security
//! - **Tamper Evidence**: any modified byte of a signed shard fails verification
//!   with `CryptoError`, before its contents are parsed.
//! - **Mixing Detection**: shards that verify but disagree on key id, `t` or `n`
//!   fail with `DomainError::MetadataMismatch` before anything is combined.
//! - **Trusted Bounds**: the `t..=n` bound on the input batch uses the values
//!   reported by shard 0. It checks self-consistency with the dealer's stated
//!   parameters, not that `t` shares are cryptographically required.

use alloc::vec::Vec;
use ed25519_dalek::{SigningKey, VerifyingKey};
use x25519_dalek::PublicKey;

use crate::config::GenerateOptions;
use crate::entropy::EntropySource;
use crate::error::{CryptoError, DomainError, Error};
use crate::mpc::{combine, share::Share, split};
use crate::protocol::keys::{self, BoxKeyPair};
use crate::shard::{KeyId, Shard};

/// Output of [`generate`]. Owns everything; nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct ThresholdBundle {
    pub signing_public_key: VerifyingKey,
    pub encryption_public_key: PublicKey,
    pub key_id: KeyId,
    /// `n` signed shards, each `signature ‖ key_id ‖ t ‖ n ‖ share`.
    pub shards: Vec<Vec<u8>>,
    /// `signature ‖ message`, if a message was supplied.
    pub signed_message: Option<Vec<u8>>,
}

/// Output of [`reconstruct`].
#[derive(Debug, Clone)]
pub struct Reconstructed {
    pub key_id: KeyId,
    pub encryption_key_pair: BoxKeyPair,
}

/// Generates a keypair, splits its secret key t-of-n and signs the shards.
///
/// # Failure Modes
/// - invalid `t`/`n` (see [`crate::mpc::split`]): `Error::Domain`
/// - entropy source failure: `Error::Entropy`
pub fn generate<R: EntropySource + ?Sized>(
    t: u8,
    n: u8,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<ThresholdBundle, Error> {
    let signing_key = keys::generate_signing_key(rng)?;
    let encryption_keys = BoxKeyPair::generate(rng)?;

    let key_id = match options.key_id {
        Some(id) => id,
        None => KeyId::random(rng)?,
    };

    let shares = split(&*encryption_keys.secret_key_bytes(), n, t, rng)?;
    let shards = sign_shares(&signing_key, key_id, t, n, &shares)?;

    let signed_message = options
        .message
        .as_deref()
        .map(|message| keys::sign(message, &signing_key));

    log::debug!(
        "generated {}-of-{} shards for key {} (signed message: {})",
        t,
        n,
        key_id,
        signed_message.is_some()
    );

    Ok(ThresholdBundle {
        signing_public_key: signing_key.verifying_key(),
        encryption_public_key: *encryption_keys.public_key(),
        key_id,
        shards,
        signed_message,
    })
}

/// Wraps each raw share in a [`Shard`], packs it and signs it.
pub fn sign_shares(
    signing_key: &SigningKey,
    key_id: KeyId,
    t: u8,
    n: u8,
    shares: &[Share],
) -> Result<Vec<Vec<u8>>, DomainError> {
    shares
        .iter()
        .map(|share| {
            let shard = Shard::new(key_id, t, n, share.as_bytes().to_vec())?;
            Ok(keys::sign(&shard.pack(), signing_key))
        })
        .collect()
}

/// Verifies and unpacks one signed shard.
fn open_shard(signed: &[u8], key: &VerifyingKey, index: usize) -> Result<Shard, Error> {
    let Some(payload) = keys::open(signed, key) else {
        log::warn!("signature verification failed for shard[{}]", index);
        return Err(CryptoError::Verification { index }.into());
    };
    Ok(Shard::unpack(payload)?)
}

/// Recovers the box keypair from `t..=n` signed shards.
///
/// # Failure Modes
/// - fewer than 2 shards: `NotEnoughShards`
/// - a shard fails verification: `CryptoError::Verification`
/// - more shards than shard 0's `n`, or fewer than its `t`: `TooManyShards` / `InsufficientShards`
/// - a shard's metadata differs from shard 0's: `MetadataMismatch`
pub fn reconstruct<S: AsRef<[u8]>>(
    signing_public_key: &VerifyingKey,
    shards: &[S],
) -> Result<Reconstructed, Error> {
    if shards.len() < 2 {
        return Err(DomainError::NotEnoughShards.into());
    }

    let first = open_shard(shards[0].as_ref(), signing_public_key, 0)?;
    if shards.len() < first.t() as usize {
        return Err(DomainError::InsufficientShards { t: first.t(), n: first.n(), got: shards.len() }.into());
    }
    if shards.len() > first.n() as usize {
        return Err(DomainError::TooManyShards { t: first.t(), n: first.n(), got: shards.len() }.into());
    }

    let mut verified = Vec::with_capacity(shards.len());
    for (index, signed) in shards.iter().enumerate().skip(1) {
        let shard = open_shard(signed.as_ref(), signing_public_key, index)?;
        if !first.metadata_eq(&shard) {
            log::warn!("metadata mismatch for shard[{}] against key {}", index, first.key_id());
            return Err(DomainError::MetadataMismatch { index }.into());
        }
        verified.push(shard);
    }

    let shares: Vec<&[u8]> = core::iter::once(first.share())
        .chain(verified.iter().map(Shard::share))
        .collect();
    let secret = combine(&shares)?;
    let encryption_key_pair = BoxKeyPair::from_secret_key(&secret)?;

    log::debug!("reconstructed key {} from {} shards", first.key_id(), shards.len());

    Ok(Reconstructed {
        key_id: *first.key_id(),
        encryption_key_pair,
    })
}
