//! Anonymous encryption to a box public key.
//!
//! Lets a caller encrypt to `encryption_public_key` right after `generate`, and
//! decrypt later with the keypair returned by `reconstruct`.
//!
//! # Scheme
//! 1. Ephemeral X25519 keypair `(esk, epk)`.
//! 2. `key = BLAKE3_KDF(context, DH(esk, rpk) ‖ epk ‖ rpk)`
//! 3. `ct = ChaCha20Poly1305(key, nonce = 0, msg)`; the key is single-use.
//! 4. **Format**: `[epk (32)] [ct ‖ tag (16)]`

use alloc::vec::Vec;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use x25519_dalek::PublicKey;
use zeroize::Zeroizing;

use crate::entropy::EntropySource;
use crate::error::{CryptoError, Error};
use crate::protocol::keys::BoxKeyPair;

const KDF_CONTEXT: &str = "spliterati 2026-10 sealed box v1";
const PUBLIC_KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;
const NONCE: [u8; 12] = [0u8; 12];

/// Encrypts `message` so that only the holder of `recipient`'s secret key can read it.
pub fn seal<R: EntropySource + ?Sized>(
    message: &[u8],
    recipient: &PublicKey,
    rng: &mut R,
) -> Result<Vec<u8>, Error> {
    let ephemeral = BoxKeyPair::generate(rng)?;
    let shared = ephemeral.diffie_hellman(recipient);
    if !shared.was_contributory() {
        return Err(CryptoError::SealedBoxSeal.into());
    }

    let key = derive_key(shared.as_bytes(), ephemeral.public_key(), recipient);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&*key));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&NONCE), message)
        .map_err(|_| CryptoError::SealedBoxSeal)?;

    let mut out = Vec::with_capacity(PUBLIC_KEY_LEN + ciphertext.len());
    out.extend_from_slice(ephemeral.public_key().as_bytes());
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypts a box produced by [`seal`].
pub fn open(sealed: &[u8], keypair: &BoxKeyPair) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if sealed.len() < PUBLIC_KEY_LEN + TAG_LEN {
        return Err(CryptoError::SealedBoxOpen);
    }

    let (epk_bytes, ciphertext) = sealed.split_at(PUBLIC_KEY_LEN);
    let mut epk = [0u8; PUBLIC_KEY_LEN];
    epk.copy_from_slice(epk_bytes);
    let ephemeral = PublicKey::from(epk);

    let shared = keypair.diffie_hellman(&ephemeral);
    if !shared.was_contributory() {
        return Err(CryptoError::SealedBoxOpen);
    }

    let key = derive_key(shared.as_bytes(), &ephemeral, keypair.public_key());
    let cipher = ChaCha20Poly1305::new(Key::from_slice(&*key));
    cipher
        .decrypt(Nonce::from_slice(&NONCE), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::SealedBoxOpen)
}

fn derive_key(shared: &[u8; 32], ephemeral: &PublicKey, recipient: &PublicKey) -> Zeroizing<[u8; 32]> {
    let mut hasher = blake3::Hasher::new_derive_key(KDF_CONTEXT);
    hasher.update(shared);
    hasher.update(ephemeral.as_bytes());
    hasher.update(recipient.as_bytes());
    Zeroizing::new(hasher.finalize().into())
}
