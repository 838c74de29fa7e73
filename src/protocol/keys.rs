//! Adapter over the signing and key-exchange primitives.
//!
//! - Signing: Ed25519 (`ed25519-dalek`). A signed message is framed as
//!   `signature (64) ‖ message`, the same layout as NaCl `crypto_sign`.
//! - Box keys: X25519 (`x25519-dalek`). The 32-byte secret key is the value that
//!   gets split; its public key is recomputed from it on reconstruction.
//!
//! Secret key types zeroize themselves on drop.

use alloc::vec::Vec;
use core::fmt;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey, SIGNATURE_LENGTH};
use x25519_dalek::{PublicKey, SharedSecret, StaticSecret};
use zeroize::Zeroizing;

use crate::entropy::{EntropyError, EntropySource};
use crate::error::DomainError;

/// Length of a box secret key.
pub const BOX_SECRET_KEY_LEN: usize = 32;

/// Generates a fresh Ed25519 signing key from the entropy source.
pub fn generate_signing_key<R: EntropySource + ?Sized>(rng: &mut R) -> Result<SigningKey, EntropyError> {
    let mut seed = Zeroizing::new([0u8; 32]);
    rng.fill(&mut *seed)?;
    Ok(SigningKey::from_bytes(&seed))
}

/// Signs `message`, returning `signature ‖ message`.
pub fn sign(message: &[u8], key: &SigningKey) -> Vec<u8> {
    let signature: Signature = key.sign(message);
    let mut out = Vec::with_capacity(SIGNATURE_LENGTH + message.len());
    out.extend_from_slice(&signature.to_bytes());
    out.extend_from_slice(message);
    out
}

/// Verifies a `signature ‖ message` blob and returns the message.
///
/// `None` on a short blob, a malformed signature, or a verification failure.
/// Verification is strict: small-order keys and non-canonical signatures are rejected.
pub fn open<'a>(signed: &'a [u8], key: &VerifyingKey) -> Option<&'a [u8]> {
    if signed.len() < SIGNATURE_LENGTH {
        return None;
    }
    let (sig_bytes, message) = signed.split_at(SIGNATURE_LENGTH);
    let signature = Signature::from_slice(sig_bytes).ok()?;
    key.verify_strict(message, &signature).ok()?;
    Some(message)
}

/// An X25519 keypair used for encryption to the split key.
#[derive(Clone)]
pub struct BoxKeyPair {
    public: PublicKey,
    secret: StaticSecret,
}

impl fmt::Debug for BoxKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxKeyPair")
            .field("public", &hex::encode(self.public.as_bytes()))
            .field("secret", &"***SENSITIVE***")
            .finish()
    }
}

impl BoxKeyPair {
    pub fn generate<R: EntropySource + ?Sized>(rng: &mut R) -> Result<Self, EntropyError> {
        let mut bytes = Zeroizing::new([0u8; BOX_SECRET_KEY_LEN]);
        rng.fill(&mut *bytes)?;
        let secret = StaticSecret::from(*bytes);
        let public = PublicKey::from(&secret);
        Ok(Self { public, secret })
    }

    /// Rebuilds the keypair from a raw secret key.
    pub fn from_secret_key(secret_key: &[u8]) -> Result<Self, DomainError> {
        let bytes: Zeroizing<[u8; BOX_SECRET_KEY_LEN]> = Zeroizing::new(secret_key.try_into().map_err(|_| {
            DomainError::InvalidSecretKeyLength {
                expected: BOX_SECRET_KEY_LEN,
                got: secret_key.len(),
            }
        })?);
        let secret = StaticSecret::from(*bytes);
        let public = PublicKey::from(&secret);
        Ok(Self { public, secret })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The raw 32-byte secret key.
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; BOX_SECRET_KEY_LEN]> {
        Zeroizing::new(self.secret.to_bytes())
    }

    pub(crate) fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        self.secret.diffie_hellman(their_public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::testing::MockEntropy;
    use crate::entropy::OsEntropy;

    #[test]
    fn test_sign_open() {
        let mut rng = OsEntropy::new();
        let key = generate_signing_key(&mut rng).unwrap();
        let signed = sign(b"payload", &key);
        assert_eq!(signed.len(), SIGNATURE_LENGTH + 7);
        assert_eq!(open(&signed, &key.verifying_key()), Some(&b"payload"[..]));
    }

    #[test]
    fn test_open_rejects_wrong_key() {
        let mut rng = OsEntropy::new();
        let key = generate_signing_key(&mut rng).unwrap();
        let other = generate_signing_key(&mut rng).unwrap();
        let signed = sign(b"payload", &key);
        assert_eq!(open(&signed, &other.verifying_key()), None);
    }

    #[test]
    fn test_open_rejects_short_input() {
        let mut rng = OsEntropy::new();
        let key = generate_signing_key(&mut rng).unwrap();
        assert_eq!(open(&[0u8; SIGNATURE_LENGTH - 1], &key.verifying_key()), None);
    }

    #[test]
    fn test_box_keypair_roundtrip() {
        let mut rng = MockEntropy { fill_val: 0x20 };
        let kp = BoxKeyPair::generate(&mut rng).unwrap();
        let restored = BoxKeyPair::from_secret_key(&*kp.secret_key_bytes()).unwrap();
        assert_eq!(restored.public_key().as_bytes(), kp.public_key().as_bytes());
    }

    #[test]
    fn test_box_keypair_length_checked() {
        assert_eq!(
            BoxKeyPair::from_secret_key(&[0u8; 31]).unwrap_err(),
            DomainError::InvalidSecretKeyLength { expected: 32, got: 31 }
        );
    }

    #[test]
    fn test_box_keypair_debug_redaction() {
        let mut rng = MockEntropy { fill_val: 0x20 };
        let kp = BoxKeyPair::generate(&mut rng).unwrap();
        let debug_str = alloc::format!("{:?}", kp);
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains(&hex::encode(*kp.secret_key_bytes())));
    }
}
