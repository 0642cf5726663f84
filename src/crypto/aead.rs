//! Nonce-prefixed authenticated envelope.
//!
//! Layout:
//! ```text
//! NONCE (24) | CIPHERTEXT | TAG (16)
//! ```

use chacha20poly1305::{
    Key, XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroizing;

use super::random::{OsRandom, RandomSource, generate_nonce};
use super::{NONCE_LEN, SymmetricKey, TAG_LEN};
use crate::error::{CryptoError, Result};

/// Smallest well-formed envelope: a nonce and an empty message's tag.
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

/// Seals and opens envelopes under a raw 32-byte key.
///
/// Every call to [`SecretBox::encrypt`] draws a fresh nonce from the
/// configured random source.
#[derive(Debug, Clone, Default)]
pub struct SecretBox<R = OsRandom> {
    rng: R,
}

impl SecretBox<OsRandom> {
    pub fn new() -> Self {
        Self { rng: OsRandom }
    }
}

impl<R: RandomSource> SecretBox<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Encrypt plaintext, returning `nonce || ciphertext || tag`.
    pub fn encrypt(&self, key: &SymmetricKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        seal(&self.rng, key, plaintext)
    }

    /// Decrypt an envelope produced by [`SecretBox::encrypt`].
    pub fn decrypt(&self, key: &SymmetricKey, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        open(key, envelope)
    }
}

pub(crate) fn seal(
    rng: &impl RandomSource,
    key: &SymmetricKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let nonce = generate_nonce(rng)?;

    let ciphertext = cipher
        .encrypt(XNonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::Encryption)?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

pub(crate) fn open(key: &SymmetricKey, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if envelope.len() < MIN_ENVELOPE_LEN {
        return Err(CryptoError::TooShort {
            minimum: MIN_ENVELOPE_LEN,
            actual: envelope.len(),
        });
    }

    let (nonce, sealed) = envelope.split_at(NONCE_LEN);
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), sealed)
        .map_err(|_| CryptoError::AuthenticationFailed)?;
    Ok(Zeroizing::new(plaintext))
}
