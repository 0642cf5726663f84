//! Password envelope.
//!
//! Layout:
//! ```text
//! SALT (32) | NONCE (24) | CIPHERTEXT | TAG (16)
//! ```

use zeroize::Zeroizing;

use super::aead::{self, MIN_ENVELOPE_LEN};
use super::random::{OsRandom, RandomSource, generate_salt};
use super::{SALT_LEN, ScryptConfig};
use crate::error::{CryptoError, Result};

/// Smallest well-formed password envelope.
pub const MIN_PASSWORD_ENVELOPE_LEN: usize = SALT_LEN + MIN_ENVELOPE_LEN;

/// Encrypts with a key derived from a password under a fixed [`ScryptConfig`].
///
/// A wrong password is reported as [`CryptoError::AuthenticationFailed`],
/// indistinguishable from tampered ciphertext.
#[derive(Debug, Clone)]
pub struct PasswordBox<R = OsRandom> {
    config: ScryptConfig,
    rng: R,
}

impl PasswordBox<OsRandom> {
    pub fn new(config: ScryptConfig) -> Self {
        Self {
            config,
            rng: OsRandom,
        }
    }
}

impl<R: RandomSource> PasswordBox<R> {
    pub fn with_rng(config: ScryptConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &ScryptConfig {
        &self.config
    }

    pub fn encrypt(&self, password: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        let salt = generate_salt(&self.rng)?;
        let key = self.config.derive(&salt, password)?;
        let sealed = aead::seal(&self.rng, &key, plaintext)?;

        let mut out = Vec::with_capacity(SALT_LEN + sealed.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    pub fn decrypt(&self, password: &str, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if data.len() < MIN_PASSWORD_ENVELOPE_LEN {
            return Err(CryptoError::TooShort {
                minimum: MIN_PASSWORD_ENVELOPE_LEN,
                actual: data.len(),
            });
        }

        let (salt, envelope) = data.split_at(SALT_LEN);
        let key = self.config.derive(salt, password)?;
        aead::open(&key, envelope)
    }
}
