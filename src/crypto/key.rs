use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_LEN;
use crate::error::{CryptoError, Result};

/// 256-bit symmetric key.
///
/// Overwritten with zeroes when dropped. Deliberately neither `Clone` nor
/// a `Debug` that prints key bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Copies `bytes` into a new key. Fails unless exactly [`KEY_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LEN {
            return Err(CryptoError::Derivation(format!(
                "derived key has wrong length: expected {KEY_LEN}, got {}",
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}
