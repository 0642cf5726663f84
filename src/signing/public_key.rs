use std::io::Read;

use pgp::composed::{Deserializable, SignedPublicKey};

use super::armor::{self, PUBLIC_KEY_BLOCK};
use super::signature;
use crate::error::{CryptoError, Result};

/// Verify-only key loaded from an exported PUBLIC KEY block.
#[derive(Debug, Clone)]
pub struct PublicKey {
    key: SignedPublicKey,
    user_id: Option<String>,
}

impl PublicKey {
    pub(crate) fn from_parts(key: SignedPublicKey, user_id: Option<String>) -> Self {
        Self { key, user_id }
    }

    /// Load a single armored PUBLIC KEY block holding exactly one key.
    ///
    /// The key's self-signatures must verify.
    pub fn load(data: &[u8]) -> Result<Self> {
        let block = armor::single(data, PUBLIC_KEY_BLOCK).map_err(malformed)?;

        let (keys, _) =
            SignedPublicKey::from_armor_many(block.text).map_err(|e| malformed(e.to_string()))?;
        let keys = keys
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| malformed(e.to_string()))?;
        let [key] = <[SignedPublicKey; 1]>::try_from(keys)
            .map_err(|keys| malformed(format!("expected one key, found {}", keys.len())))?;

        key.verify()
            .map_err(|e| malformed(format!("self-signature does not verify: {e}")))?;
        let user_id = key.details.users.first().map(|user| user.id.id().to_string());

        Ok(Self::from_parts(key, user_id))
    }

    pub fn verify<R: Read>(&self, reader: R, signature: &[u8]) -> Result<()> {
        signature::verify(&self.key, reader, signature)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

fn malformed(reason: impl Into<String>) -> CryptoError {
    CryptoError::MalformedPublicKey(reason.into())
}
