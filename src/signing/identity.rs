use std::io::Read;

use pgp::composed::{Deserializable, SecretKeyParamsBuilder, SignedPublicKey, SignedSecretKey};
use pgp::types::SecretKeyTrait;
use tracing::debug;
use zeroize::Zeroizing;

use super::armor::{self, PRIVATE_KEY_BLOCK};
use super::policy::{CIPHER, COMPRESSION, HASH, KEY_TYPE};
use super::{PublicKey, UserId, signature};
use crate::crypto::random::{OsRandom, RandomSource, seeded_rng};
use crate::error::{CryptoError, Result};

/// An OpenPGP signing key with exactly one self-certified user id.
pub struct Identity {
    secret: SignedSecretKey,
    public: SignedPublicKey,
    user_id: String,
}

impl Identity {
    /// Generate a fresh key and self-certify `name (comment) <email>`.
    pub fn create(name: &str, comment: &str, email: &str) -> Result<Self> {
        Self::create_with_rng(name, comment, email, &OsRandom)
    }

    pub fn create_with_rng(
        name: &str,
        comment: &str,
        email: &str,
        rng: &impl RandomSource,
    ) -> Result<Self> {
        let user_id = UserId::new(name, comment, email)?.to_string();

        let params = SecretKeyParamsBuilder::default()
            .key_type(KEY_TYPE)
            .can_certify(true)
            .can_sign(true)
            .primary_user_id(user_id.clone())
            .passphrase(None)
            .preferred_symmetric_algorithms(vec![CIPHER].into())
            .preferred_hash_algorithms(vec![HASH].into())
            .preferred_compression_algorithms(vec![COMPRESSION].into())
            .build()
            .map_err(|e| CryptoError::Signing(e.to_string()))?;

        let mut csprng = seeded_rng(rng)?;
        let key = params.generate(&mut csprng).map_err(signing)?;
        let secret = key.sign(&mut csprng, String::new).map_err(signing)?;
        let public = public_half(&secret, rng)?;

        debug!(user_id = %user_id, "generated identity");

        Ok(Self {
            secret,
            public,
            user_id,
        })
    }

    /// Load an armored private key ring holding exactly one identity.
    ///
    /// Every PRIVATE KEY block in `data` is read; other blocks hold no
    /// identity and are not counted.
    pub fn load(data: &[u8]) -> Result<Self> {
        let blocks = armor::blocks(data).map_err(malformed)?;

        let mut keys = Vec::new();
        for block in blocks.iter().filter(|b| b.label == PRIVATE_KEY_BLOCK) {
            let (parsed, _) = SignedSecretKey::from_armor_many(block.text)
                .map_err(|e| malformed(e.to_string()))?;
            for key in parsed {
                keys.push(key.map_err(|e| malformed(e.to_string()))?);
            }
        }

        debug!(blocks = blocks.len(), entities = keys.len(), "parsed private key ring");
        let [secret] = <[SignedSecretKey; 1]>::try_from(keys)
            .map_err(|keys| CryptoError::MultipleIdentitiesUnsupported(keys.len()))?;

        Self::from_secret(secret)
    }

    fn from_secret(secret: SignedSecretKey) -> Result<Self> {
        secret
            .verify()
            .map_err(|e| malformed(format!("self-signature does not verify: {e}")))?;

        let user_id = match secret.details.users.as_slice() {
            [user] => user.id.id().to_string(),
            users => {
                return Err(malformed(format!(
                    "expected one user id, found {}",
                    users.len()
                )));
            }
        };
        let public = public_half(&secret, &OsRandom)?;

        Ok(Self {
            secret,
            public,
            user_id,
        })
    }

    /// Armored PRIVATE KEY block. Contains the unprotected secret key.
    pub fn serialize_private(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.secret
            .to_armored_bytes(Default::default())
            .map(Zeroizing::new)
            .map_err(|e| CryptoError::Serialization(e.to_string()))
    }

    /// Armored PUBLIC KEY block, loadable with [`PublicKey::load`].
    pub fn serialize_public(&self) -> Result<Vec<u8>> {
        self.public
            .to_armored_bytes(Default::default())
            .map_err(|e| CryptoError::Serialization(e.to_string()))
    }

    /// Armored detached signature over the whole stream.
    pub fn sign<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        signature::sign(&self.secret, reader, &OsRandom)
    }

    pub fn verify<R: Read>(&self, reader: R, signature: &[u8]) -> Result<()> {
        signature::verify(&self.public, reader, signature)
    }

    /// Verify-only half of this identity.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_parts(self.public.clone(), Some(self.user_id.clone()))
    }

    /// The certified user id, rendered as `name (comment) <email>`.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// The public key with its user id, certified by `secret`.
fn public_half(secret: &SignedSecretKey, rng: &impl RandomSource) -> Result<SignedPublicKey> {
    let mut csprng = seeded_rng(rng)?;
    secret
        .public_key()
        .sign(&mut csprng, secret, String::new)
        .map_err(signing)
}

fn signing(e: pgp::errors::Error) -> CryptoError {
    CryptoError::Signing(e.to_string())
}

fn malformed(reason: impl Into<String>) -> CryptoError {
    CryptoError::MalformedIdentity(reason.into())
}
