use std::io::Read;

use pgp::composed::{
    Deserializable, Message, SignedPublicKey, SignedSecretKey, StandaloneSignature,
};
use tracing::trace;

use super::armor::{self, SIGNATURE_BLOCK};
use super::policy::HASH;
use crate::crypto::random::{RandomSource, seeded_rng};
use crate::error::{CryptoError, Result};

/// Produce an armored detached signature over everything `reader` yields.
pub(crate) fn sign<R: Read>(
    key: &SignedSecretKey,
    mut reader: R,
    rng: &impl RandomSource,
) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut rng = seeded_rng(rng)?;
    let message = Message::new_literal_bytes("", &data)
        .sign(&mut rng, key, String::new, HASH)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    trace!(bytes = data.len(), "created detached signature");

    message
        .into_signature()
        .to_armored_bytes(Default::default())
        .map_err(|e| CryptoError::Serialization(e.to_string()))
}

/// Verify an armored detached signature over everything `reader` yields.
pub(crate) fn verify<R: Read>(key: &SignedPublicKey, mut reader: R, armored: &[u8]) -> Result<()> {
    let signature = decode(armored)?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    signature
        .verify(key, &data)
        .map_err(|_| CryptoError::VerificationFailed)
}

/// The one signature packet of a single SIGNATURE block.
fn decode(armored: &[u8]) -> Result<StandaloneSignature> {
    let block = armor::single(armored, SIGNATURE_BLOCK).map_err(CryptoError::MalformedSignature)?;

    let (signatures, _) =
        StandaloneSignature::from_armor_many(block.text).map_err(|e| malformed(e.to_string()))?;
    let signatures = signatures
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| malformed(e.to_string()))?;

    <[StandaloneSignature; 1]>::try_from(signatures)
        .map(|[signature]| signature)
        .map_err(|found| {
            malformed(format!(
                "expected one signature packet, found {}",
                found.len()
            ))
        })
}

fn malformed(reason: impl Into<String>) -> CryptoError {
    CryptoError::MalformedSignature(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::Identity;

    #[test]
    fn decodes_own_signature() {
        let id = Identity::create("name", "", "name@example.org").unwrap();
        let armored = id.sign(&b"payload"[..]).unwrap();
        assert!(armored.starts_with(b"-----BEGIN PGP SIGNATURE-----"));
        decode(&armored).unwrap();
    }

    #[test]
    fn rejects_key_blocks() {
        let id = Identity::create("name", "", "name@example.org").unwrap();
        assert!(matches!(
            decode(&id.serialize_public().unwrap()),
            Err(CryptoError::MalformedSignature(_))
        ));
    }

    #[test]
    fn rejects_two_blocks() {
        let id = Identity::create("name", "", "name@example.org").unwrap();
        let mut armored = id.sign(&b"payload"[..]).unwrap();
        armored.extend(id.sign(&b"payload"[..]).unwrap());
        assert!(matches!(
            decode(&armored),
            Err(CryptoError::MalformedSignature(_))
        ));
    }

    #[test]
    fn rejects_empty_block() {
        let empty = b"-----BEGIN PGP SIGNATURE-----\n\n-----END PGP SIGNATURE-----\n";
        assert!(matches!(
            decode(empty),
            Err(CryptoError::MalformedSignature(_))
        ));
    }
}
