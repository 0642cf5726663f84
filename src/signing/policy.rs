//! The fixed algorithm policy every identity is generated with.

use pgp::composed::KeyType;
use pgp::crypto::hash::HashAlgorithm;
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::types::CompressionAlgorithm;

/// Primary key algorithm (Ed25519 in its OpenPGP v4 encoding).
pub const KEY_TYPE: KeyType = KeyType::EdDSALegacy;

/// Digest used for self-certifications and detached signatures.
pub const HASH: HashAlgorithm = HashAlgorithm::SHA2_256;

/// Cipher advertised to peers encrypting to this key.
pub const CIPHER: SymmetricKeyAlgorithm = SymmetricKeyAlgorithm::AES256;

pub const COMPRESSION: CompressionAlgorithm = CompressionAlgorithm::ZIP;
