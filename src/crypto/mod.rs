//! Symmetric primitives.
//!
//! Provides randomness, scrypt key derivation, the nonce-prefixed
//! authenticated envelope and the salt-prefixed password envelope.

pub mod aead;
pub mod kdf;
pub mod key;
pub mod password;
pub mod random;

pub use aead::SecretBox;
pub use kdf::ScryptConfig;
pub use key::SymmetricKey;
pub use password::PasswordBox;
pub use random::{OsRandom, RandomSource, generate_nonce, generate_salt};

/// Length of the salt (32 bytes).
pub const SALT_LEN: usize = 32;
/// Length of the nonce (24 bytes for XChaCha20-Poly1305).
pub const NONCE_LEN: usize = 24;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the Poly1305 authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
/// Length of an encoded scrypt config (3 x u64).
pub const CONFIG_LEN: usize = 24;
