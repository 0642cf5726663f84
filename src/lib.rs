//! Password-based authenticated encryption and self-signed signing
//! identities.
//!
//! - [`PasswordBox`]: `salt || nonce || ciphertext || tag`, keyed by scrypt
//! - [`SecretBox`]: `nonce || ciphertext || tag` under a raw 32-byte key
//! - [`Identity`] / [`PublicKey`]: armored OpenPGP keys with one user id,
//!   producing and checking detached signatures

pub mod crypto;
mod error;
pub mod signing;

pub use crate::crypto::{
    OsRandom, PasswordBox, RandomSource, ScryptConfig, SecretBox, SymmetricKey, generate_nonce,
    generate_salt,
};
pub use crate::error::{CryptoError, Result};
pub use crate::signing::{Identity, PublicKey, UserId};
