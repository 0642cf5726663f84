//! Self-signed OpenPGP identities and detached signatures.
//!
//! An [`Identity`] owns a signing key and one certified [`UserId`]. Its
//! exported [`PublicKey`] verifies signatures without any secret material.

mod armor;
mod identity;
pub mod policy;
mod public_key;
mod signature;
mod user_id;

pub use identity::Identity;
pub use public_key::PublicKey;
pub use user_id::UserId;
