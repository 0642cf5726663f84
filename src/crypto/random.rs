use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use zeroize::Zeroizing;

use super::{NONCE_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};

/// A cryptographically secure source of random bytes.
///
/// Implementations must fill the whole buffer or fail; a short read is an
/// error, never retried.
pub trait RandomSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| CryptoError::Randomness(e.to_string()))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// Generate a fresh salt
pub fn generate_salt(rng: &impl RandomSource) -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)?;
    Ok(salt)
}

/// Generate a fresh nonce
pub fn generate_nonce(rng: &impl RandomSource) -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill(&mut nonce)?;
    Ok(nonce)
}

/// A CSPRNG for libraries that want a `rand` generator, keyed entirely
/// from `source`.
pub(crate) fn seeded_rng(source: &impl RandomSource) -> Result<StdRng> {
    let mut seed = Zeroizing::new([0u8; 32]);
    source.fill(seed.as_mut_slice())?;
    Ok(StdRng::from_seed(*seed))
}
