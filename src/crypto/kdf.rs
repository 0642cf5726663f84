use std::fmt;
use std::time::Instant;

use scrypt::Params;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::random::{OsRandom, RandomSource, generate_salt};
use super::{CONFIG_LEN, KEY_LEN, SymmetricKey};
use crate::error::{CryptoError, Result};

/// Password used when measuring how long a derivation takes.
const SELFTEST_PASSWORD: &str = "selftest";

/// scrypt cost parameters.
///
/// Decoding never validates; bad parameters surface as
/// [`CryptoError::Derivation`] on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScryptConfig {
    /// CPU/memory cost, a power of two
    n: u64,
    /// block size
    r: u64,
    /// parallelism
    p: u64,
}

impl Default for ScryptConfig {
    fn default() -> Self {
        Self::LOW
    }
}

impl ScryptConfig {
    /// About 32MB of RAM, well under a second.
    pub const REALTIME: Self = Self::new(1 << 15, 8, 1);
    /// About 128MB of RAM, roughly a second.
    pub const LOW: Self = Self::new(1 << 17, 8, 1);
    /// About 256MB of RAM, a few seconds.
    pub const MID: Self = Self::new(1 << 18, 8, 1);
    /// About 512MB of RAM, a few seconds.
    pub const HIGH: Self = Self::new(1 << 19, 8, 1);
    /// About 1GB of RAM, around five seconds.
    pub const PARANOID: Self = Self::new(1 << 20, 8, 1);

    pub const fn new(n: u64, r: u64, p: u64) -> Self {
        Self { n, r, p }
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn r(&self) -> u64 {
        self.r
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || self.r == 0 || self.p == 0 {
            return Err(CryptoError::Derivation(
                "scrypt parameters must all be greater than zero".into(),
            ));
        }
        if !self.n.is_power_of_two() {
            return Err(CryptoError::Derivation(format!(
                "scrypt cost N={} is not a power of two",
                self.n
            )));
        }
        Ok(())
    }

    fn params(&self) -> Result<Params> {
        self.validate()?;

        let log_n = self.n.trailing_zeros() as u8;
        let r = u32::try_from(self.r)
            .map_err(|_| CryptoError::Derivation(format!("scrypt R={} out of range", self.r)))?;
        let p = u32::try_from(self.p)
            .map_err(|_| CryptoError::Derivation(format!("scrypt P={} out of range", self.p)))?;

        Params::new(log_n, r, p, KEY_LEN)
            .map_err(|e| CryptoError::Derivation(format!("invalid scrypt parameters: {e}")))
    }

    /// Derive a 32-byte key from `password` and `salt`.
    ///
    /// The intermediate output buffer is zeroed once copied into the key.
    pub fn derive(&self, salt: &[u8], password: &str) -> Result<SymmetricKey> {
        let params = self.params()?;

        let mut raw = Zeroizing::new(vec![0u8; KEY_LEN]);
        scrypt::scrypt(password.as_bytes(), salt, &params, raw.as_mut_slice())
            .map_err(|e| CryptoError::Derivation(format!("scrypt failed: {e}")))?;

        SymmetricKey::from_slice(&raw)
    }

    /// Fixed-width encoding: N, R, P as little-endian u64.
    pub fn encode(&self) -> [u8; CONFIG_LEN] {
        let mut buf = [0u8; CONFIG_LEN];
        buf[0..8].copy_from_slice(&self.n.to_le_bytes());
        buf[8..16].copy_from_slice(&self.r.to_le_bytes());
        buf[16..24].copy_from_slice(&self.p.to_le_bytes());
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let data: &[u8; CONFIG_LEN] = data.try_into().map_err(|_| CryptoError::MalformedConfig {
            expected: CONFIG_LEN,
            actual: data.len(),
        })?;

        let mut field = [0u8; 8];
        field.copy_from_slice(&data[0..8]);
        let n = u64::from_le_bytes(field);
        field.copy_from_slice(&data[8..16]);
        let r = u64::from_le_bytes(field);
        field.copy_from_slice(&data[16..24]);
        let p = u64::from_le_bytes(field);

        Ok(Self { n, r, p })
    }

    /// Rough memory estimate (N * R * 128 bytes) in whole megabytes.
    pub fn memory_required_mb(&self) -> u64 {
        self.n.saturating_mul(self.r).saturating_mul(128) / 1024 / 1024
    }

    /// Run one real derivation and report how long it took.
    pub fn time_required_ms(&self) -> Result<u64> {
        self.time_required_ms_with(&OsRandom)
    }

    pub fn time_required_ms_with(&self, rng: &impl RandomSource) -> Result<u64> {
        let start = Instant::now();
        let salt = generate_salt(rng)?;
        self.derive(&salt, SELFTEST_PASSWORD)?;
        let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            n = self.n,
            r = self.r,
            p = self.p,
            elapsed_ms = elapsed,
            "scrypt calibration finished"
        );
        Ok(elapsed)
    }
}

impl fmt::Display for ScryptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={} R={} P={} ({}MB required)",
            self.n,
            self.r,
            self.p,
            self.memory_required_mb()
        )
    }
}
