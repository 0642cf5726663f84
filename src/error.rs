use thiserror::Error;

/// Errors returned by every keysmith operation.
///
/// Nothing is recovered internally: each failure is handed back to the
/// caller with no partial output.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("secure random generator unavailable: {0}")]
    Randomness(String),

    #[error("malformed scrypt config: expected {expected} bytes, got {actual}")]
    MalformedConfig { expected: usize, actual: usize },

    #[error("malformed public key: {0}")]
    MalformedPublicKey(String),

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("malformed identity: {0}")]
    MalformedIdentity(String),

    #[error("ciphertext too short: need at least {minimum} bytes, got {actual}")]
    TooShort { minimum: usize, actual: usize },

    /// Tampered data, wrong key and wrong password all end up here.
    #[error("invalid password or corrupted data")]
    AuthenticationFailed,

    #[error("key derivation failed: {0}")]
    Derivation(String),

    #[error("only key rings holding exactly one identity are supported (found {0})")]
    MultipleIdentitiesUnsupported(usize),

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("encryption failed")]
    Encryption,

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_does_not_leak_detail_on_auth_failure() {
        assert_eq!(
            CryptoError::AuthenticationFailed.to_string(),
            "invalid password or corrupted data"
        );
    }

    #[test]
    fn display_includes_lengths() {
        let e = CryptoError::TooShort {
            minimum: 72,
            actual: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("72"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let e: CryptoError = io.into();
        assert!(matches!(e, CryptoError::Io(_)));
    }
}
