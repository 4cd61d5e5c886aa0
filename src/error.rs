//! ALFA_PASSHASH - Error Types

use thiserror::Error;

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, PassHashError>;

/// Password hashing error types
///
/// A password that simply does not match a stored hash is never an error;
/// verification returns `Ok(false)` for that case.
#[derive(Debug, Error)]
pub enum PassHashError {
    // ═══════════════════════════════════════════════════════════════
    // DECODE ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Invalid hash format: {0}")]
    MalformedHash(String),

    #[error("Unsupported Argon2 variant: {0}")]
    UnsupportedVariant(String),

    #[error("Argon2 version mismatch: expected {expected}, got {got}")]
    VersionMismatch { expected: u32, got: u32 },

    #[error("Invalid hash parameters: {0}")]
    ParameterParse(String),

    #[error("Invalid base64 in hash: {0}")]
    Encoding(#[from] base64::DecodeError),

    // ═══════════════════════════════════════════════════════════════
    // CRYPTO ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Entropy source failed: {0}")]
    EntropySource(String),

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParameters(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // ═══════════════════════════════════════════════════════════════
    // POLICY ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Password is too short: {actual} bytes (min: {min})")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("Password is too long: {actual} bytes (max: {max})")]
    PasswordTooLong { max: usize, actual: usize },

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    // ═══════════════════════════════════════════════════════════════
    // RUNTIME / CONFIG ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(std::time::Duration),

    #[error("Worker failed: {0}")]
    Worker(String),

    #[error("Invalid config JSON: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PassHashError {
    /// True when the stored hash is corrupt or belongs to another scheme.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHash(_)
                | Self::UnsupportedVariant(_)
                | Self::VersionMismatch { .. }
                | Self::ParameterParse(_)
                | Self::Encoding(_)
        )
    }

    /// True when the candidate password broke the length rules.
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            Self::PasswordTooShort { .. } | Self::PasswordTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(PassHashError::MalformedHash("3 fields".into()).is_decode_error());
        assert!(PassHashError::UnsupportedVariant("argon2i".into()).is_decode_error());
        assert!(!PassHashError::EntropySource("empty".into()).is_decode_error());

        let short = PassHashError::PasswordTooShort { min: 12, actual: 3 };
        assert!(short.is_policy_violation());
        assert!(!short.is_decode_error());
    }

    #[test]
    fn test_version_mismatch_message() {
        let err = PassHashError::VersionMismatch { expected: 19, got: 16 };
        assert_eq!(err.to_string(), "Argon2 version mismatch: expected 19, got 16");
    }
}
