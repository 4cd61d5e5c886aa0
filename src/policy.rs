//! Password policy - length rules and the parameter preset for everyday calls

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec;
use crate::error::{PassHashError, Result};
use crate::params::HashParams;
use crate::verify::{self, Verification};

/// Minimum password length in bytes
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Maximum password length in bytes
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length limits plus the preset new hashes are made with.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Inclusive lower bound (bytes)
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Inclusive upper bound (bytes)
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Parameters for new hashes
    #[serde(default)]
    pub params: HashParams,
}

fn default_min_length() -> usize {
    MIN_PASSWORD_LENGTH
}

fn default_max_length() -> usize {
    MAX_PASSWORD_LENGTH
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            params: HashParams::LAMBDA,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize, max_length: usize, params: HashParams) -> Result<Self> {
        let policy = Self {
            min_length,
            max_length,
            params,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Parses and validates a JSON policy; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Loads a JSON policy file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(PassHashError::InvalidPolicy("min_length must be positive".into()));
        }
        if self.min_length > self.max_length {
            return Err(PassHashError::InvalidPolicy(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }
        self.params.validate()
    }

    /// Applies the length rules; both bounds are inclusive.
    pub fn check(&self, password: &str) -> Result<()> {
        let actual = password.len();

        if actual < self.min_length {
            warn!(actual, min = self.min_length, "password too short");
            return Err(PassHashError::PasswordTooShort {
                min: self.min_length,
                actual,
            });
        }

        if actual > self.max_length {
            warn!(actual, max = self.max_length, "password too long");
            return Err(PassHashError::PasswordTooLong {
                max: self.max_length,
                actual,
            });
        }

        Ok(())
    }

    /// Hashes `password` with this policy's preset.
    pub fn hash(&self, password: &str) -> Result<String> {
        self.check(password)?;
        codec::encode(password.as_bytes(), &self.params)
    }

    /// Checks `password` against a stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        self.check(password)?;
        verify::compare_password(password.as_bytes(), hash)
    }

    /// Like [`verify`](Self::verify), returning the stored parameters too.
    /// Use [`Verification::needs_rehash`] against `self.params` to decide
    /// whether to store a fresh hash after a successful login.
    pub fn verify_detailed(&self, password: &str, hash: &str) -> Result<Verification> {
        self.check(password)?;
        verify::compare(password.as_bytes(), hash)
    }
}

/// Hashes `password` under the default policy.
pub fn hash(password: &str) -> Result<String> {
    PasswordPolicy::default().hash(password)
}

/// Verifies `password` against `hash` under the default policy.
pub fn verify(password: &str, hash: &str) -> Result<bool> {
    PasswordPolicy::default().verify(password, hash)
}
