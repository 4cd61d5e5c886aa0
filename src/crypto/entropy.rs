//! Salt source - CSPRNG bytes for every hash

use crate::error::{PassHashError, Result};

/// Supplier of cryptographically-secure random bytes
pub trait EntropySource {
    /// Fills `dest` completely or fails.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Operating system CSPRNG (`getrandom`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| PassHashError::EntropySource(e.to_string()))
    }
}

/// Draws a fresh salt of `len` bytes.
pub fn generate_salt<S: EntropySource + ?Sized>(source: &S, len: u32) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len as usize];
    source.fill(&mut salt)?;
    Ok(salt)
}
