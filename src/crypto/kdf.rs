//! Argon2id derivation of the stored key

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::{PassHashError, Result};
use crate::params::HashParams;

/// Argon2 version implemented by the derivation (0x13)
pub const ARGON2_VERSION: u32 = Version::V0x13 as u32;

/// Derives `params.key_length` bytes from `password` and `salt`.
///
/// The salt length recorded in `params` is ignored; the given slice is used.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &HashParams,
) -> Result<Zeroizing<Vec<u8>>> {
    let argon_params = Params::new(
        params.memory_cost_kib,
        params.iterations,
        u32::from(params.parallelism),
        Some(params.key_length as usize),
    )
    .map_err(|e| PassHashError::InvalidParameters(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

    let mut output = Zeroizing::new(vec![0u8; params.key_length as usize]);
    argon2
        .hash_password_into(password, salt, &mut output)
        .map_err(|e| PassHashError::KeyDerivationFailed(e.to_string()))?;

    Ok(output)
}
