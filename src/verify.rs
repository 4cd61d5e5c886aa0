//! Verifier - re-derives and compares in constant time

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::decode;
use crate::crypto::{derive_key, keys_match};
use crate::error::Result;
use crate::params::HashParams;

/// Outcome of a successful verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub matched: bool,
    /// Parameters the stored hash was produced with
    pub params: HashParams,
}

impl Verification {
    /// True when the stored hash should be replaced by one made with `target`.
    pub fn needs_rehash(&self, target: &HashParams) -> bool {
        self.params != *target
    }
}

/// Checks `password` against `hash` and also returns the parameters the hash
/// was created with, so callers can upgrade stored hashes over time.
///
/// A wrong password is `Ok` with `matched == false`. Errors mean the hash could
/// not be decoded or the derivation itself failed.
pub fn compare(password: &[u8], hash: &str) -> Result<Verification> {
    let decoded = decode(hash).map_err(|e| {
        warn!(error = %e, "rejected stored hash");
        e
    })?;

    let candidate = derive_key(password, &decoded.salt, &decoded.params)?;
    let matched = keys_match(&decoded.key, &candidate);

    debug!(
        matched,
        memory_cost_kib = decoded.params.memory_cost_kib,
        iterations = decoded.params.iterations,
        parallelism = decoded.params.parallelism,
        "verified argon2id hash"
    );

    Ok(Verification {
        matched,
        params: decoded.params,
    })
}

/// Like [`compare`], without the parameters.
pub fn compare_password(password: &[u8], hash: &str) -> Result<bool> {
    compare(password, hash).map(|v| v.matched)
}
