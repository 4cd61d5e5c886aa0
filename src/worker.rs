//! Worker offload - runs derivations on the tokio blocking pool
//!
//! Argon2id exposes no interruption point. A deadline here only stops the
//! caller from waiting; the derivation itself runs to completion on its
//! blocking thread.

use std::sync::Arc;
use std::time::Duration;

use tokio::task;
use tracing::warn;
use zeroize::Zeroizing;

use crate::error::{PassHashError, Result};
use crate::policy::PasswordPolicy;

/// [`PasswordPolicy::hash`] on the blocking pool.
pub async fn hash_blocking(policy: Arc<PasswordPolicy>, password: String) -> Result<String> {
    let password = Zeroizing::new(password);
    task::spawn_blocking(move || policy.hash(&password))
        .await
        .map_err(|e| PassHashError::Worker(e.to_string()))?
}

/// [`PasswordPolicy::verify`] on the blocking pool.
pub async fn verify_blocking(
    policy: Arc<PasswordPolicy>,
    password: String,
    hash: String,
) -> Result<bool> {
    let password = Zeroizing::new(password);
    task::spawn_blocking(move || policy.verify(&password, &hash))
        .await
        .map_err(|e| PassHashError::Worker(e.to_string()))?
}

/// [`verify_blocking`] that gives up waiting after `deadline`.
pub async fn verify_with_deadline(
    policy: Arc<PasswordPolicy>,
    password: String,
    hash: String,
    deadline: Duration,
) -> Result<bool> {
    match tokio::time::timeout(deadline, verify_blocking(policy, password, hash)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(?deadline, "verification deadline exceeded");
            Err(PassHashError::DeadlineExceeded(deadline))
        }
    }
}
