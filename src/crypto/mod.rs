//! Crypto module - salt source, Argon2id derivation, constant-time comparison

mod ct;
mod entropy;
mod kdf;

pub use ct::keys_match;
pub use entropy::{generate_salt, EntropySource, OsEntropy};
pub use kdf::{derive_key, ARGON2_VERSION};

/// Derived key buffer, wiped on drop
pub type DerivedKey = zeroize::Zeroizing<Vec<u8>>;
