//! # ALFA_PASSHASH
//!
//! Argon2id password hashing for storage and login checks.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► PasswordPolicy (length rules, preset)
//!               │                         │
//!             hash                      verify
//!               ▼                         ▼
//!        codec::encode              codec::decode ──► verify::compare
//!     salt ◄─ EntropySource        (no derivation      │
//!     key  ◄─ Argon2id              on bad input)      ▼
//!               │                              Argon2id + constant-time eq
//!               ▼
//!   $argon2id$v=19$m=65536,t=15,p=4$<salt>$<key>
//! ```
//!
//! ## Security Model
//!
//! - Fresh CSPRNG salt for every hash
//! - Strict decoding: wrong variant, version or encoding fails before any derivation
//! - Key comparison via `subtle`, no early exit
//! - Derived keys zeroized after use
//! - A wrong password is `Ok(false)`, never an error
//!
//! ```no_run
//! use alfa_passhash::PasswordPolicy;
//!
//! let policy = PasswordPolicy::default();
//! let stored = policy.hash("correct horse battery")?;
//! assert!(policy.verify("correct horse battery", &stored)?);
//! # Ok::<(), alfa_passhash::PassHashError>(())
//! ```

pub mod codec;
pub mod crypto;
pub mod error;
pub mod params;
pub mod policy;
pub mod verify;
pub mod worker;

// Re-exports
pub use codec::{decode, encode, encode_with, DecodedHash, ALGORITHM_TAG};
pub use crypto::{EntropySource, OsEntropy, ARGON2_VERSION};
pub use error::{PassHashError, Result};
pub use params::HashParams;
pub use policy::{hash, verify, PasswordPolicy, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use verify::{compare, compare_password, Verification};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// System name
pub const SYSTEM_NAME: &str = "ALFA_PASSHASH";
