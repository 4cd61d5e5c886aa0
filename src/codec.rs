//! Hash codec - the `$argon2id$v=19$m=..,t=..,p=..$salt$key` string format
//!
//! ```text
//! $argon2id$v=19$m=65536,t=15,p=4$<base64 salt>$<base64 key>
//!  │        │    │                │              └ derived key
//!  │        │    │                └ random salt
//!  │        │    └ memory (KiB), iterations, parallelism
//!  │        └ Argon2 version
//!  └ variant
//! ```
//!
//! Salt and key use the standard base64 alphabet without padding and are
//! decoded strictly (non-zero trailing bits are rejected).

use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD_NO_PAD as B64, Engine as _};
use tracing::debug;

use crate::crypto::{derive_key, generate_salt, DerivedKey, EntropySource, OsEntropy, ARGON2_VERSION};
use crate::error::{PassHashError, Result};
use crate::params::HashParams;

/// Variant tag of every hash this crate produces
pub const ALGORITHM_TAG: &str = "argon2id";

/// Number of `$`-separated fields, including the empty leading one
const FIELD_COUNT: usize = 6;

/// Parts recovered from an encoded hash
#[derive(Debug, Clone)]
pub struct DecodedHash {
    /// Parameters; `salt_length`/`key_length` are the decoded byte lengths
    pub params: HashParams,
    pub salt: Vec<u8>,
    pub key: DerivedKey,
}

/// Hashes `password` with a fresh salt from the OS CSPRNG.
pub fn encode(password: &[u8], params: &HashParams) -> Result<String> {
    encode_with(&OsEntropy, password, params)
}

/// Hashes `password` drawing the salt from `source`.
pub fn encode_with<S: EntropySource + ?Sized>(
    source: &S,
    password: &[u8],
    params: &HashParams,
) -> Result<String> {
    params.validate()?;

    let salt = generate_salt(source, params.salt_length)?;
    let key = derive_key(password, &salt, params)?;

    debug!(
        memory_cost_kib = params.memory_cost_kib,
        iterations = params.iterations,
        parallelism = params.parallelism,
        salt_length = params.salt_length,
        key_length = params.key_length,
        "encoded argon2id hash"
    );

    Ok(format!(
        "${}$v={}$m={},t={},p={}${}${}",
        ALGORITHM_TAG,
        ARGON2_VERSION,
        params.memory_cost_kib,
        params.iterations,
        params.parallelism,
        B64.encode(&salt),
        B64.encode(key.as_slice()),
    ))
}

/// Parses an encoded hash. No derivation work happens here.
pub fn decode(hash: &str) -> Result<DecodedHash> {
    let fields: Vec<&str> = hash.split('$').collect();
    if fields.len() != FIELD_COUNT {
        return Err(PassHashError::MalformedHash(format!(
            "expected {} '$'-separated fields, got {}",
            FIELD_COUNT,
            fields.len()
        )));
    }
    if !fields[0].is_empty() {
        return Err(PassHashError::MalformedHash("hash must start with '$'".into()));
    }

    if fields[1] != ALGORITHM_TAG {
        return Err(PassHashError::UnsupportedVariant(fields[1].to_string()));
    }

    let version: u32 = parse_tagged(fields[2], "v=")?;
    if version != ARGON2_VERSION {
        return Err(PassHashError::VersionMismatch {
            expected: ARGON2_VERSION,
            got: version,
        });
    }

    let (memory_cost_kib, iterations, parallelism) = parse_cost(fields[3])?;

    let salt = B64.decode(fields[4])?;
    let key = DerivedKey::new(B64.decode(fields[5])?);

    let params = HashParams {
        memory_cost_kib,
        iterations,
        parallelism,
        salt_length: salt.len() as u32,
        key_length: key.len() as u32,
    };
    params
        .validate()
        .map_err(|e| PassHashError::ParameterParse(e.to_string()))?;

    Ok(DecodedHash { params, salt, key })
}

/// `m=<u32>,t=<u32>,p=<u8>`, in exactly that order
fn parse_cost(field: &str) -> Result<(u32, u32, u8)> {
    let parts: Vec<&str> = field.split(',').collect();
    if parts.len() != 3 {
        return Err(PassHashError::ParameterParse(format!(
            "expected m=<int>,t=<int>,p=<int>, got {:?}",
            field
        )));
    }

    Ok((
        parse_tagged(parts[0], "m=")?,
        parse_tagged(parts[1], "t=")?,
        parse_tagged(parts[2], "p=")?,
    ))
}

/// Parses `<tag><digits>`; signs, whitespace and empty numbers are rejected.
fn parse_tagged<T: FromStr>(field: &str, tag: &str) -> Result<T> {
    let invalid = || PassHashError::ParameterParse(format!("expected {}<int>, got {:?}", tag, field));

    let digits = field.strip_prefix(tag).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}
