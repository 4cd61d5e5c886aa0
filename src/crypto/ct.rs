//! Constant-time key comparison

use subtle::ConstantTimeEq;

/// Compares two derived keys without early exit.
///
/// The only branch taken depends on whether the lengths are equal; where the
/// bytes differ never affects timing.
pub fn keys_match(stored: &[u8], candidate: &[u8]) -> bool {
    let stored_len = stored.len() as u64;
    let candidate_len = candidate.len() as u64;

    if !bool::from(stored_len.ct_eq(&candidate_len)) {
        return false;
    }

    bool::from(stored.ct_eq(candidate))
}
