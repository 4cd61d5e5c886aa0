//! Public contract of the hash string format and the password policy

use std::collections::HashSet;
use std::thread;

use rand::distributions::Alphanumeric;
use rand::Rng;

use alfa_passhash::{
    compare, compare_password, decode, encode, hash, verify, HashParams, PassHashError,
    PasswordPolicy, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

const FIXTURE_PASSWORD: &str = "bug";
const FIXTURE_HASH: &str =
    "$argon2id$v=19$m=65536,t=1,p=2$UDk0zEuIzbt0x3bwkf8Bgw$ihSfHWUJpTgDvNWiojrgcN4E0pJdUVmqCEdRZesx9tE";

const CHEAP: HashParams = HashParams::new(64, 1, 1, 16, 32);

fn random_password(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn cheap_policy() -> PasswordPolicy {
    PasswordPolicy::new(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, CHEAP).unwrap()
}

#[test]
fn fixture_hash_verifies() {
    let result = compare(FIXTURE_PASSWORD.as_bytes(), FIXTURE_HASH).unwrap();
    assert!(result.matched);
    assert_eq!(result.params, HashParams::INTERACTIVE);

    assert!(!compare_password(b"bag", FIXTURE_HASH).unwrap());
}

#[test]
fn fixture_with_altered_last_char_never_matches() {
    let stem = &FIXTURE_HASH[..FIXTURE_HASH.len() - 1];

    for last in ['F', 'A', 'U', 'k', '0'] {
        let tampered = format!("{}{}", stem, last);
        match compare_password(FIXTURE_PASSWORD.as_bytes(), &tampered) {
            Ok(matched) => assert!(!matched, "{}", tampered),
            Err(e) => assert!(matches!(e, PassHashError::Encoding(_)), "{}: {}", tampered, e),
        }
    }

    // The altered symbol sets an unused bit, so strict decoding refuses it
    let tampered = format!("{}F", stem);
    assert!(matches!(
        compare_password(FIXTURE_PASSWORD.as_bytes(), &tampered),
        Err(PassHashError::Encoding(_))
    ));
}

#[test]
fn default_policy_hash_format() {
    let password = random_password(MAX_PASSWORD_LENGTH);
    let stored = hash(&password).unwrap();

    let fields: Vec<&str> = stored.split('$').collect();
    assert_eq!(&fields[..4], &["", "argon2id", "v=19", "m=65536,t=15,p=4"]);
    // 64-byte salt, 512-byte key
    assert_eq!(fields[4].len(), 86);
    assert_eq!(fields[5].len(), 683);

    assert_eq!(decode(&stored).unwrap().params, HashParams::LAMBDA);
    assert!(verify(&password, &stored).unwrap());
}

#[test]
fn roundtrip_random_passwords() {
    let policy = cheap_policy();

    for len in [MIN_PASSWORD_LENGTH, 40, MAX_PASSWORD_LENGTH] {
        let password = random_password(len);
        let stored = policy.hash(&password).unwrap();

        assert_eq!(decode(&stored).unwrap().params, CHEAP);
        assert!(policy.verify(&password, &stored).unwrap());

        let last = if password.ends_with('x') { 'y' } else { 'x' };
        let other = format!("{}{}", &password[..len - 1], last);
        assert!(!policy.verify(&other, &stored).unwrap());
    }
}

#[test]
fn same_password_never_repeats_a_hash() {
    let password = random_password(24);
    let hashes: HashSet<String> = (0..64).map(|_| encode(password.as_bytes(), &CHEAP).unwrap()).collect();
    assert_eq!(hashes.len(), 64);
}

#[test]
fn wrong_variant_is_reported_by_every_entry_point() {
    let foreign = "$argon2i$v=19$m=65536,t=1,p=2$mFe3kxhovyEByvwnUtr0ow$nU9AqnoPfzMOQhCHa9BDrQ+4bSfj69jgtvGu/2McCxU";
    let policy = cheap_policy();

    assert!(matches!(compare(b"pa$$word", foreign), Err(PassHashError::UnsupportedVariant(_))));
    assert!(matches!(compare_password(b"pa$$word", foreign), Err(PassHashError::UnsupportedVariant(_))));

    let err = policy.verify("long enough password", foreign).unwrap_err();
    assert!(err.is_decode_error());
    assert!(matches!(err, PassHashError::UnsupportedVariant(v) if v == "argon2i"));
}

#[test]
fn length_boundaries() {
    let policy = cheap_policy();

    let at_min = random_password(MIN_PASSWORD_LENGTH);
    let below_min = random_password(MIN_PASSWORD_LENGTH - 1);
    let at_max = random_password(MAX_PASSWORD_LENGTH);
    let above_max = random_password(MAX_PASSWORD_LENGTH + 1);

    assert!(policy.hash(&at_min).is_ok());
    assert!(policy.hash(&at_max).is_ok());
    assert!(matches!(policy.hash(&below_min), Err(PassHashError::PasswordTooShort { .. })));
    assert!(matches!(policy.hash(&above_max), Err(PassHashError::PasswordTooLong { .. })));

    let stored = policy.hash(&at_min).unwrap();
    assert!(matches!(policy.verify(&below_min, &stored), Err(PassHashError::PasswordTooShort { .. })));
    assert!(matches!(policy.verify(&above_max, &stored), Err(PassHashError::PasswordTooLong { .. })));
}

#[test]
fn parallel_callers_share_one_policy() {
    let policy = cheap_policy();
    let password = random_password(20);

    let hashes: Vec<String> = thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|_| s.spawn(|| policy.hash(&password).unwrap()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let unique: HashSet<&String> = hashes.iter().collect();
    assert_eq!(unique.len(), hashes.len());

    for stored in &hashes {
        assert!(policy.verify(&password, stored).unwrap());
    }
}
