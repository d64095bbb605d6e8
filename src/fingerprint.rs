//! Snapshot fingerprinting.
//!
//! A fingerprint is the xxh64 digest of a value's JSON serialization,
//! rendered as a fixed-width hex string. Two identical fingerprints mean
//! two queries ran against the same registry snapshot. Hashed values must
//! keep a stable field and element order (BTreeMap, never HashMap) for
//! the digest to be meaningful.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Hex xxh64 digest of the value's JSON form.
///
/// Registry snapshot types always serialize; a failure here is a
/// programming error in the type definitions, not request input.
pub fn fingerprint<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).expect("snapshot serialization failed");
    format!("{:016x}", xxh64(&bytes, 0))
}
