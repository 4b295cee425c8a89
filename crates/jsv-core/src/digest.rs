//! # Content Digest — Cache Keys for Constraint Values
//!
//! A [`ContentDigest`] is the fixed-size fingerprint of a [`CanonicalBytes`]
//! sequence. The validator cache keys on `(keyword, ContentDigest)`, so two
//! constraint values that canonicalise identically share one validator.
//!
//! `sha256_digest()` accepts only `&CanonicalBytes`, not raw `&[u8]`: no
//! code path can fingerprint a non-canonical rendering of a value.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// SHA-256 fingerprint of canonical bytes.
///
/// Only [`sha256_digest()`] produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}
