//! # Canonical Serialization — Comparison-Friendly Bytes
//!
//! This module defines `CanonicalBytes`, the sole construction path for bytes
//! used in digest computation across the engine.
//!
//! ## Invariant
//!
//! Two JSON values that express the same constraint must produce identical
//! bytes. The `CanonicalBytes` newtype has a private inner field; the only
//! way to construct it is through `CanonicalBytes::new()`, which applies the
//! normalisation pipeline before JCS serialization:
//!
//! 1. **Integral floats become integers**: `1.0`, `1e0` and `1` all
//!    serialise as `1`. Only values within ±2^53 are converted, which is the
//!    range where the conversion is exact.
//! 2. **Other floats pass through**: `serde_jcs` renders them with the
//!    shortest round-trip representation, so `0.50` and `0.5` agree.
//! 3. **Objects and arrays recurse.**
//!
//! After normalisation, serialization uses `serde_jcs` for RFC 8785 (JSON
//! Canonicalization Scheme) output: sorted keys, compact separators,
//! deterministic byte sequence. Member order in the source document is
//! therefore irrelevant.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::CanonicalizationError;

/// Largest magnitude at which every integral `f64` is exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Bytes produced exclusively by the normalising JCS pipeline.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Integral numbers are rendered as integers regardless of source notation.
/// - Object keys are sorted, separators are compact (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON or JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let normalized = normalize(value);
        let bytes = serialize_canonical(&normalized)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Canonical form as text, `None` if the bytes are not UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively normalise a JSON value.
///
/// Exposed so that digesters can store the same normalised value they will
/// later be keyed by.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => value,
        Value::Number(n) => Value::Number(normalize_number(n)),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize(v)))
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.into_iter().map(normalize).collect()),
    }
}

fn normalize_number(n: Number) -> Number {
    if n.is_i64() || n.is_u64() {
        return n;
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => Number::from(f as i64),
        _ => n,
    }
}

/// Serialize a JSON value in JCS-canonical form (RFC 8785).
fn serialize_canonical(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    let s = serde_jcs::to_string(value)?;
    Ok(s.into_bytes())
}
