//! Digesting: the canonical form of the constraint a keyword imposes.
//!
//! A digester sees the whole enclosing schema object, so a keyword whose
//! meaning depends on a sibling can fold that sibling into its digest. The
//! contract every digester must uphold: two schemas that produce equal
//! digests must validate every instance identically.

use jsv_core::canonical::normalize;
use jsv_core::{sha256_digest, CanonicalBytes, ContentDigest, NodeType};
use serde_json::{Map, Value};

use crate::error::DigestError;

/// Produces the digest value of a keyword.
pub trait Digester: Send + Sync {
    /// Digest `keyword` as it appears in `schema`.
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError>;
}

/// The keyword's own value.
pub fn keyword_value<'a>(
    keyword: &str,
    schema: &'a Map<String, Value>,
) -> Result<&'a Value, DigestError> {
    schema
        .get(keyword)
        .ok_or_else(|| DigestError::MissingKeyword(keyword.to_string()))
}

/// Digest of the form `{ <keyword>: <normalised value> }`.
///
/// Correct for any keyword whose behaviour depends on its own value only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleDigester;

impl Digester for SimpleDigester {
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError> {
        let value = keyword_value(keyword, schema)?;
        let mut digest = Map::new();
        digest.insert(keyword.to_string(), normalize(value.clone()));
        Ok(Value::Object(digest))
    }
}

/// Digest value together with its content fingerprint.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDigest {
    value: Value,
    content: ContentDigest,
}

impl SchemaDigest {
    /// Run `digester` and fingerprint the result.
    pub fn compute(
        digester: &dyn Digester,
        keyword: &str,
        schema: &Map<String, Value>,
    ) -> Result<Self, DigestError> {
        let value = digester.digest(keyword, schema)?;
        let content = sha256_digest(&CanonicalBytes::new(&value)?);
        Ok(Self { value, content })
    }

    /// The digest value handed to validator factories.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Fingerprint used as the cache key.
    pub fn content(&self) -> &ContentDigest {
        &self.content
    }
}

/// Fail with [`DigestError::IncorrectType`] unless `value` is of `expected`.
pub fn expect_type(keyword: &str, value: &Value, expected: &[NodeType]) -> Result<(), DigestError> {
    let found = NodeType::of(value);
    if crate::keyword::syntax::type_allowed(expected, found) {
        Ok(())
    } else {
        Err(DigestError::IncorrectType {
            keyword: keyword.to_string(),
            found,
        })
    }
}
