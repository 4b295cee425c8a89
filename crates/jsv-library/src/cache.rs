//! # Validator Cache
//!
//! Maps `(keyword, digest fingerprint)` to a built validator. Entries are
//! never evicted or invalidated: a library is immutable, so the validator a
//! digest produced once is the validator it will always produce.
//!
//! Construction happens outside the lock. Two threads missing on the same
//! key may both build; the first insert wins and both callers receive the
//! stored instance.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use jsv_core::ContentDigest;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::KeywordError;
use crate::keyword::digest::{Digester, SchemaDigest};
use crate::keyword::validator::{KeywordValidator, ValidatorFactory};

type CacheKey = (String, ContentDigest);

/// Counters describing cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that built a validator.
    pub misses: u64,
    /// Distinct validators stored.
    pub entries: usize,
}

/// Shared, digest-keyed store of keyword validators.
#[derive(Default)]
pub struct ValidatorCache {
    entries: RwLock<HashMap<CacheKey, Arc<dyn KeywordValidator>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ValidatorCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The validator for `keyword` as it appears in `schema`, building it
    /// through `factory` on a miss.
    pub fn get_or_build(
        &self,
        keyword: &str,
        digester: &dyn Digester,
        factory: &ValidatorFactory,
        schema: &Map<String, Value>,
    ) -> Result<Arc<dyn KeywordValidator>, KeywordError> {
        let digest = SchemaDigest::compute(digester, keyword, schema)?;
        let key = (keyword.to_string(), digest.content().clone());

        if let Some(found) = self.entries.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(keyword, digest = %digest.content(), "validator cache hit");
            return Ok(Arc::clone(found));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(keyword, digest = %digest.content(), "validator cache miss");
        let built = factory.build(digest.value())?;
        let mut entries = self.entries.write();
        Ok(Arc::clone(entries.entry(key).or_insert(built)))
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().len(),
        }
    }

    /// Number of stored validators.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl fmt::Debug for ValidatorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorCache")
            .field("stats", &self.stats())
            .finish()
    }
}
