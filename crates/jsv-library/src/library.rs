//! # Library and LibraryBuilder
//!
//! A [`Library`] is the frozen registry consulted by the validation drivers:
//! syntax checkers, digesters, validator factories (all keyed by keyword
//! name) and format attributes (keyed by attribute name).
//!
//! ## Builder Semantics
//!
//! - `add_keyword` replaces any existing definition of the same name, so
//!   the factory of an earlier definition never survives a redefinition
//!   that lacks one.
//! - The fallible operations check their arguments before touching any
//!   dictionary: a call that returns a [`ConfigurationError`] leaves the
//!   builder exactly as it was.
//! - `freeze` snapshots; the builder stays usable and later changes are
//!   invisible to libraries frozen earlier.
//!
//! The syntax-checker and digester dictionaries always share one key set.

use std::fmt;
use std::sync::Arc;

use jsv_core::{ConfigurationError, Dictionary, DictionaryBuilder};
use serde_json::{Map, Value};

use crate::cache::ValidatorCache;
use crate::error::KeywordError;
use crate::format::FormatAttribute;
use crate::keyword::digest::Digester;
use crate::keyword::syntax::SyntaxChecker;
use crate::keyword::validator::{KeywordValidator, ValidatorFactory};
use crate::keyword::Keyword;

/// Immutable keyword and format registry with its validator cache.
#[derive(Clone)]
pub struct Library {
    syntax_checkers: Dictionary<Arc<dyn SyntaxChecker>>,
    digesters: Dictionary<Arc<dyn Digester>>,
    validators: Dictionary<ValidatorFactory>,
    format_attributes: Dictionary<Arc<dyn FormatAttribute>>,
    cache: Arc<ValidatorCache>,
}

impl Library {
    /// Start an empty builder.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// Copy every registry into a fresh builder.
    pub fn thaw(&self) -> LibraryBuilder {
        LibraryBuilder {
            syntax_checkers: self.syntax_checkers.thaw(),
            digesters: self.digesters.thaw(),
            validators: self.validators.thaw(),
            format_attributes: self.format_attributes.thaw(),
        }
    }

    /// Syntax checkers by keyword.
    pub fn syntax_checkers(&self) -> &Dictionary<Arc<dyn SyntaxChecker>> {
        &self.syntax_checkers
    }

    /// Digesters by keyword.
    pub fn digesters(&self) -> &Dictionary<Arc<dyn Digester>> {
        &self.digesters
    }

    /// Validator factories by keyword.
    pub fn validators(&self) -> &Dictionary<ValidatorFactory> {
        &self.validators
    }

    /// Format attributes by name.
    pub fn format_attributes(&self) -> &Dictionary<Arc<dyn FormatAttribute>> {
        &self.format_attributes
    }

    /// Known keyword names, ascending.
    pub fn keyword_names(&self) -> impl Iterator<Item = &str> {
        self.syntax_checkers.names()
    }

    /// Whether `name` is a known keyword.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.syntax_checkers.contains(name)
    }

    /// Syntax checker for `keyword`.
    pub fn syntax_checker(&self, keyword: &str) -> Option<&dyn SyntaxChecker> {
        self.syntax_checkers.get(keyword).map(|c| c.as_ref())
    }

    /// Format attribute called `name`.
    pub fn format_attribute(&self, name: &str) -> Option<&dyn FormatAttribute> {
        self.format_attributes.get(name).map(|a| a.as_ref())
    }

    /// This library's validator cache.
    pub fn cache(&self) -> &ValidatorCache {
        &self.cache
    }

    /// The validator for `keyword` as it appears in `schema`.
    ///
    /// `Ok(None)` when the keyword has no validator factory.
    pub fn validator(
        &self,
        keyword: &str,
        schema: &Map<String, Value>,
    ) -> Result<Option<Arc<dyn KeywordValidator>>, KeywordError> {
        let (Some(factory), Some(digester)) =
            (self.validators.get(keyword), self.digesters.get(keyword))
        else {
            return Ok(None);
        };
        self.cache
            .get_or_build(keyword, digester.as_ref(), factory, schema)
            .map(Some)
    }
}

impl Default for Library {
    fn default() -> Self {
        LibraryBuilder::new().freeze()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("keywords", &self.syntax_checkers)
            .field("validators", &self.validators)
            .field("format_attributes", &self.format_attributes)
            .finish_non_exhaustive()
    }
}

/// Mutable staging area for a [`Library`].
#[derive(Default)]
pub struct LibraryBuilder {
    syntax_checkers: DictionaryBuilder<Arc<dyn SyntaxChecker>>,
    digesters: DictionaryBuilder<Arc<dyn Digester>>,
    validators: DictionaryBuilder<ValidatorFactory>,
    format_attributes: DictionaryBuilder<Arc<dyn FormatAttribute>>,
}

impl LibraryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `keyword`, replacing any existing definition of the same name.
    pub fn add_keyword(&mut self, keyword: Keyword) -> &mut Self {
        let name = keyword.name();
        self.remove_entries(name);
        self.syntax_checkers
            .add_entry(name, Arc::clone(keyword.syntax_checker()));
        self.digesters.add_entry(name, Arc::clone(keyword.digester()));
        if let Some(factory) = keyword.validator() {
            self.validators.add_entry(name, factory.clone());
        }
        self
    }

    /// Remove every capability registered for `name`. Unknown names are
    /// not an error.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NullName`] if `name` is empty.
    pub fn remove_keyword(&mut self, name: &str) -> Result<&mut Self, ConfigurationError> {
        if name.is_empty() {
            return Err(ConfigurationError::NullName);
        }
        self.remove_entries(name);
        Ok(self)
    }

    /// Register or replace format attribute `name`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NullFormat`] if `name` is empty,
    /// [`ConfigurationError::NullAttribute`] if `attribute` is `None`.
    pub fn add_format_attribute(
        &mut self,
        name: &str,
        attribute: Option<Arc<dyn FormatAttribute>>,
    ) -> Result<&mut Self, ConfigurationError> {
        if name.is_empty() {
            return Err(ConfigurationError::NullFormat);
        }
        let attribute = attribute.ok_or(ConfigurationError::NullAttribute)?;
        self.format_attributes.add_entry(name, attribute);
        Ok(self)
    }

    /// Remove format attribute `name` if present.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NullFormat`] if `name` is empty.
    pub fn remove_format_attribute(&mut self, name: &str) -> Result<&mut Self, ConfigurationError> {
        if name.is_empty() {
            return Err(ConfigurationError::NullFormat);
        }
        self.format_attributes.remove_entry(name);
        Ok(self)
    }

    /// Whether a keyword called `name` is staged.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.syntax_checkers.contains(name)
    }

    /// Whether a format attribute called `name` is staged.
    pub fn has_format_attribute(&self, name: &str) -> bool {
        self.format_attributes.contains(name)
    }

    /// Snapshot into an immutable library with an empty validator cache.
    pub fn freeze(&self) -> Library {
        tracing::debug!(
            keywords = self.syntax_checkers.len(),
            validators = self.validators.len(),
            formats = self.format_attributes.len(),
            "library frozen"
        );
        Library {
            syntax_checkers: self.syntax_checkers.freeze(),
            digesters: self.digesters.freeze(),
            validators: self.validators.freeze(),
            format_attributes: self.format_attributes.freeze(),
            cache: Arc::new(ValidatorCache::new()),
        }
    }

    fn remove_entries(&mut self, name: &str) {
        self.syntax_checkers.remove_entry(name);
        self.digesters.remove_entry(name);
        self.validators.remove_entry(name);
    }
}

impl fmt::Debug for LibraryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryBuilder")
            .field("keywords", &self.syntax_checkers)
            .field("validators", &self.validators)
            .field("format_attributes", &self.format_attributes)
            .finish()
    }
}
