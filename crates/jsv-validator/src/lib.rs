//! # jsv-validator — Validation Drivers
//!
//! Two drivers consume a frozen [`Library`]:
//!
//! - [`SyntaxValidator`] checks that a document is a well-formed schema.
//! - [`InstanceValidator`] checks a document against a schema.
//!
//! Both produce a [`ProcessingReport`] and never fail: every problem found in
//! the input becomes a message. Each run is a single synchronous computation
//! traced as one `tracing` span, and message order is deterministic for a
//! given library and input.
//!
//! [`JsonValidator`] ties a library to a [`ValidationConfiguration`] for
//! callers that want both steps with consistent settings.

pub mod config;
pub mod instance;
pub mod syntax;

use jsv_core::{ConfigurationError, MessageBundle, ProcessingReport};
use jsv_library::Library;
use serde_json::Value;

pub use config::{ConfigError, UnknownKeywordPolicy, ValidationConfiguration};
pub use instance::InstanceValidator;
pub use syntax::SyntaxValidator;

/// Check `document` for schema syntax errors with default settings.
pub fn validate_schema(library: &Library, document: &Value) -> ProcessingReport {
    SyntaxValidator::new(library).validate_schema(document)
}

/// Validate `document` against `schema` with default settings.
pub fn validate_instance(library: &Library, schema: &Value, document: &Value) -> ProcessingReport {
    InstanceValidator::new(library).validate(schema, document)
}

/// A library and configuration bundled for repeated use.
#[derive(Debug, Clone)]
pub struct JsonValidator {
    library: Library,
    config: ValidationConfiguration,
    bundle: MessageBundle,
}

impl JsonValidator {
    /// Derive the effective library from `base` according to `config`.
    pub fn new(base: &Library, config: ValidationConfiguration) -> Result<Self, ConfigurationError> {
        Ok(Self {
            library: config.library_for(base)?,
            config,
            bundle: MessageBundle::defaults().clone(),
        })
    }

    /// Render messages from `bundle`.
    pub fn with_bundle(mut self, bundle: MessageBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// The effective library.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The configuration in force.
    pub fn config(&self) -> &ValidationConfiguration {
        &self.config
    }

    /// Check `schema` for syntax errors.
    pub fn validate_schema(&self, schema: &Value) -> ProcessingReport {
        SyntaxValidator::new(&self.library)
            .with_bundle(&self.bundle)
            .with_unknown_keywords(self.config.unknown_keywords)
            .with_log_level(self.config.log_level)
            .validate_schema(schema)
    }

    /// Validate `instance` against `schema` without checking the schema.
    pub fn validate_unchecked(&self, schema: &Value, instance: &Value) -> ProcessingReport {
        InstanceValidator::new(&self.library)
            .with_bundle(&self.bundle)
            .with_log_level(self.config.log_level)
            .validate(schema, instance)
    }

    /// Check `schema`, then validate `instance` against it if it is valid.
    ///
    /// An invalid schema yields its syntax report.
    pub fn validate(&self, schema: &Value, instance: &Value) -> ProcessingReport {
        let syntax = self.validate_schema(schema);
        if !syntax.is_success() {
            return syntax;
        }
        let mut report = syntax;
        report.merge(self.validate_unchecked(schema, instance));
        report
    }
}
