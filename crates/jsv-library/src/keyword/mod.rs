//! # Keyword Descriptors
//!
//! A [`Keyword`] names one schema keyword and carries its capabilities: a
//! syntax checker and a digester (both mandatory) and optionally a
//! validator factory. Keywords without a factory are annotation-only: they
//! are checked in schemas but impose nothing on instances.

pub mod digest;
pub mod syntax;
pub mod validator;

use std::fmt;
use std::sync::Arc;

use jsv_core::{ConfigurationError, NodeType};
use serde_json::Value;

use crate::error::BuildError;
use digest::{Digester, SimpleDigester};
use syntax::{SyntaxChecker, TypeOnlySyntaxChecker};
use validator::{KeywordValidator, ValidatorFactory};

/// A fully described keyword, ready to be added to a library.
#[derive(Clone)]
pub struct Keyword {
    name: String,
    syntax_checker: Arc<dyn SyntaxChecker>,
    digester: Arc<dyn Digester>,
    validator: Option<ValidatorFactory>,
}

impl Keyword {
    /// Start describing a keyword called `name`.
    pub fn builder(name: impl Into<String>) -> KeywordBuilder {
        KeywordBuilder {
            name: name.into(),
            syntax_checker: None,
            digester: None,
            validator: None,
        }
    }

    /// Keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Syntax checker.
    pub fn syntax_checker(&self) -> &Arc<dyn SyntaxChecker> {
        &self.syntax_checker
    }

    /// Digester.
    pub fn digester(&self) -> &Arc<dyn Digester> {
        &self.digester
    }

    /// Validator factory, absent for annotation-only keywords.
    pub fn validator(&self) -> Option<&ValidatorFactory> {
        self.validator.as_ref()
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyword")
            .field("name", &self.name)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Staging area for a [`Keyword`].
pub struct KeywordBuilder {
    name: String,
    syntax_checker: Option<Arc<dyn SyntaxChecker>>,
    digester: Option<Arc<dyn Digester>>,
    validator: Option<ValidatorFactory>,
}

impl KeywordBuilder {
    /// Use `checker` for syntax checking.
    pub fn with_syntax_checker(mut self, checker: impl SyntaxChecker + 'static) -> Self {
        self.syntax_checker = Some(Arc::new(checker));
        self
    }

    /// Accept any value whose type is one of `types`.
    pub fn with_type_only_syntax_checker(self, types: &[NodeType]) -> Self {
        self.with_syntax_checker(TypeOnlySyntaxChecker::new(types))
    }

    /// Use `digester` for digesting.
    pub fn with_digester(mut self, digester: impl Digester + 'static) -> Self {
        self.digester = Some(Arc::new(digester));
        self
    }

    /// Digest as `{ <name>: <value> }`.
    pub fn with_simple_digester(self) -> Self {
        self.with_digester(SimpleDigester)
    }

    /// Build validators with `build`, which receives the digest value.
    pub fn with_validator<F, V>(mut self, build: F) -> Self
    where
        F: Fn(&Value) -> Result<V, BuildError> + Send + Sync + 'static,
        V: KeywordValidator + 'static,
    {
        self.validator = Some(ValidatorFactory::new(build));
        self
    }

    /// Use an existing factory.
    pub fn with_validator_factory(mut self, factory: ValidatorFactory) -> Self {
        self.validator = Some(factory);
        self
    }

    /// Finish the description.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NullName`] for an empty name,
    /// [`ConfigurationError::NullSyntaxChecker`] or
    /// [`ConfigurationError::NullDigester`] for a missing capability.
    pub fn build(self) -> Result<Keyword, ConfigurationError> {
        if self.name.is_empty() {
            return Err(ConfigurationError::NullName);
        }
        let syntax_checker = self
            .syntax_checker
            .ok_or_else(|| ConfigurationError::NullSyntaxChecker(self.name.clone()))?;
        let digester = self
            .digester
            .ok_or_else(|| ConfigurationError::NullDigester(self.name.clone()))?;
        Ok(Keyword {
            name: self.name,
            syntax_checker,
            digester,
            validator: self.validator,
        })
    }
}
