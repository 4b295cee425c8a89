//! Errors raised while turning a schema member into a validator.
//!
//! None of these escape a validation run: the instance driver records them
//! as error-level messages attributed to the keyword and moves on.

use jsv_core::{CanonicalizationError, NodeType};
use thiserror::Error;

/// A digester could not produce a digest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The schema has no member for the keyword.
    #[error("schema has no member \"{0}\"")]
    MissingKeyword(String),

    /// The member has a type the digester cannot handle.
    #[error("keyword \"{keyword}\" cannot be digested from a value of type {found}")]
    IncorrectType {
        /// Keyword name.
        keyword: String,
        /// Type that was found.
        found: NodeType,
    },

    /// The member is structurally wrong in some other way.
    #[error("keyword \"{keyword}\": {reason}")]
    Invalid {
        /// Keyword name.
        keyword: String,
        /// What is wrong.
        reason: String,
    },

    /// The digest value could not be canonicalised.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),
}

/// A validator factory rejected a digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("keyword \"{keyword}\": {reason}")]
pub struct BuildError {
    /// Keyword name.
    pub keyword: String,
    /// Why the validator could not be built.
    pub reason: String,
}

impl BuildError {
    /// Construct a build error.
    pub fn new(keyword: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to obtain a validator for a keyword.
#[derive(Error, Debug)]
pub enum KeywordError {
    /// Digest computation failed.
    #[error("digest failure: {0}")]
    Digest(#[from] DigestError),

    /// Validator construction failed.
    #[error("build failure: {0}")]
    Build(#[from] BuildError),
}

impl KeywordError {
    /// Message-bundle key for reporting this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Digest(_) => "validation.digestFailure",
            Self::Build(_) => "validation.buildFailure",
        }
    }

    /// The underlying reason, without the failure-kind prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Digest(e) => e.to_string(),
            Self::Build(e) => e.reason.clone(),
        }
    }
}
