//! # Error Types
//!
//! Two disjoint taxonomies exist in the engine:
//!
//! - **Configuration errors** signal misuse of a builder API (an empty
//!   keyword name, a missing format attribute). They are returned from the
//!   offending call and never end up in a [`ProcessingReport`].
//! - **Validation findings** are never errors at all; they are
//!   [`ProcessingMessage`]s logged into a report.
//!
//! [`ProcessingReport`]: crate::report::ProcessingReport
//! [`ProcessingMessage`]: crate::message::ProcessingMessage

use thiserror::Error;

use crate::bundle::MessageBundle;
use crate::message::{LogLevel, ProcessingMessage};

/// Misuse of a builder API.
///
/// Each variant maps to a message-bundle key; see [`message_key`].
///
/// [`message_key`]: ConfigurationError::message_key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A keyword name was empty.
    #[error("keyword name must not be empty")]
    NullName,

    /// A format attribute was absent.
    #[error("format attribute must not be null")]
    NullAttribute,

    /// A format attribute name was empty.
    #[error("format attribute name must not be empty")]
    NullFormat,

    /// A keyword was built without a syntax checker.
    #[error("keyword \"{0}\" has no syntax checker")]
    NullSyntaxChecker(String),

    /// A keyword was built without a digester.
    #[error("keyword \"{0}\" has no digester")]
    NullDigester(String),
}

impl ConfigurationError {
    /// Message-bundle key describing this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NullName => "NULL_NAME",
            Self::NullAttribute => "NULL_ATTRIBUTE",
            Self::NullFormat => "NULL_FORMAT",
            Self::NullSyntaxChecker(_) => "NULL_SYNTAX_CHECKER",
            Self::NullDigester(_) => "NULL_DIGESTER",
        }
    }

    /// Render this error as a fatal processing message using `bundle`.
    pub fn to_message(&self, bundle: &MessageBundle) -> ProcessingMessage {
        let mut message = ProcessingMessage::new(LogLevel::Fatal)
            .with_field("domain", "configuration")
            .with_field("key", self.message_key());
        if let Self::NullSyntaxChecker(keyword) | Self::NullDigester(keyword) = self {
            message = message.with_field("keyword", keyword.as_str());
        }
        message.with_template(bundle, self.message_key())
    }
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
