//! # Processing Messages
//!
//! One structured diagnostic: a severity, a human-readable text, and an
//! open set of named context fields (`keyword`, `schema`, `instance`,
//! `found`, ...). Messages are assembled with the builder-style `with_*`
//! methods and become read-only once logged into a report.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bundle::MessageBundle;

/// Message severity, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Informational; never affects success.
    #[default]
    Info,
    /// Suspicious but acceptable.
    Warning,
    /// A constraint was violated.
    Error,
    /// Processing could not meaningfully continue.
    Fatal,
}

impl LogLevel {
    /// Lowercase name used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Whether a message at this level makes a report unsuccessful.
    pub fn is_failure(&self) -> bool {
        *self >= Self::Error
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMessage {
    level: LogLevel,
    message: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl ProcessingMessage {
    /// An empty message at `level`.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            message: String::new(),
            fields: Map::new(),
        }
    }

    /// Replace the severity.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the text verbatim.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set a context field. `level` and `message` are reserved and ignored.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        if name != "level" && name != "message" {
            self.fields.insert(name.to_string(), value.into());
        }
        self
    }

    /// Render the text from `key`, using this message's fields as context.
    pub fn with_template(mut self, bundle: &MessageBundle, key: &str) -> Self {
        self.message = bundle.render(key, &self.fields);
        self
    }

    /// Severity.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Rendered text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A context field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All context fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Structured record: `level`, `message`, then every context field.
    pub fn to_json(&self) -> Value {
        let mut record = Map::new();
        record.insert("level".into(), Value::String(self.level.as_str().into()));
        record.insert("message".into(), Value::String(self.message.clone()));
        for (k, v) in &self.fields {
            record.insert(k.clone(), v.clone());
        }
        Value::Object(record)
    }
}

impl fmt::Display for ProcessingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
