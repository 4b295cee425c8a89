//! # Processing Report
//!
//! The ordered outcome of one validation run. Messages are appended in
//! emission order and never modified; the success verdict is derived from
//! the most severe level ever logged.
//!
//! ## Log-Level Threshold
//!
//! A report keeps only messages at or above its threshold (`info` by
//! default). Filtering affects what is retained, not the verdict: a
//! filtered-out `error` still makes the report unsuccessful.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::message::{LogLevel, ProcessingMessage};

/// Ordered collection of processing messages with a success verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    log_level: LogLevel,
    success: bool,
    messages: Vec<ProcessingMessage>,
}

impl ProcessingReport {
    /// An empty, successful report retaining `info` and above.
    pub fn new() -> Self {
        Self::with_log_level(LogLevel::Info)
    }

    /// An empty, successful report retaining `threshold` and above.
    pub fn with_log_level(threshold: LogLevel) -> Self {
        Self {
            log_level: threshold,
            success: true,
            messages: Vec::new(),
        }
    }

    /// Retention threshold.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Append a message at its own level.
    pub fn log(&mut self, message: ProcessingMessage) {
        if message.level().is_failure() {
            self.success = false;
        }
        if message.level() >= self.log_level {
            self.messages.push(message);
        }
    }

    /// Append `message` at `debug` level.
    pub fn debug(&mut self, message: ProcessingMessage) {
        self.log(message.with_level(LogLevel::Debug));
    }

    /// Append `message` at `info` level.
    pub fn info(&mut self, message: ProcessingMessage) {
        self.log(message.with_level(LogLevel::Info));
    }

    /// Append `message` at `warning` level.
    pub fn warn(&mut self, message: ProcessingMessage) {
        self.log(message.with_level(LogLevel::Warning));
    }

    /// Append `message` at `error` level.
    pub fn error(&mut self, message: ProcessingMessage) {
        self.log(message.with_level(LogLevel::Error));
    }

    /// Append `message` at `fatal` level.
    pub fn fatal(&mut self, message: ProcessingMessage) {
        self.log(message.with_level(LogLevel::Fatal));
    }

    /// `true` iff no message at `error` or above was ever logged.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Retained messages in emission order.
    pub fn messages(&self) -> &[ProcessingMessage] {
        &self.messages
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message was retained.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append another report's messages, re-filtered by this threshold, and
    /// fold in its verdict.
    pub fn merge(&mut self, other: ProcessingReport) {
        self.success &= other.success;
        self.messages.extend(
            other
                .messages
                .into_iter()
                .filter(|m| m.level() >= self.log_level),
        );
    }

    /// Array-of-objects form, in emission order.
    pub fn to_structured(&self) -> Vec<Value> {
        self.messages.iter().map(ProcessingMessage::to_json).collect()
    }

    /// [`to_structured`](Self::to_structured) as a single JSON array.
    pub fn to_json(&self) -> Value {
        Value::Array(self.to_structured())
    }
}

impl Default for ProcessingReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for ProcessingReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.messages.iter().map(ProcessingMessage::to_json))
    }
}

impl<'a> IntoIterator for &'a ProcessingReport {
    type Item = &'a ProcessingMessage;
    type IntoIter = std::slice::Iter<'a, ProcessingMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl fmt::Display for ProcessingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success: {}", self.success)?;
        for message in &self.messages {
            writeln!(f, "--- {message}")?;
        }
        Ok(())
    }
}
