//! # jsv-cli — Command-Line Validation
//!
//! Handlers for the `jsv` binary:
//!
//! - `jsv syntax <SCHEMA>...` checks schemas.
//! - `jsv validate <SCHEMA> <INSTANCE>...` checks the schema, then validates
//!   each instance against it.
//!
//! Handlers return the process exit code (see [`RetCode`]) and write their
//! output to a caller-supplied writer; diagnostics go through `tracing` to
//! stderr.

pub mod document;
pub mod reporter;
pub mod syntax;
pub mod validate;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use jsv_validator::{JsonValidator, ValidationConfiguration};

pub use reporter::{report, Outcome, ReportStyle, RetCode};

/// Settings shared by every subcommand.
#[derive(Debug)]
pub struct Session {
    validator: JsonValidator,
    style: ReportStyle,
}

impl Session {
    /// Load the configuration at `config` (defaults when `None`) on top of
    /// the default library.
    pub fn new(config: Option<&Path>, style: ReportStyle) -> Result<Self> {
        let config = match config {
            Some(path) => ValidationConfiguration::from_path(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => ValidationConfiguration::default(),
        };
        tracing::debug!(?config, "validation configuration");
        let validator = JsonValidator::new(jsv_keywords::default_library(), config)
            .context("failed to derive the validation library")?;
        Ok(Self { validator, style })
    }

    /// The configured validator.
    pub fn validator(&self) -> &JsonValidator {
        &self.validator
    }

    /// The output style.
    pub fn style(&self) -> ReportStyle {
        self.style
    }

    /// Print `outcome` and return its exit code.
    pub fn emit(&self, outcome: &Outcome<'_>, out: &mut dyn Write) -> Result<RetCode> {
        report(self.style, outcome, out).context("failed to write report")
    }
}

/// Count the paths that are not files, logging each one.
pub(crate) fn missing_inputs<'a>(paths: impl IntoIterator<Item = &'a Path>) -> usize {
    paths
        .into_iter()
        .filter(|path| !path.is_file())
        .inspect(|path| tracing::error!(path = %path.display(), "input file not found"))
        .count()
}
