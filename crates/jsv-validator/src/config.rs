//! # Validation Configuration
//!
//! Knobs that change how the drivers behave without changing the library:
//!
//! ```yaml
//! unknown_keywords: warning   # ignore | info | warning
//! use_format: false           # drop the `format` keyword entirely
//! log_level: warning          # threshold of produced reports
//! ```
//!
//! Every field is optional. Unknown fields are rejected so a typo does not
//! silently fall back to a default. JSON files are accepted too, being a
//! subset of YAML.

use std::path::{Path, PathBuf};

use jsv_core::{ConfigurationError, LogLevel};
use jsv_library::Library;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the syntax driver treats keywords the library does not know.
///
/// Unknown keywords are never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeywordPolicy {
    /// Say nothing.
    #[default]
    Ignore,
    /// Log an `info` message.
    Info,
    /// Log a `warning` message.
    Warning,
}

impl UnknownKeywordPolicy {
    /// Level of the message to log, if any.
    pub fn level(self) -> Option<LogLevel> {
        match self {
            Self::Ignore => None,
            Self::Info => Some(LogLevel::Info),
            Self::Warning => Some(LogLevel::Warning),
        }
    }
}

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfiguration {
    /// Treatment of unknown schema keywords.
    pub unknown_keywords: UnknownKeywordPolicy,
    /// Whether the `format` keyword is honoured.
    pub use_format: bool,
    /// Retention threshold of produced reports.
    pub log_level: LogLevel,
}

impl Default for ValidationConfiguration {
    fn default() -> Self {
        Self {
            unknown_keywords: UnknownKeywordPolicy::Ignore,
            use_format: true,
            log_level: LogLevel::Info,
        }
    }
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read configuration '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid configuration.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl ValidationConfiguration {
    /// Parse from YAML (or JSON) text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load from a file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// The library the drivers should use given `base`.
    ///
    /// With `use_format` set this is `base` itself, sharing its validator
    /// cache. Otherwise it is a copy without the `format` keyword.
    pub fn library_for(&self, base: &Library) -> Result<Library, ConfigurationError> {
        if self.use_format {
            return Ok(base.clone());
        }
        let mut builder = base.thaw();
        builder.remove_keyword("format")?;
        Ok(builder.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ValidationConfiguration::default();
        assert_eq!(config.unknown_keywords, UnknownKeywordPolicy::Ignore);
        assert!(config.use_format);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_empty_text_is_default() {
        assert_eq!(
            ValidationConfiguration::from_yaml_str("  \n").unwrap(),
            ValidationConfiguration::default()
        );
    }

    #[test]
    fn test_partial_yaml() {
        let config = ValidationConfiguration::from_yaml_str("unknown_keywords: warning\n").unwrap();
        assert_eq!(config.unknown_keywords, UnknownKeywordPolicy::Warning);
        assert!(config.use_format);
    }

    #[test]
    fn test_json_accepted() {
        let config =
            ValidationConfiguration::from_yaml_str(r#"{"use_format": false, "log_level": "error"}"#)
                .unwrap();
        assert!(!config.use_format);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            ValidationConfiguration::from_yaml_str("use_formats: false\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_error_policy_rejected() {
        assert!(ValidationConfiguration::from_yaml_str("unknown_keywords: error\n").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: debug").unwrap();
        let config = ValidationConfiguration::from_path(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_missing_file() {
        let err = ValidationConfiguration::from_path(Path::new("/nonexistent/jsv.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_library_without_format() {
        let base = jsv_keywords::default_library();
        let config = ValidationConfiguration {
            use_format: false,
            ..Default::default()
        };
        let lib = config.library_for(base).unwrap();
        assert!(!lib.has_keyword("format"));
        assert!(base.has_keyword("format"));

        let same = ValidationConfiguration::default().library_for(base).unwrap();
        assert!(std::ptr::eq(same.cache(), base.cache()));
    }
}
