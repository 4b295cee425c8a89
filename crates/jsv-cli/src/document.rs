//! Loading JSON and YAML documents from disk.
//!
//! Files ending in `.yaml` or `.yml` are parsed as YAML and converted to the
//! equivalent JSON tree; anything else is parsed as JSON.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// A document could not be loaded.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("'{}' is not valid JSON: {source}", path.display())]
    Json {
        /// Path of the document.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },

    /// The file is not valid YAML.
    #[error("'{}' is not valid YAML: {source}", path.display())]
    Yaml {
        /// Path of the document.
        path: PathBuf,
        /// Parser error.
        source: serde_yaml::Error,
    },

    /// The YAML uses something JSON cannot represent.
    #[error("'{}' cannot be represented as JSON: {reason}", path.display())]
    Conversion {
        /// Path of the document.
        path: PathBuf,
        /// What could not be converted.
        reason: String,
    },
}

/// Whether `path` should be parsed as YAML.
pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Read and parse the document at `path`.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content)
}

/// Parse `content` according to the extension of `path`.
pub fn parse_document(path: &Path, content: &str) -> Result<Value, DocumentError> {
    if !is_yaml(path) {
        return serde_json::from_str(content).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        });
    }
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|source| DocumentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    yaml_to_json_value(&yaml).map_err(|reason| DocumentError::Conversion {
        path: path.to_path_buf(),
        reason,
    })
}

/// Convert a YAML tree to the equivalent JSON tree.
///
/// Scalar keys are stringified; tags are dropped.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                object.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
