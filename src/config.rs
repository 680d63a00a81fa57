//! YAML configuration loading and typed access.
//!
//! This module provides [`Config`], an ordered key/value view over a parsed
//! YAML document. Values are pulled out through typed accessors that fail
//! explicitly on missing or mismatched keys, or the whole document can be
//! deserialized into a caller-defined struct via [`Config::into_typed`].
//!
//! # Example document
//!
//! ```yaml
//! artifacts_root: artifacts
//!
//! data_ingestion:
//!   root_dir: artifacts/data_ingestion
//!   source_url: https://example.com/data.zip
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// An ordered mapping of configuration keys to arbitrarily nested YAML
/// values, loaded from a file.
///
/// A `Config` is always non-empty: loading rejects null/blank documents and
/// empty top-level mappings. Key order follows the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Mapping,
}

impl Config {
    /// Load a configuration document from a YAML file.
    ///
    /// Emits one informational log record naming the loaded path, on
    /// success only.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if `path` does not exist
    /// - [`ConfigError::Empty`] if the document is blank or parses to null,
    ///   or the top-level mapping has no keys
    /// - [`ConfigError::NotAMapping`] if the top-level value is a scalar or
    ///   sequence
    /// - [`ConfigError::Parse`] for any other YAML error, unchanged
    /// - [`ConfigError::Io`] for any other read failure, unchanged
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io(err)
            }
        })?;

        if raw.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }

        let document: Value = serde_yaml::from_str(&raw)?;
        let root = match document {
            Value::Null => {
                return Err(ConfigError::Empty {
                    path: path.to_path_buf(),
                });
            }
            Value::Mapping(mapping) if mapping.is_empty() => {
                return Err(ConfigError::Empty {
                    path: path.to_path_buf(),
                });
            }
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(ConfigError::NotAMapping {
                    found: yaml_kind(&other),
                });
            }
        };

        info!("loaded configuration from {}", path.display());

        Ok(Self { root })
    }

    /// Build a `Config` directly from a mapping.
    ///
    /// Used for nested sections; the non-empty invariant only applies to
    /// documents going through [`Config::load`].
    #[must_use]
    const fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    /// Extract the value under `key`, deserialized as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if `key` is absent, or
    /// [`ConfigError::TypeMismatch`] if the value cannot be deserialized
    /// as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let value = self.root.get(key).ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })?;

        serde_yaml::from_value(value.clone()).map_err(|_| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Return the nested mapping under `key` as a sub-config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if `key` is absent, or
    /// [`ConfigError::TypeMismatch`] if the value is not a mapping.
    pub fn section(&self, key: &str) -> Result<Self, ConfigError> {
        let value = self.root.get(key).ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })?;

        match value {
            Value::Mapping(mapping) => Ok(Self::from_mapping(mapping.clone())),
            _ => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "mapping",
            }),
        }
    }

    /// Deserialize the whole document into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document does not match the
    /// shape of `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        Ok(serde_yaml::from_value(Value::Mapping(self.root))?)
    }

    /// Whether `key` is present at the top level of this mapping.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Top-level string keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().filter_map(Value::as_str)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the mapping has no keys. Always `false` for a freshly loaded
    /// document; nested sections may be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// Human-readable name for the YAML kind of a value.
const fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
