//! Error types for configuration loading and access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or querying a configuration document.
///
/// Only the "file does not exist" and "document is empty" conditions are
/// converted into dedicated validation variants. Every other failure
/// (malformed YAML, permission errors, ...) is surfaced transparently so
/// callers see the original error message unchanged.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file parsed to a null document or an empty top-level mapping.
    #[error("configuration file is empty: {}", path.display())]
    Empty {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The document's top-level value is a scalar or sequence, not a mapping.
    #[error("configuration root must be a mapping, found {found}")]
    NotAMapping {
        /// YAML kind of the value that was found at the root.
        found: &'static str,
    },

    /// The document could not be parsed as YAML.
    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),

    /// The file exists but could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A requested key is absent from the mapping.
    #[error("missing configuration key '{key}'")]
    MissingKey {
        /// Key that was requested.
        key: String,
    },

    /// A key is present but its value does not have the requested shape.
    #[error("configuration key '{key}' is not a valid {expected}")]
    TypeMismatch {
        /// Key that was requested.
        key: String,
        /// Description of the type the caller asked for.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_path() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/etc/app/config.yaml"),
        };
        assert_eq!(
            err.to_string(),
            "configuration file not found: /etc/app/config.yaml"
        );
    }

    #[test]
    fn test_empty_display_includes_path() {
        let err = ConfigError::Empty {
            path: PathBuf::from("params.yaml"),
        };
        assert_eq!(err.to_string(), "configuration file is empty: params.yaml");
    }

    #[test]
    fn test_parse_variant_is_transparent() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed")
            .expect_err("malformed YAML should not parse");
        let original = yaml_err.to_string();

        let err = ConfigError::from(yaml_err);
        assert_eq!(err.to_string(), original);
    }

    #[test]
    fn test_missing_key_display() {
        let err = ConfigError::MissingKey {
            key: "artifacts_root".to_string(),
        };
        assert_eq!(err.to_string(), "missing configuration key 'artifacts_root'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ConfigError::TypeMismatch {
            key: "threads".to_string(),
            expected: "usize",
        };
        assert_eq!(
            err.to_string(),
            "configuration key 'threads' is not a valid usize"
        );
    }
}
