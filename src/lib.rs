//! # config-fs-utils
//!
//! Small filesystem and YAML configuration helpers for pipeline-style
//! applications: load a configuration file into a typed, queryable mapping,
//! create output directories idempotently, and report file sizes in a
//! human-readable form.
//!
//! Each operation is a stateless leaf: synchronous, blocking, and
//! independent of the others. Nothing is cached or retried; every failure
//! surfaces immediately to the caller.
//!
//! ## Logging
//!
//! The crate emits informational records through the [`log`] facade (one
//! per successful config load, one per directory processed when verbose).
//! Install whatever `log::Log` implementation fits the host process, once,
//! at startup; without one the records are silently discarded.
//!
//! ## Usage
//!
//! ```no_run
//! use config_fs_utils::{Config, create_directories, file_size};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load("config/params.yaml")?;
//! let artifacts_root: std::path::PathBuf = config.get("artifacts_root")?;
//!
//! create_directories([&artifacts_root], true)?;
//!
//! println!("{}", file_size("config/params.yaml")?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dirs;
pub mod error;
pub mod size;

pub use config::Config;
pub use dirs::create_directories;
pub use error::ConfigError;
pub use size::{dir_size, file_size};
