//! Idempotent directory creation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Ensure every directory in `paths` exists, creating intermediate segments
/// as needed.
///
/// Pre-existing directories are not an error, so calling this twice with the
/// same input is harmless. With `verbose` enabled, one informational log
/// record is emitted per path processed, whether it was newly created or
/// already present.
///
/// # Errors
///
/// Returns the first underlying filesystem error (e.g. permission denied)
/// with the failing path attached; the remaining paths are not processed.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();

        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory {}", path.display()))?;

        if verbose {
            info!("created directory at {}", path.display());
        }
    }

    Ok(())
}
