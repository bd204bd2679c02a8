// src/stage/copy.rs

use std::path::Path;

use tracing::{debug, info};

use crate::errors::{CopyplayError, Result};
use crate::fs::FileSystem;

/// Fail early if the client executable has not been built.
pub fn ensure_source(fs: &dyn FileSystem, source: &Path) -> Result<()> {
    if fs.is_file(source) {
        Ok(())
    } else {
        Err(CopyplayError::SourceMissing(source.to_path_buf()))
    }
}

/// Copy the client into its slot, creating the destination directory first.
pub fn copy_client(fs: &dyn FileSystem, source: &Path, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!(dir = %parent.display(), "ensuring destination directory");
        fs.create_dir_all(parent)?;
    }

    let bytes = fs.copy(source, dest)?;
    info!(
        source = %source.display(),
        dest = %dest.display(),
        bytes,
        "copied client executable"
    );
    Ok(bytes)
}
