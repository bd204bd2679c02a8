// src/exec/logs.rs

//! Per-player log files: `<label><slot>.log` for stdout and
//! `<label><slot>.err` for stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub stdout: PathBuf,
    pub stderr: PathBuf,
}

impl LogPaths {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.stdout.as_path(), self.stderr.as_path()].into_iter()
    }
}

/// Open, truncated handles ready to hand to a child process.
#[derive(Debug)]
pub struct LogFiles {
    pub stdout: File,
    pub stderr: File,
}

pub fn log_paths(dir: &Path, label: &str, slot: u32) -> LogPaths {
    LogPaths {
        stdout: dir.join(format!("{label}{slot}.log")),
        stderr: dir.join(format!("{label}{slot}.err")),
    }
}

/// Create (or truncate) both files of a player.
pub fn open_logs(paths: &LogPaths) -> Result<LogFiles> {
    for path in paths.iter() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {:?}", parent))?;
        }
    }

    let stdout = File::create(&paths.stdout)
        .with_context(|| format!("creating log file {:?}", paths.stdout))?;
    let stderr = File::create(&paths.stderr)
        .with_context(|| format!("creating log file {:?}", paths.stderr))?;

    debug!(
        stdout = %paths.stdout.display(),
        stderr = %paths.stderr.display(),
        "opened player logs"
    );

    Ok(LogFiles { stdout, stderr })
}
