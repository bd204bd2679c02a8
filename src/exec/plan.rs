// src/exec/plan.rs

//! What gets started for each player, computed before anything runs so the
//! dry-run output and the real launch share one source of truth.

use std::path::{Path, PathBuf};

use crate::config::ConfigFile;
use crate::exec::logs::{log_paths, LogPaths};

/// One player process, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLaunch {
    pub label: String,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub logs: LogPaths,
}

impl PlayerLaunch {
    /// Human-readable command line for logs and dry-run output.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Arguments for a copied client: `<game> -s <server> -r <program> [extra...]`.
///
/// The session flag repeats the copy's own path.
pub fn player_args(cfg: &ConfigFile, program: &Path) -> Vec<String> {
    let mut args = vec![
        cfg.session.game.clone(),
        "-s".to_string(),
        cfg.session.server.clone(),
        "-r".to_string(),
        program.display().to_string(),
    ];
    args.extend(cfg.session.extra_args.iter().cloned());
    args
}

/// One launch per configured player, all sharing the copied program.
pub fn build_launches(cfg: &ConfigFile, program: &Path, slot: u32) -> Vec<PlayerLaunch> {
    let log_dir = cfg.log_dir();
    let args = player_args(cfg, program);

    cfg.session
        .players
        .iter()
        .map(|label| PlayerLaunch {
            label: label.clone(),
            program: program.to_path_buf(),
            args: args.clone(),
            logs: log_paths(&log_dir, label, slot),
        })
        .collect()
}
