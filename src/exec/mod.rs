// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`plan`] turns the config and the staged copy into one
//!   [`PlayerLaunch`] per player.
//! - [`logs`] names and creates the per-player `.log` / `.err` files.
//! - [`launch`] starts the processes with `tokio::process::Command` and waits
//!   for all of them.

pub mod launch;
pub mod logs;
pub mod plan;

pub use launch::{launch_all, PlayerExit};
pub use logs::{log_paths, open_logs, LogFiles, LogPaths};
pub use plan::{build_launches, player_args, PlayerLaunch};
