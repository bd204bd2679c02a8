// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag except `--config`, `--log-level` and `--dry-run` overrides the
//! matching value from the TOML config file.

use clap::{Parser, ValueEnum};

use crate::types::SlotPolicy;

/// Command-line arguments for `copyplay`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "copyplay",
    version,
    about = "Copy a game client to a numbered slot and start two players against a server.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Copyplay.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Client executable to copy.
    #[arg(long, value_name = "PATH")]
    pub source: Option<String>,

    /// Directory receiving the numbered copies.
    #[arg(long, value_name = "DIR")]
    pub dest_dir: Option<String>,

    /// Game server address passed to each player via `-s`.
    #[arg(long, value_name = "HOST")]
    pub server: Option<String>,

    /// Game token passed as the first argument of each player.
    #[arg(long, value_name = "NAME")]
    pub game: Option<String>,

    /// Player labels; one process is started per label.
    #[arg(long, value_name = "LABELS", value_delimiter = ',')]
    pub players: Option<Vec<String>>,

    /// Directory receiving the `.log` / `.err` files.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// How occupied slots are handled.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub slot_policy: Option<SlotPolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COPYPLAY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the config and print the launch plan without touching any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
