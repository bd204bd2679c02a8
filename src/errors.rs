// src/errors.rs

//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyplayError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Client executable not found: {0}")]
    SourceMissing(PathBuf),

    #[error("No usable slot for {stem} within {max_slots} attempts")]
    SlotsExhausted { stem: String, max_slots: u32 },

    #[error("Could not clear slot {slot} at {path}: {source}")]
    SlotRemoval {
        slot: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start player '{player}' from {program}: {source}")]
    Spawn {
        player: String,
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CopyplayError>;
