// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// `Copyplay.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Copyplay.toml")
}

/// Build the effective configuration for a run.
///
/// - An explicit `--config` must exist.
/// - Without `--config`, [`default_config_path`] is read if present and the
///   built-in defaults are used otherwise.
/// - CLI flags are layered on top before validation, so an invalid override
///   is reported the same way as an invalid file value.
pub fn resolve(args: &CliArgs) -> Result<ConfigFile> {
    let mut raw = match args.config {
        Some(ref path) => load_from_path(path)?,
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = %path.display(), "using default config file");
                load_from_path(&path)?
            } else {
                debug!("no config file; using built-in defaults");
                RawConfigFile::default()
            }
        }
    };

    apply_overrides(&mut raw, args);
    ConfigFile::try_from(raw)
}

/// Layer CLI flags over a raw config.
pub fn apply_overrides(raw: &mut RawConfigFile, args: &CliArgs) {
    if let Some(ref source) = args.source {
        raw.client.source = source.clone();
    }
    if let Some(ref dir) = args.dest_dir {
        raw.client.dest_dir = Some(dir.clone());
    }
    if let Some(policy) = args.slot_policy {
        raw.client.slot_policy = policy;
    }
    if let Some(ref game) = args.game {
        raw.session.game = game.clone();
    }
    if let Some(ref server) = args.server {
        raw.session.server = server.clone();
    }
    if let Some(ref players) = args.players {
        raw.session.players = players.clone();
    }
    if let Some(ref dir) = args.log_dir {
        raw.logs.dir = dir.clone();
    }
}
