// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CopyplayError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::CopyplayError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.client, raw.session, raw.logs))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_client(cfg)?;
    validate_match(cfg)?;
    validate_players(cfg)?;
    Ok(())
}

fn validate_client(cfg: &RawConfigFile) -> Result<()> {
    if cfg.client.source.trim().is_empty() {
        return Err(CopyplayError::ConfigError(
            "[client].source must not be empty".to_string(),
        ));
    }

    // Copies must carry a directory part or spawning searches PATH.
    if let Some(ref dir) = cfg.client.dest_dir {
        if dir.trim().is_empty() {
            return Err(CopyplayError::ConfigError(
                "[client].dest_dir must not be empty (omit it to use the source's directory)"
                    .to_string(),
            ));
        }
    }

    if cfg.client.max_slots == 0 {
        return Err(CopyplayError::ConfigError(
            "[client].max_slots must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_match(cfg: &RawConfigFile) -> Result<()> {
    if cfg.session.game.trim().is_empty() {
        return Err(CopyplayError::ConfigError(
            "[match].game must not be empty".to_string(),
        ));
    }
    if cfg.session.server.trim().is_empty() {
        return Err(CopyplayError::ConfigError(
            "[match].server must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_players(cfg: &RawConfigFile) -> Result<()> {
    let players = &cfg.session.players;
    if players.is_empty() {
        return Err(CopyplayError::ConfigError(
            "[match].players must name at least one player".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for label in players.iter() {
        if label.trim().is_empty() {
            return Err(CopyplayError::ConfigError(
                "player labels must not be empty".to_string(),
            ));
        }
        // Labels become file name prefixes.
        if label.contains('/') || label.contains('\\') {
            return Err(CopyplayError::ConfigError(format!(
                "player label '{}' must not contain path separators",
                label
            )));
        }
        if !seen.insert(label.as_str()) {
            return Err(CopyplayError::ConfigError(format!(
                "player label '{}' is listed more than once",
                label
            )));
        }
    }

    Ok(())
}
