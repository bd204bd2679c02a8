// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::SlotPolicy;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [client]
/// source = "build/client.exe"
/// slot_policy = "replace"
///
/// [match]
/// game = "Chess"
/// server = "r99acm.device.mst.edu"
/// players = ["a", "b"]
///
/// [logs]
/// dir = "."
/// ```
///
/// All sections are optional; an empty file reproduces the built-in setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Which executable to copy and where the numbered copies go.
    #[serde(default)]
    pub client: ClientSection,

    /// What each player process is started with, from `[match]`.
    #[serde(default, rename = "match")]
    pub session: MatchSection,

    /// Where the per-player output lands.
    #[serde(default)]
    pub logs: LogsSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub client: ClientSection,
    pub session: MatchSection,
    pub logs: LogsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        client: ClientSection,
        session: MatchSection,
        logs: LogsSection,
    ) -> Self {
        Self {
            client,
            session,
            logs,
        }
    }

    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(&self.client.source)
    }

    /// Directory receiving the numbered copies.
    ///
    /// Falls back to the directory holding the source executable, so
    /// `build/client.exe` is copied to `build/client<N>.exe`.
    pub fn dest_dir(&self) -> PathBuf {
        match self.client.dest_dir {
            Some(ref dir) => PathBuf::from(dir),
            None => Path::new(&self.client.source)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logs.dir)
    }
}

/// `[client]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
    /// The freshly built client executable.
    #[serde(default = "default_source")]
    pub source: String,

    /// Optional directory for the numbered copies.
    ///
    /// If `None`, the source's own directory is used.
    #[serde(default)]
    pub dest_dir: Option<String>,

    /// `"replace"`, `"skip-busy"` or `"fresh"`.
    #[serde(default)]
    pub slot_policy: SlotPolicy,

    /// Upper bound on slot numbers tried before giving up.
    #[serde(default = "default_max_slots")]
    pub max_slots: u32,
}

fn default_source() -> String {
    "build/client.exe".to_string()
}

fn default_max_slots() -> u32 {
    1000
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            dest_dir: None,
            slot_policy: SlotPolicy::default(),
            max_slots: default_max_slots(),
        }
    }
}

/// `[match]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchSection {
    /// Game token passed as the first argument.
    #[serde(default = "default_game")]
    pub game: String,

    /// Server address passed via `-s`.
    #[serde(default = "default_server")]
    pub server: String,

    /// One process per label; the label prefixes that player's log files.
    #[serde(default = "default_players")]
    pub players: Vec<String>,

    /// Appended after the built-in arguments.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_game() -> String {
    "Chess".to_string()
}

fn default_server() -> String {
    "r99acm.device.mst.edu".to_string()
}

fn default_players() -> Vec<String> {
    vec!["a".to_string(), "b".to_string()]
}

impl Default for MatchSection {
    fn default() -> Self {
        Self {
            game: default_game(),
            server: default_server(),
            players: default_players(),
            extra_args: Vec::new(),
        }
    }
}

/// `[logs]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsSection {
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_dir() -> String {
    ".".to_string()
}

impl Default for LogsSection {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}
