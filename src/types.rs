// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// What to do with a slot whose file already exists.
///
/// - `Replace`: remove the existing copy and reuse the slot. A removal error
///   other than "not found" aborts the run (default behaviour).
/// - `SkipBusy`: like `Replace`, but a copy that cannot be removed (still
///   running, locked, read-only directory) moves on to the next slot.
/// - `Fresh`: never delete anything; take the lowest slot with no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SlotPolicy {
    #[default]
    Replace,
    SkipBusy,
    Fresh,
}

impl FromStr for SlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(SlotPolicy::Replace),
            "skip-busy" | "skip_busy" => Ok(SlotPolicy::SkipBusy),
            "fresh" => Ok(SlotPolicy::Fresh),
            other => Err(format!(
                "invalid slot_policy: {other} (expected \"replace\", \"skip-busy\" or \"fresh\")"
            )),
        }
    }
}

impl fmt::Display for SlotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotPolicy::Replace => "replace",
            SlotPolicy::SkipBusy => "skip-busy",
            SlotPolicy::Fresh => "fresh",
        };
        f.write_str(s)
    }
}

/// Whether the chosen slot previously held a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// An older copy was removed to make room.
    Replaced,
    /// Nothing was there.
    Fresh,
}
