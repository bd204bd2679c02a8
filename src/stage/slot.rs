// src/stage/slot.rs

//! Numbered destination selection.
//!
//! Slot `n` of `build/client.exe` is `build/client<n>.exe`; slots start at 1.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{CopyplayError, Result};
use crate::fs::FileSystem;
use crate::types::{SlotPolicy, SlotState};

/// Naming scheme for the numbered copies of one executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    dir: PathBuf,
    stem: String,
    /// Includes the leading dot, or is empty.
    ext: String,
}

impl SlotLayout {
    /// Derive the layout from the source executable's file name.
    pub fn for_source(source: &Path, dest_dir: impl Into<PathBuf>) -> Result<Self> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CopyplayError::ConfigError(format!(
                    "client source {:?} has no usable file name",
                    source
                ))
            })?;

        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        Ok(Self {
            dir: dest_dir.into(),
            stem: stem.to_string(),
            ext,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn path(&self, slot: u32) -> PathBuf {
        self.dir.join(format!("{}{}{}", self.stem, slot, self.ext))
    }
}

/// The slot a run will use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChoice {
    pub slot: u32,
    pub path: PathBuf,
    pub state: SlotState,
}

/// Walk slots `1..=max_slots` and claim the first acceptable one under
/// `policy`.
///
/// Under `Replace` and `SkipBusy` an existing copy is deleted; a missing
/// file counts the same as a successful removal.
pub fn select_slot(
    fs: &dyn FileSystem,
    layout: &SlotLayout,
    policy: SlotPolicy,
    max_slots: u32,
) -> Result<SlotChoice> {
    if policy == SlotPolicy::Fresh {
        let choice = first_vacant(fs, layout, max_slots)?;
        info!(slot = choice.slot, path = %choice.path.display(), "creating new client copy");
        return Ok(choice);
    }

    for slot in 1..=max_slots {
        let path = layout.path(slot);

        match fs.remove_file(&path) {
            Ok(()) => {
                info!(slot, path = %path.display(), "replacing existing client copy");
                return Ok(SlotChoice {
                    slot,
                    path,
                    state: SlotState::Replaced,
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(slot, path = %path.display(), "creating new client copy");
                return Ok(SlotChoice {
                    slot,
                    path,
                    state: SlotState::Fresh,
                });
            }
            Err(e) if policy == SlotPolicy::SkipBusy => {
                debug!(slot, path = %path.display(), error = %e, "slot busy; trying next");
            }
            Err(source) => {
                return Err(CopyplayError::SlotRemoval { slot, path, source });
            }
        }
    }

    Err(exhausted(layout, max_slots))
}

/// Lowest slot whose file does not exist. Touches nothing.
pub fn peek_slot(fs: &dyn FileSystem, layout: &SlotLayout, max_slots: u32) -> Result<SlotChoice> {
    first_vacant(fs, layout, max_slots)
}

fn first_vacant(fs: &dyn FileSystem, layout: &SlotLayout, max_slots: u32) -> Result<SlotChoice> {
    for slot in 1..=max_slots {
        let path = layout.path(slot);
        if fs.exists(&path) {
            debug!(slot, path = %path.display(), "slot occupied");
            continue;
        }
        return Ok(SlotChoice {
            slot,
            path,
            state: SlotState::Fresh,
        });
    }

    Err(exhausted(layout, max_slots))
}

fn exhausted(layout: &SlotLayout, max_slots: u32) -> CopyplayError {
    CopyplayError::SlotsExhausted {
        stem: layout.stem().to_string(),
        max_slots,
    }
}
