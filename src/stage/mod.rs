// src/stage/mod.rs

//! Staging the client executable.
//!
//! - [`slot`] picks the numbered destination (`client1.exe`, `client2.exe`, ...).
//! - [`copy`] checks the source and copies it into place.

pub mod copy;
pub mod slot;

pub use copy::{copy_client, ensure_source};
pub use slot::{peek_slot, select_slot, SlotChoice, SlotLayout};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Check the source, claim a slot, then copy the client into it.
pub fn stage_client(fs: &dyn FileSystem, cfg: &ConfigFile) -> Result<SlotChoice> {
    let source = cfg.source_path();
    ensure_source(fs, &source)?;

    let layout = SlotLayout::for_source(&source, cfg.dest_dir())?;
    let choice = select_slot(fs, &layout, cfg.client.slot_policy, cfg.client.max_slots)?;

    copy_client(fs, &source, &choice.path)?;
    Ok(choice)
}
