// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod stage;
pub mod types;

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::{build_launches, launch_all, PlayerExit};
use crate::fs::{FileSystem, RealFileSystem};
use crate::stage::{peek_slot, stage_client, SlotChoice, SlotLayout};
use crate::types::SlotPolicy;

/// What a finished run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub slot: SlotChoice,
    pub players: Vec<PlayerExit>,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + CLI overrides)
/// - staging the client into a numbered slot
/// - launching the players and waiting for them
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = config::resolve(&args)?;
    let fs = RealFileSystem;

    if args.dry_run {
        render_dry_run(&fs, &cfg, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let summary = play(&fs, &cfg).await?;
    info!(
        slot = summary.slot.slot,
        players = summary.players.len(),
        failed = summary.players.iter().filter(|p| !p.success).count(),
        "all players finished"
    );
    Ok(())
}

/// Stage the client, then start every player against the server and wait.
pub async fn play(fs: &dyn FileSystem, cfg: &ConfigFile) -> Result<RunSummary> {
    let slot = stage_client(fs, cfg)?;

    let launches = build_launches(cfg, &slot.path, slot.slot);
    let players = launch_all(&launches).await?;

    Ok(RunSummary { slot, players })
}

/// Write the resolved plan to `out`. The slot shown is the lowest vacant
/// one; a real run under `replace` may reuse an occupied slot instead.
///
/// Only probes `fs`; nothing is created or removed.
pub fn render_dry_run(fs: &dyn FileSystem, cfg: &ConfigFile, out: &mut impl Write) -> Result<()> {
    let source = cfg.source_path();
    let layout = SlotLayout::for_source(&source, cfg.dest_dir())?;
    let slot = peek_slot(fs, &layout, cfg.client.max_slots)?;

    writeln!(out, "copyplay dry-run")?;
    writeln!(out, "  client.source = {}", source.display())?;
    if !fs.is_file(&source) {
        writeln!(out, "    (missing: a real run would fail)")?;
    }
    writeln!(out, "  client.dest_dir = {}", layout.dir().display())?;
    writeln!(out, "  client.slot_policy = {}", cfg.client.slot_policy)?;
    writeln!(out, "  client.max_slots = {}", cfg.client.max_slots)?;
    writeln!(out, "  next vacant slot = {} ({})", slot.slot, slot.path.display())?;
    if cfg.client.slot_policy != SlotPolicy::Fresh {
        writeln!(
            out,
            "    (a {} run may reuse a lower, occupied slot)",
            cfg.client.slot_policy
        )?;
    }
    writeln!(out)?;

    let launches = build_launches(cfg, &slot.path, slot.slot);
    writeln!(out, "players ({}):", launches.len())?;
    for launch in &launches {
        writeln!(out, "  - {}", launch.label)?;
        writeln!(out, "      cmd: {}", launch.command_line())?;
        write_log_path(out, "stdout", &launch.logs.stdout)?;
        write_log_path(out, "stderr", &launch.logs.stderr)?;
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

fn write_log_path(out: &mut impl Write, stream: &str, path: &Path) -> Result<()> {
    writeln!(out, "      {stream}: {}", path.display())?;
    Ok(())
}
