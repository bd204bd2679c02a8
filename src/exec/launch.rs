// src/exec/launch.rs

//! Spawning the player processes and waiting for them.

use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{info, warn};

use crate::errors::{CopyplayError, Result};
use crate::exec::logs::open_logs;
use crate::exec::plan::PlayerLaunch;

/// How a player process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerExit {
    pub label: String,
    pub pid: Option<u32>,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
}

struct RunningPlayer {
    label: String,
    pid: Option<u32>,
    child: Child,
}

/// Start every player, then wait for all of them.
///
/// All log files are created before the first process starts. Exit statuses
/// are reported, never treated as errors. If a later spawn fails, the
/// players already running are killed when their handles drop.
pub async fn launch_all(launches: &[PlayerLaunch]) -> Result<Vec<PlayerExit>> {
    let mut logs = Vec::with_capacity(launches.len());
    for launch in launches {
        logs.push(open_logs(&launch.logs)?);
    }

    let mut running = Vec::with_capacity(launches.len());
    for (launch, files) in launches.iter().zip(logs) {
        info!(
            player = %launch.label,
            cmd = %launch.command_line(),
            stdout = %launch.logs.stdout.display(),
            stderr = %launch.logs.stderr.display(),
            "starting player process"
        );

        let child = Command::new(&launch.program)
            .args(&launch.args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(files.stdout))
            .stderr(Stdio::from(files.stderr))
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CopyplayError::Spawn {
                player: launch.label.clone(),
                program: launch.program.clone(),
                source,
            })?;

        let pid = child.id();
        info!(player = %launch.label, pid, "player process started");
        running.push(RunningPlayer {
            label: launch.label.clone(),
            pid,
            child,
        });
    }

    let mut exits = Vec::with_capacity(running.len());
    for mut player in running {
        let status = player.child.wait().await?;
        let code = status.code();

        if status.success() {
            info!(player = %player.label, pid = player.pid, exit_code = code.unwrap_or(-1), "player process exited");
        } else {
            warn!(
                player = %player.label,
                pid = player.pid,
                exit_code = code.unwrap_or(-1),
                "player process exited unsuccessfully"
            );
        }

        exits.push(PlayerExit {
            label: player.label,
            pid: player.pid,
            exit_code: code,
            success: status.success(),
        });
    }

    Ok(exits)
}
