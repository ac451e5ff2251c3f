//! Uninstall command implementation
//!
//! Detects which platforms have the Learn agent installed, confirms with the
//! user, and removes each agent file. Removal failures on one platform do
//! not stop the others; the command fails only when nothing was removed.

use crate::cli::UninstallArgs;
use crate::error::{NudgeError, Result};
use crate::commands::menu;
use crate::platform::{self, Paths, Platform};
use crate::progress;
use crate::storage::{FsStorage, Storage};
use crate::ui;

/// Run the uninstall command
pub fn run(paths: &Paths, args: UninstallArgs) -> Result<()> {
    let storage = FsStorage;

    ui::intro();

    let installations = platform::detect_installed(paths);
    if installations.is_empty() {
        ui::log_warning("Learn agent is not installed on any platform.");
        ui::outro("Nothing to uninstall.");
        return Ok(());
    }

    ui::log_info("Found Learn agent installations:");
    for p in &installations {
        ui::log_info(&format!(
            "  {}: {}",
            p.label(),
            p.agent_path(paths).display()
        ));
    }

    if !args.force {
        let what = if installations.len() == 1 {
            "this installation"
        } else {
            "all installations"
        };
        let proceed = menu::confirm(&format!("Remove {what}?"), false)?;
        if !proceed {
            return Err(NudgeError::Cancelled);
        }
    }

    let pb = progress::spinner("Removing Learn agent...");
    let outcomes: Vec<(Platform, Result<()>)> = installations
        .iter()
        .map(|&p| (p, storage.remove(&p.agent_path(paths))))
        .collect();
    pb.finish_and_clear();

    report(outcomes)
}

fn report(outcomes: Vec<(Platform, Result<()>)>) -> Result<()> {
    let total = outcomes.len();
    let mut removed = Vec::new();
    let mut failures = Vec::new();

    for (p, outcome) in outcomes {
        match outcome {
            Ok(()) => removed.push(p),
            Err(e) => failures.push((p, e)),
        }
    }

    if !removed.is_empty() {
        let names = removed
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ");
        ui::log_success(&format!("Removed from: {names}"));
    }

    for (p, e) in &failures {
        ui::log_error(&format!("Failed to remove from {}: {e}", p.label()));
    }

    if removed.len() == total {
        ui::outro("Learn agent removed from all platforms.");
        Ok(())
    } else if !removed.is_empty() {
        ui::outro_warn("Learn agent partially removed.");
        Ok(())
    } else {
        match failures.into_iter().next() {
            Some((_, first)) => Err(first),
            None => Ok(()),
        }
    }
}
