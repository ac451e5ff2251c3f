//! Install command implementation
//!
//! The installation process:
//! 1. Resolve target platforms (flags, interactive menu, or all)
//! 2. Validate flag-supplied model and color before touching any file
//! 3. Confirm overwrites for existing installations
//! 4. Resolve the OpenCode model and color (flags, prompts, or defaults)
//! 5. Render the agent from the template and write it per platform
//!
//! A write failure on one platform does not abort the others; failures are
//! collected and the command fails only when nothing was installed.

use crate::cli::InstallArgs;
use crate::commands::menu;
use crate::error::{NudgeError, Result};
use crate::frontmatter::{self, UpdateSet};
use crate::platform::{self, Paths, Platform};
use crate::progress;
use crate::storage::{FsStorage, Storage};
use crate::template;
use crate::ui;

/// Model and color picked for the OpenCode installation.
struct Appearance {
    /// Empty means "use the platform default" (no `model` field written).
    model: String,
    color: String,
}

/// Run the install command
pub fn run(paths: &Paths, args: InstallArgs) -> Result<()> {
    let storage = FsStorage;
    let interactive = !args.no_tui;

    ui::intro();

    validate_flag_values(&args)?;

    let platforms = resolve_platforms(&args, interactive)?;

    confirm_overwrites(&storage, paths, &platforms, interactive, args.yes)?;

    let appearance = resolve_appearance(&args, interactive)?;

    let template_content = template::load(&storage, args.template.as_deref())?;

    let pb = progress::spinner("Installing Learn agent...");
    let outcomes = install_platforms(&storage, paths, &platforms, &template_content, &appearance);
    pb.finish_and_clear();

    report(paths, &appearance, outcomes)
}

/// Flag-supplied values are checked before any file is written.
fn validate_flag_values(args: &InstallArgs) -> Result<()> {
    if let Some(ref color) = args.color {
        if !frontmatter::is_valid_hex_color(color) {
            return Err(NudgeError::InvalidColor {
                color: color.clone(),
            });
        }
    }
    if let Some(ref model) = args.model {
        if !menu::is_valid_model(model) {
            return Err(NudgeError::InvalidModel {
                model: model.clone(),
            });
        }
    }
    Ok(())
}

fn resolve_platforms(args: &InstallArgs, interactive: bool) -> Result<Vec<Platform>> {
    if !args.platforms.is_empty() {
        return platform::from_ids(&args.platforms);
    }
    if args.all || !interactive {
        return Ok(Platform::ALL.to_vec());
    }
    menu::select_platforms()
}

/// Existing installations are overwritten only after an interactive
/// confirmation; declining cancels the whole operation before any write.
fn confirm_overwrites(
    storage: &dyn Storage,
    paths: &Paths,
    platforms: &[Platform],
    interactive: bool,
    yes: bool,
) -> Result<()> {
    let existing: Vec<Platform> = platforms
        .iter()
        .copied()
        .filter(|p| storage.exists(&p.agent_path(paths)))
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    let names = existing
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");

    if !interactive || yes {
        ui::log_warning(&format!(
            "Learn agent already exists for {names}. Overwriting..."
        ));
        return Ok(());
    }

    let overwrite = menu::confirm(
        &format!("Learn agent already exists for {names}. Overwrite?"),
        false,
    )?;
    if !overwrite {
        return Err(NudgeError::Cancelled);
    }
    Ok(())
}

fn resolve_appearance(args: &InstallArgs, interactive: bool) -> Result<Appearance> {
    let model = match args.model.clone() {
        Some(model) => model,
        None if interactive => menu::select_model()?,
        None => String::new(),
    };
    let color = match args.color.clone() {
        Some(color) => color,
        None if interactive => menu::select_color()?,
        None => menu::DEFAULT_COLOR.to_string(),
    };
    Ok(Appearance { model, color })
}

/// Render the agent document for one platform. Only OpenCode consumes the
/// model/color header fields; other platforms get the template as-is.
fn render_for_platform(
    platform: Platform,
    template_content: &str,
    appearance: &Appearance,
) -> String {
    if !platform.supports_appearance() {
        return template_content.to_string();
    }
    let updates = UpdateSet::new()
        .set("color", appearance.color.as_str())
        .set_or_clear("model", &appearance.model);
    frontmatter::apply(template_content, &updates)
}

fn install_platforms(
    storage: &dyn Storage,
    paths: &Paths,
    platforms: &[Platform],
    template_content: &str,
    appearance: &Appearance,
) -> Vec<(Platform, Result<()>)> {
    platforms
        .iter()
        .map(|&p| {
            let content = render_for_platform(p, template_content, appearance);
            (p, storage.write(&p.agent_path(paths), &content))
        })
        .collect()
}

fn report(
    paths: &Paths,
    appearance: &Appearance,
    outcomes: Vec<(Platform, Result<()>)>,
) -> Result<()> {
    let mut installed = Vec::new();
    let mut failures = Vec::new();

    for (p, outcome) in outcomes {
        match outcome {
            Ok(()) => installed.push(p),
            Err(e) => failures.push((p, e)),
        }
    }

    for (p, e) in &failures {
        ui::log_error(&format!("Failed to install for {}: {e}", p.label()));
    }

    if installed.is_empty() {
        if let Some((_, first)) = failures.into_iter().next() {
            return Err(first);
        }
        return Ok(());
    }

    let mut lines: Vec<(&str, String)> = installed
        .iter()
        .map(|p| (p.label(), p.agent_path(paths).display().to_string()))
        .collect();
    if installed.iter().any(|p| p.supports_appearance()) {
        lines.push(("Color", appearance.color.clone()));
        let model = if appearance.model.is_empty() {
            "OpenCode default".to_string()
        } else {
            appearance.model.clone()
        };
        lines.push(("Model", model));
    }
    ui::note("Configuration", &lines);

    if failures.is_empty() {
        ui::outro("Learn agent installed successfully!");
    } else {
        ui::outro_warn("Learn agent partially installed.");
    }
    Ok(())
}
