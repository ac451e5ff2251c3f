//! Update command implementation
//!
//! Re-renders every installed Learn agent from the (possibly overridden)
//! template. The existing OpenCode model and color settings are preserved
//! with `--preserve-config` or after an interactive confirmation; otherwise
//! the user picks new ones.

use crate::cli::UpdateArgs;
use crate::commands::menu;
use crate::error::{NudgeError, Result};
use crate::frontmatter::{self, UpdateSet};
use crate::platform::{self, Paths, Platform};
use crate::progress;
use crate::storage::{FsStorage, Storage};
use crate::template;
use crate::ui;

/// Run the update command
pub fn run(paths: &Paths, args: UpdateArgs) -> Result<()> {
    let storage = FsStorage;
    let interactive = !args.no_tui;

    ui::intro();

    let installed = platform::detect_installed(paths);
    if installed.is_empty() {
        return Err(NudgeError::AgentNotInstalled);
    }

    let (model, color) = resolve_settings(&storage, paths, &args, interactive)?;

    let template_content = template::load(&storage, args.template.as_deref())?;

    let pb = progress::spinner("Updating Learn agent...");
    let outcomes: Vec<(Platform, Result<()>)> = installed
        .iter()
        .map(|&p| {
            let content = render(p, &template_content, &model, &color);
            (p, storage.write(&p.agent_path(paths), &content))
        })
        .collect();
    pb.finish_and_clear();

    report(paths, &model, &color, outcomes)
}

/// Read the current OpenCode settings and decide whether to keep them.
fn resolve_settings(
    storage: &dyn Storage,
    paths: &Paths,
    args: &UpdateArgs,
    interactive: bool,
) -> Result<(String, String)> {
    let (current_model, current_color) = current_opencode_settings(storage, paths);

    if args.preserve_config || !interactive {
        ui::log_info("Preserving existing configuration:");
        ui::log_info(&format!(
            "  Model: {}",
            if current_model.is_empty() {
                "OpenCode default"
            } else {
                current_model.as_str()
            }
        ));
        ui::log_info(&format!("  Color: {current_color}"));
        return Ok((current_model, current_color));
    }

    let keep = menu::confirm(
        "Do you want to keep your current model and color settings?",
        true,
    )?;
    if keep {
        return Ok((current_model, current_color));
    }

    let model = menu::select_model()?;
    let color = menu::select_color()?;
    Ok((model, color))
}

fn current_opencode_settings(storage: &dyn Storage, paths: &Paths) -> (String, String) {
    let agent_path = Platform::OpenCode.agent_path(paths);
    let Ok(content) = storage.read(&agent_path) else {
        return (String::new(), menu::DEFAULT_COLOR.to_string());
    };
    let (fm, _) = frontmatter::parse(&content);
    let model = fm.get_str("model").unwrap_or_default();
    let color = fm
        .get_str("color")
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| menu::DEFAULT_COLOR.to_string());
    (model, color)
}

fn render(platform: Platform, template_content: &str, model: &str, color: &str) -> String {
    if !platform.supports_appearance() {
        return template_content.to_string();
    }
    let updates = UpdateSet::new()
        .set("color", color)
        .set_or_clear("model", model);
    frontmatter::apply(template_content, &updates)
}

fn report(
    paths: &Paths,
    model: &str,
    color: &str,
    outcomes: Vec<(Platform, Result<()>)>,
) -> Result<()> {
    let mut updated = Vec::new();
    let mut failures = Vec::new();

    for (p, outcome) in outcomes {
        match outcome {
            Ok(()) => updated.push(p),
            Err(e) => failures.push((p, e)),
        }
    }

    for (p, e) in &failures {
        ui::log_error(&format!("Failed to update for {}: {e}", p.label()));
    }

    if updated.is_empty() {
        if let Some((_, first)) = failures.into_iter().next() {
            return Err(first);
        }
        return Ok(());
    }

    let mut lines: Vec<(&str, String)> = updated
        .iter()
        .map(|p| (p.label(), p.agent_path(paths).display().to_string()))
        .collect();
    if updated.iter().any(|p| p.supports_appearance()) {
        lines.push(("Color", color.to_string()));
        let model_line = if model.is_empty() {
            "OpenCode default".to_string()
        } else {
            model.to_string()
        };
        lines.push(("Model", model_line));
    }
    ui::note("Configuration", &lines);

    if failures.is_empty() {
        ui::outro("Learn agent has been updated to the latest version.");
    } else {
        ui::outro_warn("Learn agent partially updated.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_paths(root: &Path) -> Paths {
        Paths {
            config_root: root.to_path_buf(),
            project_dir: root.join("project"),
        }
    }

    #[test]
    fn test_current_settings_from_installed_agent() {
        let temp = TempDir::new().unwrap();
        let paths = test_paths(temp.path());
        let agent_path = Platform::OpenCode.agent_path(&paths);
        FsStorage
            .write(
                &agent_path,
                "---\nname: learn\ncolor: \"#10B981\"\nmodel: openai/gpt-4o\n---\n",
            )
            .unwrap();

        let (model, color) = current_opencode_settings(&FsStorage, &paths);
        assert_eq!(model, "openai/gpt-4o");
        assert_eq!(color, "#10B981");
    }

    #[test]
    fn test_current_settings_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let paths = test_paths(temp.path());

        let (model, color) = current_opencode_settings(&FsStorage, &paths);
        assert_eq!(model, "");
        assert_eq!(color, menu::DEFAULT_COLOR);
    }

    #[test]
    fn test_render_preserves_body() {
        let rendered = render(
            Platform::OpenCode,
            "---\nname: learn\n---\nMentor body.\n",
            "",
            "#14B8A6",
        );
        let (fm, body) = frontmatter::parse(&rendered);
        assert_eq!(fm.get_str("color").as_deref(), Some("#14B8A6"));
        assert_eq!(body, "Mentor body.\n");
    }
}
