//! Interactive selection menus for models, colors, and platforms.

use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

use crate::error::Result;
use crate::frontmatter::is_valid_hex_color;
use crate::platform::Platform;

/// Default color for the Learn agent (OpenCode only).
pub const DEFAULT_COLOR: &str = "#14B8A6";

/// Known model choices offered before the custom-entry option.
const MODEL_OPTIONS: &[&str] = &[
    "anthropic/claude-sonnet-4",
    "anthropic/claude-opus-4",
    "openai/gpt-4o",
    "google/gemini-2.0-flash",
];

/// Known color choices offered before the custom-entry option.
const COLOR_OPTIONS: &[(&str, &str)] = &[
    ("#14B8A6", "Teal"),
    ("#10B981", "Emerald"),
    ("#06B6D4", "Cyan"),
    ("#0EA5E9", "Sky Blue"),
];

/// A model identifier is provider/model-name.
pub fn is_valid_model(model: &str) -> bool {
    model.contains('/')
}

/// Select a model for the Learn agent. An empty return value means
/// "use the platform default".
pub fn select_model() -> Result<String> {
    let mut options = vec!["Use platform default (recommended)".to_string()];
    options.extend(MODEL_OPTIONS.iter().map(|m| (*m).to_string()));
    options.push("Enter custom model".to_string());
    let custom_index = options.len() - 1;

    let choice = Select::new("Select a model for the Learn agent", options.clone())
        .with_starting_cursor(0)
        .prompt()?;

    let index = options
        .iter()
        .position(|opt| *opt == choice)
        .unwrap_or(0);

    if index == 0 {
        return Ok(String::new());
    }
    if index == custom_index {
        return prompt_custom_model();
    }
    Ok(MODEL_OPTIONS[index - 1].to_string())
}

fn prompt_custom_model() -> Result<String> {
    let model = Text::new("Enter the model identifier")
        .with_placeholder("provider/model-name")
        .with_validator(|input: &str| {
            if input.is_empty() {
                return Ok(Validation::Invalid("Model identifier is required".into()));
            }
            if !is_valid_model(input) {
                return Ok(Validation::Invalid(
                    "Model should be in format: provider/model-name".into(),
                ));
            }
            Ok(Validation::Valid)
        })
        .prompt()?;
    Ok(model)
}

/// Select a color for the Learn agent.
pub fn select_color() -> Result<String> {
    let mut options: Vec<String> = COLOR_OPTIONS
        .iter()
        .map(|(value, name)| format!("{name} ({value})"))
        .collect();
    options.push("Enter custom hex color".to_string());
    let custom_index = options.len() - 1;

    let choice = Select::new("Select a color for the Learn agent", options.clone())
        .with_starting_cursor(0)
        .prompt()?;

    let index = options
        .iter()
        .position(|opt| *opt == choice)
        .unwrap_or(0);

    if index == custom_index {
        return prompt_custom_color();
    }
    Ok(COLOR_OPTIONS[index].0.to_string())
}

fn prompt_custom_color() -> Result<String> {
    let color = Text::new("Enter the hex color")
        .with_placeholder(DEFAULT_COLOR)
        .with_validator(|input: &str| {
            if !is_valid_hex_color(input) {
                return Ok(Validation::Invalid(
                    "Invalid hex color format. Use #RRGGBB".into(),
                ));
            }
            Ok(Validation::Valid)
        })
        .prompt()?;
    Ok(color)
}

/// Select target platforms for installation.
pub fn select_platforms() -> Result<Vec<Platform>> {
    let mut options = vec!["All platforms (recommended)".to_string()];
    options.extend(Platform::ALL.iter().map(|p| format!("{} only", p.label())));

    let choice = Select::new("Where should the Learn agent be installed?", options.clone())
        .with_starting_cursor(0)
        .prompt()?;

    let index = options
        .iter()
        .position(|opt| *opt == choice)
        .unwrap_or(0);

    if index == 0 {
        Ok(Platform::ALL.to_vec())
    } else {
        Ok(vec![Platform::ALL[index - 1]])
    }
}

/// Ask a yes/no question.
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new(message).with_default(default).prompt()?;
    Ok(answer)
}
