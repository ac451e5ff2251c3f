//! Supported platforms and their agent file locations.
//!
//! Each platform consumes the Learn agent from its own configuration
//! directory. Locations are resolved against an explicit [`Paths`] value
//! rather than process-wide state, so every operation (and every test) can
//! point the tool at any directory tree.

use std::path::PathBuf;

use crate::error::{NudgeError, Result};

/// A platform the Learn agent can be installed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    OpenCode,
    Copilot,
    ClaudeCode,
}

/// Base directories agent paths are resolved against.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root for user-level configuration (defaults to the home directory).
    pub config_root: PathBuf,
    /// Root for project-level configuration (defaults to the working directory).
    pub project_dir: PathBuf,
}

impl Paths {
    /// Resolve base directories from optional overrides.
    pub fn resolve(config_root: Option<PathBuf>, project_dir: Option<PathBuf>) -> Result<Self> {
        let config_root = match config_root {
            Some(root) => root,
            None => dirs::home_dir().ok_or_else(|| NudgeError::IoError {
                message: "Could not determine home directory".to_string(),
            })?,
        };
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| NudgeError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };
        Ok(Self {
            config_root,
            project_dir,
        })
    }
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::OpenCode, Platform::Copilot, Platform::ClaudeCode];

    pub fn id(self) -> &'static str {
        match self {
            Platform::OpenCode => "opencode",
            Platform::Copilot => "copilot",
            Platform::ClaudeCode => "claudecode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::OpenCode => "OpenCode",
            Platform::Copilot => "GitHub Copilot",
            Platform::ClaudeCode => "Claude Code",
        }
    }

    /// Where the installed Learn agent lives for this platform.
    pub fn agent_path(self, paths: &Paths) -> PathBuf {
        match self {
            Platform::OpenCode => paths
                .config_root
                .join(".config")
                .join("opencode")
                .join("agents")
                .join("learn.md"),
            Platform::Copilot => paths
                .project_dir
                .join(".github")
                .join("agents")
                .join("learn.agent.md"),
            Platform::ClaudeCode => paths
                .config_root
                .join(".claude")
                .join("agents")
                .join("learn.md"),
        }
    }

    /// Only OpenCode reads the `model` and `color` header fields; the other
    /// platforms receive the template with its header untouched.
    pub fn supports_appearance(self) -> bool {
        matches!(self, Platform::OpenCode)
    }

    pub fn parse(id: &str) -> Result<Platform> {
        match id {
            "opencode" => Ok(Platform::OpenCode),
            "copilot" => Ok(Platform::Copilot),
            "claudecode" => Ok(Platform::ClaudeCode),
            other => Err(NudgeError::PlatformNotSupported {
                platform: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolve `--to` values to platforms; empty input means all platforms.
pub fn from_ids(ids: &[String]) -> Result<Vec<Platform>> {
    if ids.is_empty() {
        return Ok(Platform::ALL.to_vec());
    }
    ids.iter().map(|id| Platform::parse(id)).collect()
}

/// Platforms whose agent file currently exists.
pub fn detect_installed(paths: &Paths) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|platform| platform.agent_path(paths).exists())
        .collect()
}
