//! Common test utilities for nudge integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated config/project tree for integration tests
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Stand-in for the user home directory
    pub config_root: PathBuf,
    /// Stand-in for the project working directory
    pub project_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_root = temp.path().join("home");
        let project_dir = temp.path().join("project");
        std::fs::create_dir_all(&config_root).expect("Failed to create config root");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        Self {
            temp,
            config_root,
            project_dir,
        }
    }

    /// Build a nudge command pointed at this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nudge").expect("Failed to find nudge binary");
        cmd.env("NUDGE_CONFIG_ROOT", &self.config_root);
        cmd.env("NUDGE_PROJECT_DIR", &self.project_dir);
        cmd
    }

    pub fn opencode_agent(&self) -> PathBuf {
        self.config_root
            .join(".config")
            .join("opencode")
            .join("agents")
            .join("learn.md")
    }

    pub fn copilot_agent(&self) -> PathBuf {
        self.project_dir
            .join(".github")
            .join("agents")
            .join("learn.agent.md")
    }

    pub fn claudecode_agent(&self) -> PathBuf {
        self.config_root
            .join(".claude")
            .join("agents")
            .join("learn.md")
    }

    pub fn read(&self, path: &std::path::Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }

    /// Write a custom agent template and return its path
    #[allow(dead_code)]
    pub fn write_template(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join("custom-template.md");
        std::fs::write(&path, content).expect("Failed to write template");
        path
    }
}
