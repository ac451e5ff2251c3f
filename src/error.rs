//! Error types and handling for nudge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for nudge operations
#[derive(Error, Diagnostic, Debug)]
pub enum NudgeError {
    #[error("Agent template not found: {path}")]
    #[diagnostic(
        code(nudge::template::not_found),
        help("Check the path given with --template, or omit it to use the built-in template")
    )]
    TemplateNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(nudge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(nudge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(nudge::fs::io_error))]
    IoError { message: String },

    #[error("Invalid hex color: {color}")]
    #[diagnostic(
        code(nudge::validate::color),
        help("Use the #RRGGBB format, e.g. #14B8A6")
    )]
    InvalidColor { color: String },

    #[error("Invalid model identifier: {model}")]
    #[diagnostic(
        code(nudge::validate::model),
        help("Use the provider/model-name format, e.g. anthropic/claude-sonnet-4")
    )]
    InvalidModel { model: String },

    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(nudge::platform::not_supported),
        help("Supported platforms: opencode, copilot, claudecode")
    )]
    PlatformNotSupported { platform: String },

    #[error("Learn agent is not installed on any platform")]
    #[diagnostic(
        code(nudge::agent::not_installed),
        help("Run 'nudge install' to install it first")
    )]
    AgentNotInstalled,

    #[error("Operation cancelled")]
    #[diagnostic(code(nudge::cancelled))]
    Cancelled,
}

impl NudgeError {
    pub fn read_failed(path: &std::path::Path, err: &std::io::Error) -> Self {
        NudgeError::FileReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn write_failed(path: &std::path::Path, err: &std::io::Error) -> Self {
        NudgeError::FileWriteFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for NudgeError {
    fn from(err: std::io::Error) -> Self {
        NudgeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for NudgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => NudgeError::Cancelled,
            other => NudgeError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NudgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NudgeError::TemplateNotFound {
            path: "/tmp/learn.md".to_string(),
        };
        assert_eq!(err.to_string(), "Agent template not found: /tmp/learn.md");
    }

    #[test]
    fn test_error_code() {
        let err = NudgeError::InvalidColor {
            color: "#14B8A".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("nudge::validate::color".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NudgeError = io_err.into();
        assert!(matches!(err, NudgeError::IoError { .. }));
    }

    #[test]
    fn test_prompt_cancel_maps_to_cancelled() {
        let err: NudgeError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, NudgeError::Cancelled));
    }

    #[test]
    fn test_platform_not_supported_message() {
        let err = NudgeError::PlatformNotSupported {
            platform: "zed".to_string(),
        };
        assert!(err.to_string().contains("zed"));
    }
}
