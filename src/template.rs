//! Agent template resolution.
//!
//! The Learn agent document ships compiled into the binary. A `--template`
//! override loads a replacement from disk instead, which is the one place a
//! missing template can surface as an error.

use std::path::Path;

use crate::error::{NudgeError, Result};
use crate::storage::Storage;

/// The built-in Learn agent document.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/learn.md");

/// Load the agent template, preferring an on-disk override when given.
pub fn load(storage: &dyn Storage, override_path: Option<&Path>) -> Result<String> {
    match override_path {
        Some(path) => {
            if !storage.exists(path) {
                return Err(NudgeError::TemplateNotFound {
                    path: path.display().to_string(),
                });
            }
            storage.read(path)
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter;
    use crate::storage::FsStorage;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_has_frontmatter() {
        let (fm, body) = frontmatter::parse(DEFAULT_TEMPLATE);
        assert_eq!(fm.get_str("name").as_deref(), Some("learn"));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_load_default() {
        let content = load(&FsStorage, None).unwrap();
        assert_eq!(content, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_load_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.md");
        std::fs::write(&path, "---\nname: learn\n---\nCustom body.\n").unwrap();

        let content = load(&FsStorage, Some(&path)).unwrap();
        assert!(content.contains("Custom body."));
    }

    #[test]
    fn test_load_missing_override_fails() {
        let temp = TempDir::new().unwrap();
        let err = load(&FsStorage, Some(&temp.path().join("missing.md"))).unwrap_err();
        assert!(matches!(err, NudgeError::TemplateNotFound { .. }));
    }
}
