//! File storage behind a small trait with unified error handling.
//!
//! The install/update/uninstall operations only ever read, write, and remove
//! whole files; going through a trait keeps them runnable against any
//! directory tree in tests.

use std::path::Path;

use crate::error::{NudgeError, Result};

pub trait Storage {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, text: &str) -> Result<()>;
    fn remove(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem storage. Parent directories are created on write;
/// path resolution stays with the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| NudgeError::read_failed(path, &e))
    }

    fn write(&self, path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| NudgeError::write_failed(path, &e))?;
        }
        std::fs::write(path, text).map_err(|e| NudgeError::write_failed(path, &e))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|e| NudgeError::IoError {
            message: format!("Failed to remove {}: {e}", path.display()),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
