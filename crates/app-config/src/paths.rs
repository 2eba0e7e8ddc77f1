//! File system paths for the Medibook apps.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Manages file system paths for the app.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for runtime files (~/.medibook)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.medibook`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".medibook"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.medibook).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.medibook/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the remembered-session file path (~/.medibook/session.json).
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the central log file path (~/.medibook/logs/dev.jsonl).
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("logs").join("dev.jsonl")
    }

    /// Ensure the base directory exists.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}
