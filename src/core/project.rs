//! Workspace discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::store::FileStore;

/// Represents a Quill workspace
#[derive(Debug)]
pub struct Project {
    /// Root directory of the workspace (parent of .quill/)
    root: PathBuf,
}

impl Project {
    /// Find the workspace root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current =
            std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            if current.join(".quill").is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new workspace structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let quill_dir = root.join(".quill");
        if quill_dir.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    /// Force initialization even if .quill/ exists
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    fn create_structure(root: &Path) -> Result<(), ProjectError> {
        let quill_dir = root.join(".quill");
        std::fs::create_dir_all(&quill_dir)
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::write(quill_dir.join("config.yaml"), Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        std::fs::create_dir_all(root.join("data"))
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# Quill Workspace Configuration

# Editor to use for `quill chapter edit` (default: $EDITOR)
# editor: ""

# Date format for note timestamps (chrono strftime syntax)
# date_format: "%d/%m/%Y"

# Default output format (auto, json, yaml, tsv, id)
# default_format: auto
"#
    }

    /// Get the workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .quill configuration directory
    pub fn quill_dir(&self) -> PathBuf {
        self.root.join(".quill")
    }

    /// Get the directory holding the persisted slots
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Open the slot store for this workspace
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }
}

/// Errors that can occur during workspace operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not a Quill workspace (searched from {searched_from:?}). Run 'quill init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("Quill workspace already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}
