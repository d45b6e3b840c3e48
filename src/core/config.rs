//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::Project;

/// Default strftime format for note dates
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Quill configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor command for `quill chapter edit`
    pub editor: Option<String>,

    /// strftime format for note creation dates
    pub date_format: Option<String>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/quill/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Workspace config (.quill/config.yaml)
        if let Ok(project) = Project::discover() {
            let project_config_path = project.quill_dir().join("config.yaml");
            if project_config_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&project_config_path) {
                    if let Ok(project_config) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(project_config);
                    }
                }
            }
        }

        // 4. Environment variables
        if let Ok(editor) = std::env::var("QUILL_EDITOR") {
            config.editor = Some(editor);
        }
        if let Ok(fmt) = std::env::var("QUILL_DATE_FORMAT") {
            config.date_format = Some(fmt);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "quill")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.editor.is_some() {
            self.editor = other.editor;
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Get the editor command
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }

    /// Get the date format for note timestamps
    pub fn date_format(&self) -> String {
        self.date_format
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string())
    }

    /// Run the editor on a file, properly handling commands with arguments
    /// (e.g., "emacsclient -nw" or "code --wait")
    pub fn run_editor(
        &self,
        file_path: &std::path::Path,
    ) -> std::io::Result<std::process::ExitStatus> {
        let editor = self.editor();
        let parts: Vec<&str> = editor.split_whitespace().collect();

        if parts.is_empty() {
            return std::process::Command::new("vi").arg(file_path).status();
        }

        std::process::Command::new(parts[0])
            .args(&parts[1..])
            .arg(file_path)
            .status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_other_takes_precedence() {
        let mut base = Config {
            editor: Some("vi".to_string()),
            ..Default::default()
        };
        base.merge(Config {
            editor: Some("hx".to_string()),
            date_format: Some("%Y-%m-%d".to_string()),
            default_format: None,
        });
        assert_eq!(base.editor.as_deref(), Some("hx"));
        assert_eq!(base.date_format.as_deref(), Some("%Y-%m-%d"));
    }

    #[test]
    fn test_date_format_default() {
        let config = Config::default();
        assert_eq!(config.date_format(), DEFAULT_DATE_FORMAT);
    }
}
