// src/config.rs - Editor-facing configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::SupportError;

/// Indentation settings threaded into every resolver call.
///
/// Kept as an explicit value rather than process-wide state so resolution
/// stays pure and testable with any width.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndentConfig {
    /// Columns per indent step.
    pub indent_width: usize,
    /// Emit spaces when materializing indentation; tabs otherwise.
    pub use_spaces: bool,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_spaces: true,
        }
    }
}

impl IndentConfig {
    /// Leading whitespace for a line that should sit at `columns`.
    pub fn leading_whitespace(&self, columns: usize) -> String {
        if self.use_spaces {
            " ".repeat(columns)
        } else {
            "\t".repeat(columns / self.indent_width.max(1))
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub indent: IndentConfig,
    /// Optional runtime override for the highlight query file.
    pub highlight_query_path: Option<String>,
}

impl EditorConfig {
    pub fn from_file(path: &Path) -> Result<Self, SupportError> {
        let content = std::fs::read_to_string(path).map_err(|e| SupportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: EditorConfig =
            toml::from_str(&content).map_err(|e| SupportError::Config {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// Load from the platform config directory, falling back to defaults
    /// when no file exists.
    pub fn load_default() -> Result<Self, SupportError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tspedit").join("config.toml"))
}
