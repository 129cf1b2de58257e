use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Config file name under the XDG config directory.
pub const CONFIG_FILENAME: &str = "init.toml";

/// User settings for `eask init`, read from `init.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: Defaults,
    pub importer: ImporterSettings,
}

/// Default answers offered by the field prompts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub version: String,
    pub emacs_version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            emacs_version: "26.1".to_string(),
        }
    }
}

/// How `--from` sub-importers are launched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImporterSettings {
    pub emacs: String,
    pub lisp_dir: Option<PathBuf>,
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            emacs: "emacs".to_string(),
            lisp_dir: None,
        }
    }
}

impl Settings {
    /// Get the global config path (~/.config/eask/init.toml).
    pub fn global_path() -> Option<PathBuf> {
        let dirs = xdg::BaseDirectories::with_prefix("eask");
        dirs.get_config_home().map(|p| p.join(CONFIG_FILENAME))
    }

    /// Parse settings from TOML content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load settings from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Load settings from `path` if given, else from the global path if it
    /// exists, else fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::global_path() {
            Some(global) if global.exists() => {
                tracing::debug!(path = %global.display(), "loading settings");
                Self::load(&global)
            }
            _ => Ok(Self::default()),
        }
    }
}
