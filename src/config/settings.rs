use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const DEFAULT_CONFIG_DIR: &str = "scripts/config";
const DEFAULT_ROOT_ENV_FILE: &str = ".env";
const DEFAULT_LAYOUT_FILE: &str = "src/routes/__layout.svelte";
const DEFAULT_CSS_MARKER: &str = "// [env-setup] css imports";
const DEFAULT_CSS_IMPORT: &str = "import '../app.css';";

/// Optional per-project overrides read from `scripts/setup.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub config_dir: Option<PathBuf>,
    #[serde(default)]
    pub root_env_file: Option<PathBuf>,
    #[serde(default)]
    pub layout_file: Option<PathBuf>,
    #[serde(default)]
    pub css_marker: Option<String>,
    #[serde(default)]
    pub css_import: Option<String>,
}

impl Settings {
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
    }

    pub fn root_env_file(&self) -> PathBuf {
        self.root_env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_ENV_FILE))
    }

    pub fn layout_file(&self) -> PathBuf {
        self.layout_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LAYOUT_FILE))
    }

    pub fn css_marker(&self) -> &str {
        self.css_marker.as_deref().unwrap_or(DEFAULT_CSS_MARKER)
    }

    pub fn css_import(&self) -> &str {
        self.css_import.as_deref().unwrap_or(DEFAULT_CSS_IMPORT)
    }

    fn validate(&self) -> AppResult<()> {
        if self.css_marker().trim().is_empty() {
            return Err(AppError::Config("css_marker must not be empty".to_string()));
        }
        let import = self.css_import();
        if import.trim().is_empty() {
            return Err(AppError::Config("css_import must not be empty".to_string()));
        }
        if import.trim() != import {
            return Err(AppError::Config(
                "css_import must not have leading or trailing whitespace".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    let settings: Settings = serde_json::from_str(&raw)?;
    settings.validate()?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}
