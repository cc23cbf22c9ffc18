use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::Settings;

const SETTINGS_FILE: &str = "scripts/setup.json";

/// Every location a setup run touches, resolved against the project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    project_dir: PathBuf,
    config_dir: PathBuf,
    root_env_file: PathBuf,
    layout_file: PathBuf,
}

impl ProjectPaths {
    pub fn resolve(project_dir: &Path, settings: &Settings) -> AppResult<Self> {
        if !project_dir.is_dir() {
            return Err(AppError::Config(format!(
                "project directory {} does not exist",
                project_dir.display()
            )));
        }

        let root_env_file = settings.root_env_file();
        if root_env_file.as_os_str().is_empty() {
            return Err(AppError::Config(
                "root_env_file must not be empty".to_string(),
            ));
        }

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            config_dir: project_dir.join(settings.config_dir()),
            root_env_file: project_dir.join(root_env_file),
            layout_file: project_dir.join(settings.layout_file()),
        })
    }

    pub fn settings_file(project_dir: &Path) -> PathBuf {
        project_dir.join(SETTINGS_FILE)
    }

    pub fn profile_file(&self, file_name: &str) -> PathBuf {
        self.config_dir.join(file_name)
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn root_env_file(&self) -> &Path {
        &self.root_env_file
    }

    pub fn layout_file(&self) -> &Path {
        &self.layout_file
    }
}
