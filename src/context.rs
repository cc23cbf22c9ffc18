use std::path::Path;

use crate::config::{self, ProjectPaths, Settings};
use crate::error::AppResult;
use crate::layout::LayoutPatcher;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: ProjectPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(project_dir: &Path, json: bool, verbose: u8) -> AppResult<Self> {
        let settings = config::load_settings(project_dir)?;
        let paths = ProjectPaths::resolve(project_dir, &settings)?;
        let output = Output::new(json);

        tracing::debug!(
            config_dir = %paths.config_dir().display(),
            root_env_file = %paths.root_env_file().display(),
            "resolved project paths"
        );

        Ok(Self {
            verbose,
            paths,
            settings,
            output,
        })
    }

    pub fn layout_patcher(&self) -> LayoutPatcher {
        LayoutPatcher::new(
            self.paths.layout_file().to_path_buf(),
            self.settings.css_marker(),
            self.settings.css_import(),
        )
    }

    /// Path as shown to the user, relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.paths.project_dir())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
