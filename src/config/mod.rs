pub mod paths;
pub mod profile;
pub mod settings;

pub use paths::ProjectPaths;
pub use profile::{ALLOWED_PROFILE_FILES, Environment, is_allowed_profile_file};
pub use settings::Settings;

use std::path::Path;

use crate::error::AppResult;

pub fn load_settings(project_dir: &Path) -> AppResult<Settings> {
    settings::load(ProjectPaths::settings_file(project_dir))
}
