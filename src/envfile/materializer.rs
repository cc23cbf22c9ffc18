use std::fs;
use std::path::Path;

use crate::config::is_allowed_profile_file;
use crate::error::{AppError, AppResult};

/// Creates the configuration directory when missing. Returns `true` if it had
/// to be created.
pub fn ensure_config_dir(dir: &Path) -> AppResult<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir)?;
    tracing::debug!(dir = %dir.display(), "created config directory");
    Ok(true)
}

/// Entries of `dir` that are not on the profile allow-list, sorted by name.
pub fn unexpected_entries(dir: &Path) -> AppResult<Vec<String>> {
    let mut unexpected = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !is_allowed_profile_file(&name) {
            unexpected.push(name);
        }
    }

    unexpected.sort();
    Ok(unexpected)
}

pub fn check_config_dir(dir: &Path) -> AppResult<()> {
    let files = unexpected_entries(dir)?;
    if files.is_empty() {
        return Ok(());
    }

    Err(AppError::UnexpectedConfigFiles {
        dir: dir.to_path_buf(),
        files,
    })
}

/// Overwrites `dest` with the raw bytes of `profile`.
pub fn copy_profile(profile: &Path, dest: &Path) -> AppResult<u64> {
    let bytes = fs::copy(profile, dest)?;
    tracing::debug!(
        from = %profile.display(),
        to = %dest.display(),
        bytes,
        "copied profile"
    );
    Ok(bytes)
}
