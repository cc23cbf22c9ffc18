use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Variables parsed from a profile file, in file order.
#[derive(Debug, Clone)]
pub struct EnvProfile {
    path: PathBuf,
    vars: Vec<(String, String)>,
}

impl EnvProfile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Parses `KEY=value` pairs from a dotenv-style file without touching the
/// process environment.
pub fn load_profile(path: &Path) -> AppResult<EnvProfile> {
    let iter = dotenvy::from_path_iter(path).map_err(|err| map_dotenv_error(path, err))?;

    let mut vars = Vec::new();
    for item in iter {
        vars.push(item.map_err(|err| map_dotenv_error(path, err))?);
    }

    tracing::debug!(
        path = %path.display(),
        keys = ?vars.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        "parsed profile"
    );

    Ok(EnvProfile {
        path: path.to_path_buf(),
        vars,
    })
}

// Messages never echo the offending line: profiles hold secrets.
fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> AppError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            AppError::ProfileNotFound { path }
        }
        dotenvy::Error::Io(io_err) => AppError::ProfileLoad {
            path,
            message: io_err.to_string(),
        },
        dotenvy::Error::LineParse(_, index) => AppError::ProfileLoad {
            path,
            message: format!("malformed entry at character {index}"),
        },
        dotenvy::Error::EnvVar(var_err) => AppError::ProfileLoad {
            path,
            message: var_err.to_string(),
        },
        _ => AppError::ProfileLoad {
            path,
            message: "unrecognized dotenv error".to_string(),
        },
    }
}
