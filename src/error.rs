use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("\"{0}\" is not a valid environment")]
    InvalidEnvironment(String),
    #[error("unexpected files in {}: {}", dir.display(), files.join(", "))]
    UnexpectedConfigFiles { dir: PathBuf, files: Vec<String> },
    #[error("\"{}\" is not found", path.display())]
    ProfileNotFound { path: PathBuf },
    #[error("failed to load \"{}\": {message}", path.display())]
    ProfileLoad { path: PathBuf, message: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Tag printed in front of the diagnostic, naming the stage that failed.
    pub fn scope(&self) -> &'static str {
        match self {
            Self::InvalidEnvironment(_) => "cli",
            Self::UnexpectedConfigFiles { .. }
            | Self::ProfileNotFound { .. }
            | Self::ProfileLoad { .. } => "environment",
            Self::Config(_) | Self::Json(_) => "config",
            Self::Io(_) => "io",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidEnvironment(_) => {
                Some("expected one of: local, development, dev, d, production, prod, p")
            }
            Self::ProfileNotFound { .. } | Self::ProfileLoad { .. } => {
                Some("Please fix the environment variable and try again.")
            }
            Self::UnexpectedConfigFiles { .. } => Some(concat!(
                "only .env.local, .env.dev, .env.development, .env.prod, ",
                ".env.production and .env.test are allowed"
            )),
            _ => None,
        }
    }
}
