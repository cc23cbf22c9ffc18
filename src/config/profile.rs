use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// File names permitted inside the configuration directory.
pub const ALLOWED_PROFILE_FILES: [&str; 6] = [
    ".env.local",
    ".env.dev",
    ".env.development",
    ".env.prod",
    ".env.production",
    ".env.test",
];

pub fn is_allowed_profile_file(name: &str) -> bool {
    ALLOWED_PROFILE_FILES.contains(&name)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Development,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Name of the profile file inside the configuration directory.
    pub fn profile_file(self) -> &'static str {
        match self {
            Self::Local => ".env.local",
            Self::Development => ".env.development",
            Self::Production => ".env.production",
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(alias: &str) -> Result<Self, Self::Err> {
        match alias {
            "dev" | "development" | "d" => Ok(Self::Development),
            "prod" | "production" | "p" => Ok(Self::Production),
            "local" => Ok(Self::Local),
            _ => Err(AppError::InvalidEnvironment(alias.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
