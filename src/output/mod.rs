pub mod json;
pub mod text;

use crate::error::AppResult;

pub use text::Severity;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Progress notices only show in text mode; JSON mode prints one report.
    pub fn notice(&self, severity: Severity, message: &str) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_notice(severity, message),
            OutputMode::Json => Ok(()),
        }
    }
}
