use console::style;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_notice(severity: Severity, message: &str) -> AppResult<()> {
    print_line(&render_notice(severity, message))
}

pub fn render_notice(severity: Severity, message: &str) -> String {
    match severity {
        Severity::Info | Severity::Warning => style(message).yellow().to_string(),
        Severity::Error => style(message).red().to_string(),
        Severity::Success => format!("{} {message}", style("Success!").green()),
    }
}

/// Fatal diagnostic line: `[scope] - message. hint`.
pub fn render_error(err: &AppError) -> String {
    let head = style(format!("[{}] - {err}", err.scope())).red();
    match err.hint() {
        Some(hint) => format!("{head}. {hint}"),
        None => head.to_string(),
    }
}
