use serde::Serialize;

use crate::error::AppResult;

pub fn render<T: Serialize>(report: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn print<T: Serialize>(report: &T) -> AppResult<()> {
    println!("{}", render(report)?);
    Ok(())
}
