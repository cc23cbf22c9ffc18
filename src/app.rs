use serde::Serialize;

use crate::cli::Cli;
use crate::commands;
use crate::commands::environment::MaterializeSummary;
use crate::config::Environment;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::layout::PatchOutcome;
use crate::output::{self, OutputMode};

#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    #[serde(flatten)]
    pub environment: MaterializeSummary,
    pub css: Option<PatchOutcome>,
}

pub fn run(cli: Cli) -> AppResult<SetupReport> {
    let Cli {
        environment,
        css,
        project_dir,
        json,
        verbose,
    } = cli;

    let environment: Environment = environment.parse()?;
    let ctx = AppContext::bootstrap(&project_dir, json, verbose)?;

    let summary = commands::environment::run(&ctx, environment)?;
    let css = css
        .map(|toggle| commands::css::run(&ctx, toggle))
        .transpose()?;

    let report = SetupReport {
        environment: summary,
        css,
    };
    if ctx.output.mode() == OutputMode::Json {
        output::json::print(&report)?;
    }

    Ok(report)
}
