pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod envfile;
pub mod error;
pub mod layout;
pub mod logging;
pub mod output;

use app::SetupReport;
use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<SetupReport> {
    app::run(cli)
}
