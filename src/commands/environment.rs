use serde::Serialize;

use crate::config::Environment;
use crate::context::AppContext;
use crate::envfile;
use crate::error::AppResult;
use crate::output::Severity;

#[derive(Debug, Clone, Serialize)]
pub struct MaterializeSummary {
    pub environment: Environment,
    pub profile: String,
    pub destination: String,
    pub variables: usize,
    pub config_dir_created: bool,
}

/// Validates the config directory and installs the selected profile as the
/// root environment file. Nothing is written unless every check passes.
pub fn run(ctx: &AppContext, environment: Environment) -> AppResult<MaterializeSummary> {
    let config_dir = ctx.paths.config_dir();

    let config_dir_created = envfile::ensure_config_dir(config_dir)?;
    if config_dir_created {
        ctx.output.notice(
            Severity::Info,
            &format!(
                "[environment] - config empty, created {}",
                ctx.display_path(config_dir)
            ),
        )?;
    }

    envfile::check_config_dir(config_dir)?;

    let profile_path = ctx.paths.profile_file(environment.profile_file());
    let profile = envfile::load_profile(&profile_path)?;
    if profile.is_empty() {
        ctx.output.notice(
            Severity::Warning,
            &format!(
                "[environment] - {} defines no variables",
                ctx.display_path(&profile_path)
            ),
        )?;
    }

    let destination = ctx.paths.root_env_file();
    envfile::copy_profile(profile.path(), destination)?;

    let destination = ctx.display_path(destination);
    ctx.output
        .notice(Severity::Success, &format!("Created {destination}"))?;

    Ok(MaterializeSummary {
        environment,
        profile: ctx.display_path(profile.path()),
        destination,
        variables: profile.len(),
        config_dir_created,
    })
}
