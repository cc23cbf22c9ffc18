use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "env-setup",
    version,
    about = "Select an environment profile and install it as the project .env"
)]
pub struct Cli {
    #[arg(
        short = 'e',
        long,
        default_value = "local",
        help = "Profile alias: local, development|dev|d, production|prod|p"
    )]
    pub environment: String,
    #[arg(short = 'c', long, value_enum, help = "Add or remove the layout css import")]
    pub css: Option<CssToggle>,
    #[arg(long, default_value = ".", help = "Project root directory")]
    pub project_dir: PathBuf,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum CssToggle {
    #[value(aliases = ["y", "on"])]
    Yes,
    #[value(aliases = ["n", "off"])]
    No,
}

impl Cli {
    /// Parses like `try_parse_from`, but drops unknown flags and stray values
    /// instead of failing on them.
    pub fn parse_lenient<I, T>(args: I) -> Result<(Self, Vec<String>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut ignored = Vec::new();

        loop {
            let err = match Self::try_parse_from(&args) {
                Ok(cli) => return Ok((cli, ignored)),
                Err(err) => err,
            };

            if err.kind() != ErrorKind::UnknownArgument {
                return Err(err);
            }
            let Some(ContextValue::String(invalid)) = err.get(ContextKind::InvalidArg) else {
                return Err(err);
            };
            let Some(index) = find_arg(&args, invalid) else {
                return Err(err);
            };

            ignored.push(args.remove(index).to_string_lossy().into_owned());
        }
    }
}

// Skips the program name; matches `--flag` and `--flag=value` spellings.
fn find_arg(args: &[OsString], invalid: &str) -> Option<usize> {
    let with_value = format!("{invalid}=");
    args.iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| {
            let arg = arg.to_string_lossy();
            arg == invalid || (invalid.starts_with('-') && arg.starts_with(&with_value))
        })
        .map(|(index, _)| index)
}
