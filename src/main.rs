use clap::error::ErrorKind;
use env_setup::cli::Cli;
use env_setup::output::text;

fn main() {
    let (cli, ignored) = match Cli::parse_lenient(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    };

    env_setup::logging::init(cli.verbose);
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "ignored unknown arguments");
    }

    if let Err(err) = env_setup::run(cli) {
        println!("{}", text::render_error(&err));
        std::process::exit(1);
    }
}
