//! cssmin - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cssmin::cli::Cli;

/// Environment variable holding the log filter (e.g. `CSSMIN_LOG=debug`).
const LOG_ENV: &str = "CSSMIN_LOG";

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return commands::completions::handle::<Cli>(shell);
    }

    commands::minify::handle(
        cli.input.as_deref(),
        cli.output.as_deref(),
        cli.wrap,
        cli.config.as_deref(),
    )
}

/// Install a stderr logger filtered by `CSSMIN_LOG`; silent when unset.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
