//! siteswap CLI: analyze and animate vanilla juggling patterns
//!
//! ## Usage
//!
//! ```bash
//! siteswap validate "4, 4, 1"              # Ball count or the reason it fails
//! siteswap analyze "5 6 1" --hands 3       # Orbits and cycle length
//! siteswap sample 3 --canvas 300x300       # Positions on a pixel canvas
//! siteswap presets                         # Built-in example patterns
//! ```

use clap::Parser;
use siteswap_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // File values first, then command-line flags on top
    let config = build_config(&cli)?;
    logging::init(config.verbosity);

    match cli.command {
        Commands::Validate(args) => handlers::execute_validate(&config, &args),
        Commands::Analyze(args) => handlers::execute_analyze(&config, &args),
        Commands::Sample(args) => handlers::execute_sample(&config, &args),
        Commands::Throws(args) => handlers::execute_throws(&config, &args),
        Commands::Presets(args) => handlers::execute_presets(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::new(),
    };

    if let Some(verbosity) = Verbosity::from_flags(cli.quiet, cli.verbose) {
        config = config.with_verbosity(verbosity);
    }
    if let Some(color) = cli.color.clone() {
        config = config.with_color(color.into());
    }
    if let Some(max_balls) = cli.max_balls {
        config = config.with_max_balls(max_balls);
    }
    config.validate()?;
    Ok(config)
}
