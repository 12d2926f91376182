//! Throws command handler.

use siteswap::Throw;

use crate::commands::{OutputFormat, ThrowsArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::{load_pattern, reporter};
use crate::output::print_json;

/// Longest throw listing the command will produce.
pub const MAX_THROWS: usize = 1_000_000;

/// First `count` throws of the endless throw sequence.
pub fn first_throws(pattern: &siteswap::SiteSwap, count: usize) -> CliResult<Vec<Throw>> {
    if count > MAX_THROWS {
        return Err(CliError::invalid_argument(format!(
            "--count {count} is too large; the limit is {MAX_THROWS}"
        )));
    }
    Ok(pattern.throws().take(count).collect())
}

/// Execute the throws command.
pub fn execute_throws(config: &CliConfig, args: &ThrowsArgs) -> CliResult<()> {
    let pattern = load_pattern(config, &args.pattern)?;
    let throws = first_throws(&pattern, args.count)?;
    match args.format {
        OutputFormat::Json => print_json(&throws)?,
        OutputFormat::Text => {
            let out = reporter(config);
            for (beat, throw) in throws.iter().enumerate() {
                out.line(&format!(
                    "beat {beat:>4}  index {:>3}  height {}",
                    throw.index, throw.height
                ));
            }
        }
    }
    Ok(())
}
