//! Validate command handler.

use serde::Serialize;
use siteswap::SiteSwap;

use crate::commands::{OutputFormat, ValidateArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::{load_pattern, reporter};
use crate::output::print_json;

/// Summary of a valid pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub pattern: String,
    pub num_balls: usize,
    pub num_hands: usize,
}

impl ValidationReport {
    #[must_use]
    pub fn new(pattern: &SiteSwap) -> Self {
        Self {
            pattern: pattern.pattern_string(),
            num_balls: pattern.num_balls(),
            num_hands: pattern.num_hands(),
        }
    }

    /// One-line text summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} {}, {} {}",
            self.pattern,
            self.num_balls,
            plural(self.num_balls, "ball"),
            self.num_hands,
            plural(self.num_hands, "hand"),
        )
    }
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Execute the validate command. An invalid pattern is returned as an error.
pub fn execute_validate(config: &CliConfig, args: &ValidateArgs) -> CliResult<()> {
    let pattern = load_pattern(config, &args.pattern)?;
    let report = ValidationReport::new(&pattern);
    match args.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            reporter(config).success(&report.summary());
            Ok(())
        }
    }
}
