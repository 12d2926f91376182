//! Presets command handler.

use serde::Serialize;
use siteswap::SiteSwap;

use crate::commands::{OutputFormat, PresetsArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::reporter;
use crate::output::print_json;

/// Example patterns offered to new users
pub const PRESET_PATTERNS: &[&str] = &[
    "4, 4, 1",
    "1, 9, 1, 5",
    "3",
    "6",
    "9",
    "5, 6, 1",
    "7, 5, 7, 1",
    "9, 7, 5",
    "10, 8, 9, 5, 3, 1",
    "13",
];

/// A preset and its ball count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub pattern: String,
    pub num_balls: usize,
}

/// Every preset valid for `hands`, sorted by display string.
pub fn list_presets(hands: usize) -> CliResult<Vec<Preset>> {
    let mut presets = PRESET_PATTERNS
        .iter()
        .map(|text| {
            let pattern = SiteSwap::from_string(text, hands)?;
            Ok(Preset {
                pattern: pattern.pattern_string(),
                num_balls: pattern.num_balls(),
            })
        })
        .collect::<CliResult<Vec<_>>>()?;
    presets.sort_by(|a, b| a.pattern.cmp(&b.pattern));
    Ok(presets)
}

/// Execute the presets command.
pub fn execute_presets(config: &CliConfig, args: &PresetsArgs) -> CliResult<()> {
    let presets = list_presets(args.hands.unwrap_or(config.default_hands))?;
    match args.format {
        OutputFormat::Json => print_json(&presets)?,
        OutputFormat::Text => {
            let out = reporter(config);
            for preset in &presets {
                out.line(&format!("{:>3} balls  {}", preset.num_balls, preset.pattern));
            }
        }
    }
    Ok(())
}
