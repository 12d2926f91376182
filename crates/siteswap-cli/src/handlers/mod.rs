//! Command handlers - one module per subcommand
//!
//! Each handler builds a serializable report with a pure function, then
//! renders it as text or JSON.

pub mod analyze;
pub mod presets;
pub mod sample;
pub mod throws;
pub mod validate;

use siteswap::SiteSwap;
use tracing::info;

use crate::commands::PatternArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;

pub use analyze::execute_analyze;
pub use presets::{execute_presets, PRESET_PATTERNS};
pub use sample::execute_sample;
pub use throws::execute_throws;
pub use validate::execute_validate;

/// Parse and validate a pattern, applying the configured hand count and
/// ball ceiling.
pub fn load_pattern(config: &CliConfig, args: &PatternArgs) -> CliResult<SiteSwap> {
    let hands = args.hands.unwrap_or(config.default_hands);
    let pattern = SiteSwap::from_string(&args.pattern, hands)?;
    if pattern.num_balls() > config.max_balls {
        return Err(CliError::TooManyBalls {
            balls: pattern.num_balls(),
            limit: config.max_balls,
        });
    }
    info!(
        pattern = %pattern,
        hands = pattern.num_hands(),
        balls = pattern.num_balls(),
        "loaded pattern"
    );
    Ok(pattern)
}

/// Reporter honouring the configured color and quiet settings.
#[must_use]
pub fn reporter(config: &CliConfig) -> Reporter {
    Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
}
