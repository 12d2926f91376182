//! siteswap CLI library
//!
//! Command-line front end for the `siteswap` crate: validate patterns,
//! inspect their orbits, and sample ball and hand positions the way a
//! renderer would.

#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;
pub mod viewport;

pub use commands::{
    AnalyzeArgs, Cli, ColorArg, Commands, OutputFormat, PatternArgs, PresetsArgs, SampleArgs,
    ThrowsArgs, ValidateArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_point, print_json, Reporter};
pub use viewport::{Canvas, Viewport};
