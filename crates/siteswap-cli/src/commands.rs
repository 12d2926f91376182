//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::viewport::Canvas;

/// siteswap: analyze and animate vanilla juggling patterns
#[derive(Parser, Debug)]
#[command(name = "siteswap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "SITESWAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Refuse patterns with more balls than this
    #[arg(long, global = true)]
    pub max_balls: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a pattern and report its ball count
    Validate(ValidateArgs),

    /// Show the orbits and cycle length of a pattern
    Analyze(AnalyzeArgs),

    /// Sample ball and hand positions over time
    Sample(SampleArgs),

    /// List the throws of a pattern in order, wrapping around
    Throws(ThrowsArgs),

    /// List the built-in example patterns
    Presets(PresetsArgs),
}

/// A pattern and the hands juggling it
#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// Throw heights separated by commas and/or spaces, e.g. "4, 4, 1"
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,

    /// Number of hands (defaults to the configured value, normally 2)
    #[arg(short = 'n', long)]
    pub hands: Option<usize>,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the sample command
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Beats to sample (defaults to one full cycle)
    #[arg(short, long)]
    pub beats: Option<f64>,

    /// Samples taken per beat
    #[arg(short, long, default_value = "4")]
    pub samples_per_beat: u32,

    /// Playback speed; adds wall-clock seconds to every sample
    #[arg(long)]
    pub beats_per_second: Option<f64>,

    /// Map positions onto a canvas of this size in pixels, e.g. 300x300
    #[arg(long, value_parser = Canvas::parse)]
    pub canvas: Option<Canvas>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the throws command
#[derive(Args, Debug)]
pub struct ThrowsArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Number of throws to list
    #[arg(short, long, default_value = "12")]
    pub count: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the presets command
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Number of hands (defaults to the configured value, normally 2)
    #[arg(short = 'n', long)]
    pub hands: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_validate() {
            let cli = Cli::parse_from(["siteswap", "validate", "4, 4, 1"]);
            match cli.command {
                Commands::Validate(args) => {
                    assert_eq!(args.pattern.pattern, "4, 4, 1");
                    assert_eq!(args.pattern.hands, None);
                    assert_eq!(args.format, OutputFormat::Text);
                }
                other => panic!("expected validate, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_pattern_with_leading_minus() {
            let cli = Cli::parse_from(["siteswap", "validate", "-1, 3", "-n", "3"]);
            match cli.command {
                Commands::Validate(args) => {
                    assert_eq!(args.pattern.pattern, "-1, 3");
                    assert_eq!(args.pattern.hands, Some(3));
                }
                other => panic!("expected validate, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_hands_and_format() {
            let cli = Cli::parse_from(["siteswap", "analyze", "5 6 1", "-n", "3", "--format", "json"]);
            match cli.command {
                Commands::Analyze(args) => {
                    assert_eq!(args.pattern.hands, Some(3));
                    assert_eq!(args.format, OutputFormat::Json);
                }
                other => panic!("expected analyze, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_sample() {
            let cli = Cli::parse_from([
                "siteswap",
                "sample",
                "3",
                "--beats",
                "2.5",
                "--samples-per-beat",
                "10",
                "--beats-per-second",
                "3",
                "--canvas",
                "300x200",
            ]);
            match cli.command {
                Commands::Sample(args) => {
                    assert_eq!(args.beats, Some(2.5));
                    assert_eq!(args.samples_per_beat, 10);
                    assert_eq!(args.beats_per_second, Some(3.0));
                    assert_eq!(args.canvas, Some(Canvas::new(300, 200)));
                }
                other => panic!("expected sample, got {other:?}"),
            }
        }

        #[test]
        fn test_parse_bad_canvas() {
            let result = Cli::try_parse_from(["siteswap", "sample", "3", "--canvas", "wide"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_throws_default_count() {
            let cli = Cli::parse_from(["siteswap", "throws", "531"]);
            match cli.command {
                Commands::Throws(args) => assert_eq!(args.count, 12),
                other => panic!("expected throws, got {other:?}"),
            }
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "siteswap", "presets", "-vv", "--color", "never", "--max-balls", "9",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(matches!(cli.color, Some(ColorArg::Never)));
            assert_eq!(cli.max_balls, Some(9));
        }
    }
}
