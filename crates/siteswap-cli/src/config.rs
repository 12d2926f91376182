//! CLI configuration
//!
//! Defaults can be overridden by a YAML file passed with `--config`, and
//! the file in turn by command-line flags.

use std::path::Path;

use serde::{Deserialize, Serialize};
use siteswap::{Layout, SiteSwap};

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - library debug events
    Debug,
    /// Trace - per-orbit trace events
    Trace,
}

impl Verbosity {
    /// Level selected by `-q` and repeated `-v`, or `None` when neither is given.
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Option<Self> {
        if quiet {
            return Some(Self::Quiet);
        }
        match verbose {
            0 => None,
            1 => Some(Self::Verbose),
            2 => Some(Self::Debug),
            _ => Some(Self::Trace),
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// Default tracing level for this verbosity
    #[must_use]
    pub const fn tracing_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Patterns needing more balls than this are refused
    pub max_balls: usize,
    /// Hand count when `--hands` is not given
    pub default_hands: usize,
    /// Hand placement and gravity
    pub layout: Layout,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            max_balls: Self::DEFAULT_MAX_BALLS,
            default_hands: SiteSwap::DEFAULT_HANDS,
            layout: Layout::default(),
        }
    }
}

impl CliConfig {
    /// Default ball ceiling
    pub const DEFAULT_MAX_BALLS: usize = 640;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a YAML configuration file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> CliResult<()> {
        if self.default_hands == 0 {
            return Err(CliError::config("default_hands must be at least 1"));
        }
        if self.max_balls == 0 {
            return Err(CliError::config("max_balls must be at least 1"));
        }
        if self.layout.gravity.is_nan() || self.layout.gravity >= 0.0 {
            return Err(CliError::config("layout.gravity must be negative"));
        }
        if self.layout.radius.is_nan() || self.layout.radius <= 0.0 {
            return Err(CliError::config("layout.radius must be positive"));
        }
        Ok(())
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set ball ceiling
    #[must_use]
    pub const fn with_max_balls(mut self, max_balls: usize) -> Self {
        self.max_balls = max_balls;
        self
    }

    /// Set default hand count
    #[must_use]
    pub const fn with_default_hands(mut self, hands: usize) -> Self {
        self.default_hands = hands;
        self
    }

    /// Set layout
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
