//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directive(verbosity: Verbosity) -> String {
    let level = verbosity.tracing_level();
    format!("siteswap={level},siteswap_cli={level}")
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` takes precedence over
/// the verbosity flags. Calling this twice is harmless.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .try_init();
}
