//! Analyze command handler.
//!
//! Orchestrates: load pattern -> decompose into orbits -> synthesize the
//! animation for its bounding box -> render report.

use serde::Serialize;
use siteswap::{Analysis, BoundingBox, Layout, Orbit, SiteSwap};

use crate::commands::{AnalyzeArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::validate::plural;
use crate::handlers::{load_pattern, reporter};
use crate::output::{format_point, print_json};

/// Orbit structure and extent of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub pattern: String,
    pub num_hands: usize,
    pub num_balls: usize,
    pub cycle_length: u64,
    pub orbits: Vec<Orbit>,
    pub bounding_box: BoundingBox,
}

impl AnalysisReport {
    #[must_use]
    pub fn build(pattern: &SiteSwap, layout: &Layout) -> Self {
        let Analysis {
            num_hands,
            orbits,
            cycle_length,
            ..
        } = pattern.analyze();
        let bounding_box = pattern.animation_with(layout).bounding_box();
        Self {
            pattern: pattern.pattern_string(),
            num_hands,
            num_balls: pattern.num_balls(),
            cycle_length,
            orbits,
            bounding_box,
        }
    }

    /// Text lines for every orbit, one per throw.
    #[must_use]
    pub fn orbit_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, orbit) in self.orbits.iter().enumerate() {
            lines.push(format!(
                "orbit {i}: {} {} {:?}, length {}, from beat {}",
                orbit.num_balls(),
                plural(orbit.num_balls(), "ball"),
                orbit.ball_ids,
                orbit.length,
                orbit.start_index,
            ));
            for segment in &orbit.sequence {
                lines.push(format!(
                    "  {:>3}  hand {} -> hand {}",
                    segment.height, segment.throw_hand, segment.catch_hand
                ));
            }
        }
        lines
    }
}

/// Execute the analyze command.
pub fn execute_analyze(config: &CliConfig, args: &AnalyzeArgs) -> CliResult<()> {
    let pattern = load_pattern(config, &args.pattern)?;
    let report = AnalysisReport::build(&pattern, &config.layout);

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            let out = reporter(config);
            out.header(&format!("Pattern {}", report.pattern));
            out.field("hands", &report.num_hands.to_string());
            out.field("balls", &report.num_balls.to_string());
            out.field("cycle length", &format!("{} beats", report.cycle_length));
            out.field(
                "bounding box",
                &format!(
                    "{} to {}",
                    format_point(report.bounding_box.minima),
                    format_point(report.bounding_box.maxima)
                ),
            );
            for line in report.orbit_lines() {
                out.line(&line);
            }
        }
    }
    Ok(())
}
