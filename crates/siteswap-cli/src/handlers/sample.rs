//! Sample command handler.
//!
//! Does what a renderer's redraw loop does each frame: pick a beat time,
//! ask the animation where every ball and hand is, and optionally map the
//! result onto a canvas.

use serde::Serialize;
use siteswap::{Animation, Point};
use tracing::debug;

use crate::commands::{OutputFormat, SampleArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::{load_pattern, reporter};
use crate::output::{format_point, print_json};
use crate::viewport::Viewport;

/// Refuse requests that would print more rows than this
pub const MAX_SAMPLES: usize = 1_000_000;

/// Positions at one sampled moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    /// Time in beats
    pub beat: f64,
    /// Wall-clock time at the requested speed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    pub balls: Vec<Point>,
    pub hands: Vec<Point>,
}

impl SampleRow {
    /// Single-line text rendering
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut line = format!("{:>9.3}", self.beat);
        if let Some(seconds) = self.seconds {
            line.push_str(&format!("  {seconds:>8.3}s"));
        }
        line.push_str("  balls ");
        line.push_str(&join_points(&self.balls));
        line.push_str("  hands ");
        line.push_str(&join_points(&self.hands));
        line
    }
}

fn join_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format_point(*p))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sampling grid and presentation options.
#[derive(Debug, Clone, Copy)]
pub struct SamplePlan {
    pub beats: f64,
    pub samples_per_beat: u32,
    pub beats_per_second: Option<f64>,
    pub viewport: Option<Viewport>,
}

impl SamplePlan {
    /// Number of samples covering `beats`.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        (self.beats * f64::from(self.samples_per_beat)).ceil() as usize
    }

    fn check(&self) -> CliResult<()> {
        if !self.beats.is_finite() || self.beats <= 0.0 {
            return Err(CliError::invalid_argument("--beats must be a positive number"));
        }
        if self.samples_per_beat == 0 {
            return Err(CliError::invalid_argument(
                "--samples-per-beat must be at least 1",
            ));
        }
        if let Some(speed) = self.beats_per_second {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(CliError::invalid_argument(
                    "--beats-per-second must be a positive number",
                ));
            }
        }
        if self.sample_count() > MAX_SAMPLES {
            return Err(CliError::invalid_argument(format!(
                "{} samples requested; the limit is {MAX_SAMPLES}",
                self.sample_count()
            )));
        }
        Ok(())
    }
}

/// Sample `animation` on the grid described by `plan`.
pub fn sample_rows(animation: &Animation, plan: &SamplePlan) -> CliResult<Vec<SampleRow>> {
    plan.check()?;
    let per_beat = f64::from(plan.samples_per_beat);
    let rows = (0..plan.sample_count())
        .map(|i| {
            let beat = i as f64 / per_beat;
            let frame = animation.frame_at(beat);
            let place = |p: Point| plan.viewport.map_or(p, |view| view.to_canvas(p));
            SampleRow {
                beat,
                seconds: plan.beats_per_second.map(|speed| beat / speed),
                balls: frame.balls.into_iter().map(place).collect(),
                hands: frame.hands.into_iter().map(place).collect(),
            }
        })
        .collect::<Vec<_>>();
    debug!(samples = rows.len(), "sampled animation");
    Ok(rows)
}

/// Execute the sample command.
pub fn execute_sample(config: &CliConfig, args: &SampleArgs) -> CliResult<()> {
    let pattern = load_pattern(config, &args.pattern)?;
    let animation = pattern.animation_with(&config.layout);
    let plan = SamplePlan {
        beats: args.beats.unwrap_or(animation.cycle_length() as f64),
        samples_per_beat: args.samples_per_beat,
        beats_per_second: args.beats_per_second,
        viewport: args
            .canvas
            .map(|canvas| Viewport::fit(animation.bounding_box(), canvas)),
    };
    let rows = sample_rows(&animation, &plan)?;

    match args.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            let out = reporter(config);
            out.info(&format!(
                "{}: {} balls, {} hands, cycle {} beats",
                pattern,
                animation.num_balls(),
                animation.num_hands(),
                animation.cycle_length()
            ));
            for row in &rows {
                out.line(&row.to_text());
            }
        }
    }
    Ok(())
}
