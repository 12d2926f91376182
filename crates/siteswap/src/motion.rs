//! Timed movement segments for balls and hands.
//!
//! Every [`Motion`] answers three questions: does it cover a moment of the
//! cycle, where is its subject at that moment, and what box does it sweep.
//! Times are in beats. A motion may start near the end of the cycle and
//! run past it; coverage checks wrap around `cycle_length` accordingly.

use serde::Serialize;

use crate::geometry::{BoundingBox, Point};

/// Start time, duration and endpoints shared by every moving variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Span {
    pub start: f64,
    pub duration: f64,
    pub from: Point,
    pub to: Point,
}

impl Span {
    #[must_use]
    pub const fn new(start: f64, duration: f64, from: Point, to: Point) -> Self {
        Self {
            start,
            duration,
            from,
            to,
        }
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Shift a query time into this span's frame: wrap it into
    /// `[0, cycle_length)`, then move it one cycle later if it falls
    /// before the span starts.
    fn unwrap_time(&self, time: f64, cycle_length: f64) -> f64 {
        let wrapped = time.rem_euclid(cycle_length);
        if wrapped >= self.start {
            wrapped
        } else {
            wrapped + cycle_length
        }
    }

    fn covers(&self, time: f64, cycle_length: f64) -> bool {
        let t = self.unwrap_time(time, cycle_length);
        self.start <= t && t < self.end()
    }

    /// Elapsed time since `start`, asserting the span covers `time`.
    fn elapsed(&self, time: f64, cycle_length: f64) -> f64 {
        let t = self.unwrap_time(time, cycle_length);
        assert!(
            self.start <= t && t < self.end(),
            "time {time} is outside motion [{}, {})",
            self.start,
            self.end()
        );
        t - self.start
    }
}

/// One piece of a ball's or hand's path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Ball in flight: linear in `x`, parabolic in `y`.
    Arc {
        span: Span,
        /// Vertical acceleration
        gravity: f64,
        /// Initial vertical velocity solved so the parabola lands on `span.to`
        initial_velocity: f64,
    },
    /// Hand (and any ball it holds) moving in a straight line.
    HandMove { span: Span },
    /// A hand that never throws or catches stays put for the whole cycle.
    HandStationary { position: Point },
}

impl Motion {
    /// Flight arc from `from` to `to` taking `duration` beats.
    ///
    /// Solves `dy = v_i * d + g * d^2 / 2` for `v_i`.
    #[must_use]
    pub fn arc(start: f64, duration: f64, from: Point, to: Point, gravity: f64) -> Self {
        debug_assert!(duration > 0.0, "arcs need a positive flight time");
        let delta_y = to.y - from.y;
        let initial_velocity = (delta_y - 0.5 * gravity * duration * duration) / duration;
        Self::Arc {
            span: Span::new(start, duration, from, to),
            gravity,
            initial_velocity,
        }
    }

    #[must_use]
    pub const fn hand_move(start: f64, duration: f64, from: Point, to: Point) -> Self {
        Self::HandMove {
            span: Span::new(start, duration, from, to),
        }
    }

    #[must_use]
    pub const fn stationary(position: Point) -> Self {
        Self::HandStationary { position }
    }

    /// Timing and endpoints, if this motion moves at all.
    #[must_use]
    pub const fn span(&self) -> Option<&Span> {
        match self {
            Self::Arc { span, .. } | Self::HandMove { span } => Some(span),
            Self::HandStationary { .. } => None,
        }
    }

    /// Start time in beats (0 for a stationary hand).
    #[must_use]
    pub fn start(&self) -> f64 {
        self.span().map_or(0.0, |span| span.start)
    }

    /// Duration in beats (0 for a stationary hand, which covers everything anyway).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.span().map_or(0.0, |span| span.duration)
    }

    #[must_use]
    pub const fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }

    /// Whether this motion is in effect at `time` (wrapped into the cycle).
    #[must_use]
    pub fn covers(&self, time: f64, cycle_length: f64) -> bool {
        match self {
            Self::Arc { span, .. } | Self::HandMove { span } => span.covers(time, cycle_length),
            Self::HandStationary { .. } => true,
        }
    }

    /// Position at `time`.
    ///
    /// # Panics
    ///
    /// Panics if the motion does not cover `time`; callers pick the covering
    /// motion first with [`Motion::covers`].
    #[must_use]
    pub fn location_at(&self, time: f64, cycle_length: f64) -> Point {
        match self {
            Self::Arc {
                span,
                gravity,
                initial_velocity,
            } => {
                let dt = span.elapsed(time, cycle_length);
                let fraction = dt / span.duration;
                let dx = fraction * (span.to.x - span.from.x);
                let dy = initial_velocity * dt + 0.5 * gravity * dt * dt;
                span.from + Point::new(dx, dy)
            }
            Self::HandMove { span } => {
                let dt = span.elapsed(time, cycle_length);
                span.from.lerp(span.to, dt / span.duration)
            }
            Self::HandStationary { position } => *position,
        }
    }

    /// Box swept by the motion.
    ///
    /// For an arc the top comes from the apex of the parabola,
    /// `v_i^2 / (-2g)` above the throw height.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Arc {
                span,
                gravity,
                initial_velocity,
            } => {
                let mut bbox = BoundingBox::spanning(span.from, span.to);
                // Top of the full parabola, even when the catch comes first.
                bbox.maxima.y =
                    span.from.y + initial_velocity * initial_velocity / (-2.0 * gravity);
                bbox
            }
            Self::HandMove { span } => BoundingBox::spanning(span.from, span.to),
            Self::HandStationary { position } => BoundingBox::point(*position),
        }
    }
}
