//! Periodic ball and hand trajectories.
//!
//! [`analysis_to_animation`] turns every throw of every orbit into a flight
//! arc plus a pair of carry events on the throwing and catching hands. Once
//! all throws are placed, each hand's events are paired chronologically into
//! hand moves; a move that starts with a catch also carries the caught ball,
//! so it lands on that ball's path too. The result tiles `[0, cycle_length)`
//! for every ball and every hand.

use serde::Serialize;
use tracing::debug;

use crate::analysis::Analysis;
use crate::geometry::{BoundingBox, Point};
use crate::layout::Layout;
use crate::motion::Motion;

/// Ball and hand paths over one full cycle.
///
/// Immutable once built, so it can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Animation {
    ball_paths: Vec<Vec<Motion>>,
    hand_paths: Vec<Vec<Motion>>,
    cycle_length: u64,
}

/// Every ball and hand position at one moment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Time in beats
    pub time: f64,
    pub balls: Vec<Point>,
    pub hands: Vec<Point>,
}

impl Animation {
    #[must_use]
    pub fn num_balls(&self) -> usize {
        self.ball_paths.len()
    }

    #[must_use]
    pub fn num_hands(&self) -> usize {
        self.hand_paths.len()
    }

    /// Beats until the animation repeats.
    #[must_use]
    pub const fn cycle_length(&self) -> u64 {
        self.cycle_length
    }

    /// Motions of `ball`, ordered by start time.
    #[must_use]
    pub fn ball_path(&self, ball: usize) -> &[Motion] {
        &self.ball_paths[ball]
    }

    /// Motions of `hand`, ordered by start time.
    #[must_use]
    pub fn hand_path(&self, hand: usize) -> &[Motion] {
        &self.hand_paths[hand]
    }

    /// Position of `ball` at `time` beats. Any time is accepted; it is
    /// wrapped into the cycle.
    ///
    /// # Panics
    ///
    /// Panics if `ball` is out of range or no motion covers `time`.
    #[must_use]
    pub fn ball_location_at(&self, ball: usize, time: f64) -> Point {
        self.location_on(&self.ball_paths[ball], time, "ball", ball)
    }

    /// Position of `hand` at `time` beats.
    ///
    /// # Panics
    ///
    /// Panics if `hand` is out of range or no motion covers `time`.
    #[must_use]
    pub fn hand_location_at(&self, hand: usize, time: f64) -> Point {
        self.location_on(&self.hand_paths[hand], time, "hand", hand)
    }

    /// Sample every ball and hand at once.
    #[must_use]
    pub fn frame_at(&self, time: f64) -> Frame {
        Frame {
            time,
            balls: (0..self.num_balls())
                .map(|ball| self.ball_location_at(ball, time))
                .collect(),
            hands: (0..self.num_hands())
                .map(|hand| self.hand_location_at(hand, time))
                .collect(),
        }
    }

    /// Union of the boxes swept by every motion.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.ball_paths
            .iter()
            .chain(&self.hand_paths)
            .flatten()
            .map(Motion::bounding_box)
            .reduce(BoundingBox::merge)
            .unwrap_or_else(|| BoundingBox::point(Point::origin()))
    }

    fn location_on(&self, path: &[Motion], time: f64, entity: &str, id: usize) -> Point {
        let cycle = self.cycle_length as f64;
        match path.iter().find(|motion| motion.covers(time, cycle)) {
            Some(motion) => motion.location_at(time, cycle),
            None => panic!("no motion covers time {time} for {entity} {id}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CarryKind {
    /// The hand receives a ball
    Start,
    /// The hand releases a ball
    End,
}

/// A catch or release on one hand.
#[derive(Clone, Copy, Debug)]
struct CarryRecord {
    time: u64,
    kind: CarryKind,
    position: Point,
    ball: usize,
}

/// Build an animation with the default [`Layout`].
#[must_use]
pub fn analysis_to_animation(analysis: &Analysis) -> Animation {
    analysis_to_animation_with(analysis, &Layout::default())
}

/// Build an animation placing hands with `layout`.
///
/// # Panics
///
/// Panics if the analysis is inconsistent: an orbit length that does not
/// divide the cycle, or carry events on a hand that do not alternate
/// between catches and releases.
#[must_use]
pub fn analysis_to_animation_with(analysis: &Analysis, layout: &Layout) -> Animation {
    let cycle = analysis.cycle_length;
    let num_hands = analysis.num_hands;
    let mut ball_paths: Vec<Vec<Motion>> = vec![Vec::new(); analysis.num_balls()];
    let mut carries: Vec<Vec<CarryRecord>> = vec![Vec::new(); num_hands];

    for orbit in &analysis.orbits {
        assert_eq!(
            cycle % orbit.length,
            0,
            "orbit length {} does not divide cycle {cycle}",
            orbit.length
        );
        let repeats = cycle / orbit.length;
        let spacing = orbit.ball_spacing();
        let mut first_throw = orbit.start_index as u64;

        for &ball in &orbit.ball_ids {
            let mut beat = first_throw;
            for segment in &orbit.sequence {
                let flight = segment.height - 1;
                let (from, to) = if flight > 0 {
                    (
                        layout.throw_position(segment.throw_hand, num_hands),
                        layout.catch_position(segment.catch_hand, num_hands),
                    )
                } else {
                    let handoff =
                        layout.handoff_position(segment.throw_hand, segment.catch_hand, num_hands);
                    (handoff, handoff)
                };

                for repeat in 0..repeats {
                    let offset = repeat * orbit.length;
                    let throw_time = (beat + offset) % cycle;
                    let catch_time = (beat + flight + offset) % cycle;
                    if flight > 0 {
                        ball_paths[ball].push(Motion::arc(
                            throw_time as f64,
                            flight as f64,
                            from,
                            to,
                            layout.gravity,
                        ));
                    }
                    carries[segment.throw_hand].push(CarryRecord {
                        time: throw_time,
                        kind: CarryKind::End,
                        position: from,
                        ball,
                    });
                    carries[segment.catch_hand].push(CarryRecord {
                        time: catch_time,
                        kind: CarryKind::Start,
                        position: to,
                        ball,
                    });
                }
                beat += segment.height;
            }
            first_throw += spacing;
        }
    }

    let mut hand_paths = Vec::with_capacity(num_hands);
    for (hand, mut records) in carries.into_iter().enumerate() {
        if records.is_empty() {
            debug!(hand, "hand never catches, holding it still");
            hand_paths.push(vec![Motion::stationary(
                layout.throw_position(hand, num_hands),
            )]);
            continue;
        }
        hand_paths.push(pair_carries(hand, &mut records, cycle, &mut ball_paths));
    }

    for path in &mut ball_paths {
        path.sort_by(|a, b| a.start().total_cmp(&b.start()));
    }

    debug!(
        balls = ball_paths.len(),
        hands = hand_paths.len(),
        ball_motions = ball_paths.iter().map(Vec::len).sum::<usize>(),
        hand_motions = hand_paths.iter().map(Vec::len).sum::<usize>(),
        cycle_length = cycle,
        "synthesized animation"
    );

    Animation {
        ball_paths,
        hand_paths,
        cycle_length: cycle,
    }
}

/// Join each carry record to its chronological successor with a hand move.
/// Moves that begin with a catch are copied onto the held ball's path.
fn pair_carries(
    hand: usize,
    records: &mut [CarryRecord],
    cycle: u64,
    ball_paths: &mut [Vec<Motion>],
) -> Vec<Motion> {
    assert!(
        records.len() % 2 == 0,
        "hand {hand} has an odd number of carry events ({})",
        records.len()
    );
    records.sort_by_key(|record| record.time);

    let mut moves = Vec::with_capacity(records.len());
    for (i, start) in records.iter().enumerate() {
        let next = &records[(i + 1) % records.len()];
        assert_ne!(
            start.kind, next.kind,
            "hand {hand} has two {:?} events in a row at beats {} and {}",
            start.kind, start.time, next.time
        );
        let duration = (next.time + cycle - start.time) % cycle;
        let motion = Motion::hand_move(
            start.time as f64,
            duration as f64,
            start.position,
            next.position,
        );
        if start.kind == CarryKind::Start {
            assert_eq!(
                start.ball, next.ball,
                "hand {hand} catches ball {} at beat {} but releases ball {}",
                start.ball, start.time, next.ball
            );
            ball_paths[start.ball].push(motion.clone());
        }
        moves.push(motion);
    }
    moves
}
