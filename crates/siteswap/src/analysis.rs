//! Orbit decomposition.
//!
//! Following a ball from throw to throw traces a cycle through the beats of
//! the pattern. Each distinct cycle is an [`Orbit`]; balls that share a cycle
//! are spaced evenly along it. The whole pattern repeats after the least
//! common multiple of all orbit lengths.

use serde::Serialize;
use tracing::{debug, trace};

/// One throw along an orbit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Throw height in beats
    pub height: u64,
    pub throw_hand: usize,
    pub catch_hand: usize,
}

/// A closed cycle of throws followed by one or more balls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Orbit {
    /// Balls travelling this orbit
    pub ball_ids: Vec<usize>,
    /// Beat of the first throw
    pub start_index: usize,
    /// Throws in the order a ball makes them
    pub sequence: Vec<Segment>,
    /// Beats for one ball to travel the whole cycle (sum of heights)
    pub length: u64,
}

impl Orbit {
    #[must_use]
    pub fn num_balls(&self) -> usize {
        self.ball_ids.len()
    }

    /// Beats between consecutive balls on this orbit.
    #[must_use]
    pub fn ball_spacing(&self) -> u64 {
        self.length / self.ball_ids.len() as u64
    }
}

/// Result of decomposing a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Throw heights as given (before hand replication)
    pub pattern: Vec<u32>,
    pub num_hands: usize,
    pub orbits: Vec<Orbit>,
    /// Beats after which every ball and hand is back where it started
    pub cycle_length: u64,
}

impl Analysis {
    #[must_use]
    pub fn num_balls(&self) -> usize {
        self.orbits.iter().map(Orbit::num_balls).sum()
    }

    /// The orbit `ball` travels, if it exists.
    #[must_use]
    pub fn orbit_of(&self, ball: usize) -> Option<&Orbit> {
        self.orbits.iter().find(|orbit| orbit.ball_ids.contains(&ball))
    }
}

/// Decompose a validated pattern into orbits.
///
/// `num_balls` must be the ball count returned by validation.
///
/// # Panics
///
/// Panics if the walk finds an orbit whose length is not a whole number of
/// pattern repetitions, or if the orbits do not account for every ball.
/// Both mean the pattern was not validated.
#[must_use]
pub fn analyze(pattern: &[u32], num_hands: usize, num_balls: usize) -> Analysis {
    let heights = hand_aligned_heights(pattern, num_hands);
    let period = heights.len();

    // Zeros carry no ball; mark them as already visited.
    let mut visited: Vec<bool> = heights.iter().map(|&h| h == 0).collect();
    let mut orbits = Vec::new();
    let mut balls_found = 0;

    for start in 0..period {
        if balls_found >= num_balls {
            break;
        }
        if visited[start] {
            continue;
        }
        let (sequence, length) = walk_orbit(&heights, start, num_hands, &mut visited);
        assert_eq!(
            length % period as u64,
            0,
            "orbit from beat {start} has length {length}, not a multiple of {period}"
        );
        let balls_in_orbit = (length / period as u64) as usize;
        let ball_ids: Vec<usize> = (balls_found..balls_found + balls_in_orbit).collect();
        trace!(start, length, balls = balls_in_orbit, throws = sequence.len(), "orbit");
        balls_found += balls_in_orbit;
        orbits.push(Orbit {
            ball_ids,
            start_index: start,
            sequence,
            length,
        });
    }

    assert_eq!(
        balls_found, num_balls,
        "orbits hold {balls_found} balls but the pattern has {num_balls}"
    );

    let cycle_length = lcm(orbits.iter().map(|orbit| orbit.length));
    debug!(
        pattern = ?pattern,
        num_hands,
        period,
        orbits = orbits.len(),
        cycle_length,
        "analyzed pattern"
    );

    Analysis {
        pattern: pattern.to_vec(),
        num_hands,
        orbits,
        cycle_length,
    }
}

/// Heights to walk, adjusted so every ball ends a traversal in the hand it
/// started in.
///
/// A pattern whose length is not a multiple of the hand count is repeated
/// once per hand. A one-handed pattern is treated as a two-handed one with
/// the second hand idle: every height is doubled and a 0 follows each
/// throw, which gives the hand a beat to get back to throwing position.
fn hand_aligned_heights(pattern: &[u32], num_hands: usize) -> Vec<u64> {
    let repeats = if pattern.len() % num_hands == 0 {
        1
    } else {
        num_hands
    };
    let repeated = pattern
        .iter()
        .cycle()
        .take(pattern.len() * repeats)
        .map(|&h| u64::from(h));
    if num_hands == 1 {
        repeated.flat_map(|h| [2 * h, 0]).collect()
    } else {
        repeated.collect()
    }
}

/// Follow one ball from `start` until it is thrown from `start` again.
fn walk_orbit(
    heights: &[u64],
    start: usize,
    num_hands: usize,
    visited: &mut [bool],
) -> (Vec<Segment>, u64) {
    let period = heights.len() as u64;
    let mut sequence = Vec::new();
    let mut length = 0;
    let mut index = start;
    let mut hand = start % num_hands;
    loop {
        visited[index] = true;
        let height = heights[index];
        assert!(height > 0, "orbit from beat {start} reached a 0 at beat {index}");
        let catch_hand = ((hand as u64 + height) % num_hands as u64) as usize;
        sequence.push(Segment {
            height,
            throw_hand: hand,
            catch_hand,
        });
        length += height;
        hand = catch_hand;
        index = ((index as u64 + height) % period) as usize;
        if index == start {
            return (sequence, length);
        }
    }
}

/// Greatest common divisor.
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of all `numbers` (1 for none).
#[must_use]
pub fn lcm(numbers: impl IntoIterator<Item = u64>) -> u64 {
    numbers
        .into_iter()
        .fold(1, |acc, n| if n == 0 { acc } else { acc / gcd(acc, n) * n })
}
