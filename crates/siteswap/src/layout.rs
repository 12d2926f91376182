//! Default throw and catch positions for each hand.
//!
//! Hands sit on a ring around the origin. A hand throws from the ring and
//! catches a little further out and a little higher, so every carry moves
//! the hand inward and down before the next throw.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Placement of hands and the gravity used for flight arcs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Radius of the ring of throw positions
    pub radius: f64,
    /// Catch positions sit on a ring this many times larger
    pub catch_radius_scale: f64,
    /// Catch positions are raised by this fraction of `radius`
    pub catch_lift: f64,
    /// Vertical acceleration in position units per beat squared (negative is down)
    pub gravity: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            catch_radius_scale: 1.5,
            catch_lift: 0.2,
            gravity: Self::DEFAULT_GRAVITY,
        }
    }
}

impl Layout {
    pub const DEFAULT_RADIUS: f64 = 75.0;
    pub const DEFAULT_GRAVITY: f64 = -25.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Where `hand` releases a ball.
    #[must_use]
    pub fn throw_position(&self, hand: usize, num_hands: usize) -> Point {
        self.ring_point(hand, num_hands, self.radius)
    }

    /// Where `hand` receives a ball.
    #[must_use]
    pub fn catch_position(&self, hand: usize, num_hands: usize) -> Point {
        let outer = self.ring_point(hand, num_hands, self.radius * self.catch_radius_scale);
        Point::new(outer.x, outer.y + self.radius * self.catch_lift)
    }

    /// Meeting point for a height-1 pass between two hands.
    ///
    /// A 1 is modeled as an instant handoff halfway between the two throw
    /// positions rather than a real hand-across movement.
    #[must_use]
    pub fn handoff_position(&self, from_hand: usize, to_hand: usize, num_hands: usize) -> Point {
        self.throw_position(from_hand, num_hands)
            .midpoint(self.throw_position(to_hand, num_hands))
    }

    fn ring_point(&self, hand: usize, num_hands: usize, radius: f64) -> Point {
        if num_hands == 2 {
            // Plain left/right: hand 0 on the right, hand 1 on the left.
            let side = if hand % 2 == 0 { 1.0 } else { -1.0 };
            return Point::new(side * radius, 0.0);
        }
        let angle = hand as f64 / num_hands.max(1) as f64 * std::f64::consts::TAU;
        Point::polar(radius, angle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_default_constants() {
        let layout = Layout::default();
        assert_eq!(layout.radius, 75.0);
        assert_eq!(layout.gravity, -25.0);
    }

    #[test]
    fn test_two_hands_left_right() {
        let layout = Layout::default();
        assert_eq!(layout.throw_position(0, 2), Point::new(75.0, 0.0));
        assert_eq!(layout.throw_position(1, 2), Point::new(-75.0, 0.0));
        assert_eq!(layout.catch_position(0, 2), Point::new(112.5, 15.0));
        assert_eq!(layout.catch_position(1, 2), Point::new(-112.5, 15.0));
    }

    #[test]
    fn test_three_hands_even_spacing() {
        let layout = Layout::default();
        let positions: Vec<Point> = (0..3).map(|h| layout.throw_position(h, 3)).collect();
        assert!(approx(positions[0], Point::new(75.0, 0.0)));
        for p in &positions {
            assert!((p.distance(Point::origin()) - 75.0).abs() < 1e-9);
        }
        let d01 = positions[0].distance(positions[1]);
        let d12 = positions[1].distance(positions[2]);
        let d20 = positions[2].distance(positions[0]);
        assert!((d01 - d12).abs() < 1e-9);
        assert!((d12 - d20).abs() < 1e-9);
    }

    #[test]
    fn test_catch_is_outside_and_above_throw() {
        let layout = Layout::default();
        for hands in 1..=7 {
            for hand in 0..hands {
                let throw = layout.throw_position(hand, hands);
                let catch = layout.catch_position(hand, hands);
                let lowered = Point::new(catch.x, catch.y - 15.0);
                assert!(lowered.distance(Point::origin()) > throw.distance(Point::origin()));
            }
        }
    }

    #[test]
    fn test_handoff_is_midpoint() {
        let layout = Layout::default();
        assert!(approx(layout.handoff_position(0, 1, 2), Point::origin()));
        assert!(approx(layout.handoff_position(1, 0, 2), Point::origin()));
    }

    #[test]
    fn test_single_hand_sits_on_ring() {
        let layout = Layout::default().with_radius(10.0);
        assert!(approx(layout.throw_position(0, 1), Point::new(10.0, 0.0)));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let layout: Layout = serde_json::from_str(r#"{"radius": 50.0}"#).unwrap();
        assert_eq!(layout.radius, 50.0);
        assert_eq!(layout.gravity, Layout::DEFAULT_GRAVITY);
    }
}
