//! Plane geometry for ball and hand positions.
//!
//! Positions live in an abstract plane with `y` pointing up. Callers map
//! them onto a display using [`BoundingBox`].

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A position (or displacement) in the animation plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Position on a circle of `radius` around the origin.
    #[inline]
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Linear interpolation; `fraction` 0 gives `self`, 1 gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, fraction: f64) -> Self {
        self + (other - self) * fraction
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box.
///
/// `minima` is component-wise `<=` `maxima` for every box built through
/// the constructors here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub minima: Point,
    pub maxima: Point,
}

impl BoundingBox {
    /// Smallest box containing both corners, in any order.
    #[must_use]
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            minima: a.min(b),
            maxima: a.max(b),
        }
    }

    /// Degenerate box around a single point.
    #[must_use]
    pub const fn point(p: Point) -> Self {
        Self {
            minima: p,
            maxima: p,
        }
    }

    /// Union of two boxes.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            minima: self.minima.min(other.minima),
            maxima: self.maxima.max(other.maxima),
        }
    }

    /// Grow the box so it contains `p`.
    #[must_use]
    pub fn including(self, p: Point) -> Self {
        self.merge(Self::point(p))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.maxima.x - self.minima.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.maxima.y - self.minima.y
    }

    /// Whether `p` lies inside, allowing `tolerance` slack on every side.
    #[must_use]
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.minima.x - tolerance
            && p.x <= self.maxima.x + tolerance
            && p.y >= self.minima.y - tolerance
            && p.y <= self.maxima.y + tolerance
    }
}
