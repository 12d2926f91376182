//! Mapping animation coordinates onto a pixel canvas.
//!
//! The animation's bounding box is stretched to fill the canvas minus a
//! fixed edge margin, with x and y scaled independently and y flipped so
//! that up in the animation is up on screen.

use std::fmt;

use siteswap::{BoundingBox, Point};

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Margin kept clear on every side
    pub const EDGE_BUFFER: f64 = 20.0;

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse `WIDTHxHEIGHT`, e.g. `300x300`.
    pub fn parse(text: &str) -> Result<Self, String> {
        let (w, h) = text
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{text}'"))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|e| format!("bad canvas width '{w}': {e}"))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|e| format!("bad canvas height '{h}': {e}"))?;
        let minimum = (2.0 * Self::EDGE_BUFFER) as u32;
        if width <= minimum || height <= minimum {
            return Err(format!(
                "canvas must be larger than {minimum}x{minimum} pixels"
            ));
        }
        Ok(Self::new(width, height))
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fitted transform from animation space to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    animation_minima: Point,
    drawing_minima: Point,
    drawing_maxima: Point,
    scale: Point,
}

impl Viewport {
    /// Fit `bounds` into `canvas`.
    #[must_use]
    pub fn fit(bounds: BoundingBox, canvas: Canvas) -> Self {
        let buffer = Canvas::EDGE_BUFFER;
        let drawing_minima = Point::new(buffer, buffer);
        let drawing_maxima = Point::new(
            f64::from(canvas.width) - buffer,
            f64::from(canvas.height) - buffer,
        );
        let drawing_size = drawing_maxima - drawing_minima;
        Self {
            animation_minima: bounds.minima,
            drawing_minima,
            drawing_maxima,
            scale: Point::new(
                axis_scale(drawing_size.x, bounds.width()),
                axis_scale(drawing_size.y, bounds.height()),
            ),
        }
    }

    /// Canvas pixel position of an animation point.
    #[must_use]
    pub fn to_canvas(&self, p: Point) -> Point {
        let delta = p - self.animation_minima;
        Point::new(
            delta.x * self.scale.x + self.drawing_minima.x,
            self.drawing_maxima.y - delta.y * self.scale.y,
        )
    }
}

// A flat extent maps to a single line instead of dividing by zero.
fn axis_scale(drawing: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        drawing / extent
    } else {
        1.0
    }
}
