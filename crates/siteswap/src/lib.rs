//! Siteswap: vanilla juggling pattern analysis and animation
//!
//! A siteswap is a periodic list of throw heights. This crate validates
//! patterns, decomposes them into ball orbits, and synthesizes periodic
//! ball and hand trajectories that a front end can sample at any time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SITESWAP Pipeline                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ SiteSwap   │    │ Analysis   │    │ Animation  │            │
//! │   │ (validate) │───►│ (orbits,   │───►│ (arcs and  │            │
//! │   │            │    │  cycle)    │    │  carries)  │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use siteswap::SiteSwap;
//!
//! let pattern: SiteSwap = "4, 4, 1".parse().unwrap();
//! assert_eq!(pattern.num_balls(), 3);
//!
//! let animation = pattern.animation();
//! let frame = animation.frame_at(1.5);
//! assert_eq!(frame.balls.len(), 3);
//! ```

// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod analysis;
pub mod animation;
mod error;
pub mod geometry;
pub mod layout;
pub mod motion;
mod pattern;

pub use analysis::{gcd, lcm, Analysis, Orbit, Segment};
pub use animation::{analysis_to_animation, analysis_to_animation_with, Animation, Frame};
pub use error::{InputError, SiteswapResult};
pub use geometry::{BoundingBox, Point};
pub use layout::Layout;
pub use motion::{Motion, Span};
pub use pattern::{SiteSwap, Throw, Throws};

/// Common imports.
pub mod prelude {
    pub use crate::{
        analysis_to_animation, Analysis, Animation, BoundingBox, Frame, InputError, Layout,
        Motion, Point, SiteSwap, SiteswapResult,
    };
}
