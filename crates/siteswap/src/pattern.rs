//! Vanilla siteswap patterns.
//!
//! A [`SiteSwap`] is a validated, immutable sequence of throw heights plus
//! a hand count. Construction is the only fallible step; analysis and
//! animation of a constructed pattern always succeed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::analysis::{self, Analysis};
use crate::animation::{self, Animation};
use crate::error::{InputError, SiteswapResult};
use crate::layout::Layout;

/// A single scheduled throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Throw {
    /// Position within the pattern
    pub index: usize,
    /// Throw height in beats
    pub height: u32,
}

/// Infinite cursor over a pattern's throws, wrapping back to index 0.
///
/// ```rust
/// use siteswap::SiteSwap;
///
/// let pattern = SiteSwap::from_string("4, 4, 1", 2).unwrap();
/// let heights: Vec<u32> = pattern.throws().take(4).map(|t| t.height).collect();
/// assert_eq!(heights, vec![4, 4, 1, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Throws<'a> {
    pattern: &'a [u32],
    next_index: usize,
}

impl<'a> Throws<'a> {
    fn new(pattern: &'a [u32]) -> Self {
        Self {
            pattern,
            next_index: 0,
        }
    }

    /// Index of the throw the next call to `next` yields
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    /// Rewind to the first throw of the pattern
    pub fn restart(&mut self) {
        self.next_index = 0;
    }
}

impl Iterator for Throws<'_> {
    type Item = Throw;

    fn next(&mut self) -> Option<Throw> {
        let index = self.next_index;
        let height = *self.pattern.get(index)?;
        self.next_index = (index + 1) % self.pattern.len();
        Some(Throw { index, height })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// A validated vanilla (asynchronous, non-multiplex) siteswap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SiteSwap {
    pattern: Vec<u32>,
    num_hands: usize,
    num_balls: usize,
}

impl SiteSwap {
    /// Hand count used when none is given
    pub const DEFAULT_HANDS: usize = 2;

    /// Validate `pattern` and build a siteswap juggled with `num_hands` hands.
    pub fn new(pattern: Vec<u32>, num_hands: usize) -> SiteswapResult<Self> {
        if num_hands == 0 {
            return Err(InputError::NoHands);
        }
        let num_balls = Self::validate_pattern(&pattern)?;
        Ok(Self {
            pattern,
            num_hands,
            num_balls,
        })
    }

    /// Check that `pattern` is a juggleable siteswap and return its ball count.
    ///
    /// The pattern must be non-empty, have an integral and positive mean
    /// height, and map every throw to a distinct landing beat.
    pub fn validate_pattern(pattern: &[u32]) -> SiteswapResult<usize> {
        if pattern.is_empty() {
            return Err(InputError::EmptyPattern);
        }
        let length = pattern.len();
        let sum: u64 = pattern.iter().map(|&h| u64::from(h)).sum();
        if sum % length as u64 != 0 {
            return Err(InputError::fractional_balls(join(pattern), sum, length));
        }
        let num_balls = (sum / length as u64) as usize;
        if num_balls == 0 {
            return Err(InputError::NoBalls {
                pattern: join(pattern),
            });
        }

        let mut landed_from: Vec<Option<usize>> = vec![None; length];
        for (index, &height) in pattern.iter().enumerate() {
            let slot = landing_slot(index, height, length);
            if let Some(first) = landed_from[slot] {
                return Err(InputError::collision(join(pattern), first, index, slot));
            }
            landed_from[slot] = Some(index);
        }
        debug_assert!(landed_from.iter().all(Option::is_some));
        Ok(num_balls)
    }

    /// Parse a pattern from comma- and/or whitespace-separated integers.
    pub fn from_string(text: &str, num_hands: usize) -> SiteswapResult<Self> {
        Self::new(parse_heights(text)?, num_hands)
    }

    /// Throw heights, in pattern order
    #[must_use]
    pub fn pattern(&self) -> &[u32] {
        &self.pattern
    }

    /// Number of throws in one repetition
    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false; validation rejects empty patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    #[must_use]
    pub const fn num_hands(&self) -> usize {
        self.num_hands
    }

    #[must_use]
    pub const fn num_balls(&self) -> usize {
        self.num_balls
    }

    /// Canonical display form, e.g. `"4, 4, 1"`.
    #[must_use]
    pub fn pattern_string(&self) -> String {
        join(&self.pattern)
    }

    /// Throws of the pattern, repeated forever.
    #[must_use]
    pub fn throws(&self) -> Throws<'_> {
        Throws::new(&self.pattern)
    }

    /// Decompose the pattern into ball orbits.
    #[must_use]
    pub fn analyze(&self) -> Analysis {
        analysis::analyze(&self.pattern, self.num_hands, self.num_balls)
    }

    /// Synthesize ball and hand paths with the default layout.
    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation_with(&Layout::default())
    }

    /// Synthesize ball and hand paths with a custom layout.
    #[must_use]
    pub fn animation_with(&self, layout: &Layout) -> Animation {
        animation::analysis_to_animation_with(&self.analyze(), layout)
    }
}

impl fmt::Display for SiteSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern_string())
    }
}

impl FromStr for SiteSwap {
    type Err = InputError;

    /// Parses with [`SiteSwap::DEFAULT_HANDS`] hands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s, Self::DEFAULT_HANDS)
    }
}

/// Where throw `index` of height `height` lands, modulo `length`.
pub(crate) fn landing_slot(index: usize, height: u32, length: usize) -> usize {
    (index + height as usize % length) % length
}

fn join(pattern: &[u32]) -> String {
    pattern
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split on runs of commas and whitespace, then parse each token.
fn parse_heights(text: &str) -> SiteswapResult<Vec<u32>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_height)
        .collect()
}

fn parse_height(token: &str) -> SiteswapResult<u32> {
    let value: i64 = token
        .parse()
        .map_err(|source| InputError::invalid_token(token, source))?;
    if value < 0 {
        return Err(InputError::NegativeHeight { value });
    }
    u32::try_from(value).map_err(|_| InputError::HeightOutOfRange { value })
}
