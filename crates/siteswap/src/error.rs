//! Error types for pattern input.
//!
//! Only user input can fail. Everything downstream of a validated
//! [`SiteSwap`](crate::SiteSwap) is total: an internal inconsistency in
//! orbit decomposition or animation synthesis is a bug and panics instead
//! of surfacing here.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type for pattern construction and validation
pub type SiteswapResult<T> = Result<T, InputError>;

/// Errors raised while validating or parsing a siteswap.
///
/// Every message is meant to be shown to the person who typed the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The pattern has no throws at all
    #[error("Pattern has no throws.")]
    EmptyPattern,

    /// Zero hands were requested
    #[error("A pattern needs at least one hand.")]
    NoHands,

    /// Every throw is a 0, so there is nothing to juggle
    #[error("Pattern {pattern} has no balls.")]
    NoBalls {
        /// Display form of the pattern
        pattern: String,
    },

    /// The mean throw height is not an integer
    #[error("Pattern {pattern} uses fractional balls {sum}/{length}.")]
    FractionalBalls {
        /// Display form of the pattern
        pattern: String,
        /// Sum of all throw heights
        sum: u64,
        /// Number of throws
        length: usize,
    },

    /// Two throws land in the same beat
    #[error("Pattern {pattern} has a collision: throws {first} and {second} both land on beat {slot}.")]
    Collision {
        /// Display form of the pattern
        pattern: String,
        /// Index of the earlier throw
        first: usize,
        /// Index of the later throw
        second: usize,
        /// Destination slot, modulo pattern length
        slot: usize,
    },

    /// A throw height is negative
    #[error("Pattern contains negative value {value}.")]
    NegativeHeight {
        /// The offending value
        value: i64,
    },

    /// A token of a pattern string is not an integer
    #[error("Invalid pattern string: '{token}' is not a whole number")]
    InvalidToken {
        /// The offending token
        token: String,
        /// Underlying conversion failure
        #[source]
        source: ParseIntError,
    },

    /// A throw height does not fit the supported range
    #[error("Throw height {value} is too large.")]
    HeightOutOfRange {
        /// The offending value
        value: i64,
    },
}

impl InputError {
    /// Create a fractional ball count error
    #[must_use]
    pub fn fractional_balls(pattern: impl Into<String>, sum: u64, length: usize) -> Self {
        Self::FractionalBalls {
            pattern: pattern.into(),
            sum,
            length,
        }
    }

    /// Create a collision error
    #[must_use]
    pub fn collision(pattern: impl Into<String>, first: usize, second: usize, slot: usize) -> Self {
        Self::Collision {
            pattern: pattern.into(),
            first,
            second,
            slot,
        }
    }

    /// Create an invalid token error
    #[must_use]
    pub fn invalid_token(token: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidToken {
            token: token.into(),
            source,
        }
    }
}
