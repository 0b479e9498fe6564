use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether a score counts as a perfect match.
///
/// Scores are a ratio of integers times 100, so a full match is exactly
/// `100.0`; the tolerance only absorbs rounding from the division.
pub const PERFECT_EPSILON: f64 = 1e-9;

/// A fitness score expressed as a percentage, constrained to `[0.0, 100.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Lowest possible score (no matching position).
    pub const ZERO: Self = Self(0.0);
    /// Highest possible score (every position matches).
    pub const PERFECT: Self = Self(100.0);

    /// Creates a new FitnessValue, clamping the input to [0.0, 100.0].
    ///
    /// NaN is mapped to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Percentage of `matches` out of `total` positions.
    ///
    /// A `total` of zero yields zero.
    pub fn from_matches(matches: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        Self::new(matches as f64 / total as f64 * 100.0)
    }

    /// Returns the inner f64 value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// True when the score is indistinguishable from 100%.
    #[inline]
    pub fn is_perfect(self) -> bool {
        self.0 >= 100.0 - PERFECT_EPSILON
    }

    /// Total ordering over scores. The constructor never stores NaN, so this
    /// agrees with `PartialOrd`.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}%", p, self.0),
            None => write!(f, "{}%", self.0),
        }
    }
}
