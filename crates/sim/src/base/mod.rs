//! Base types for genome representation.
//!
//! This module provides the foundational types shared by the rest of the
//! crate: the character [`Alphabet`] genes are drawn from and the
//! percentage-based [`FitnessValue`].

mod alphabet;
pub mod fitness;

pub use alphabet::{Alphabet, UPPERCASE_WITH_SPACE};
pub use fitness::FitnessValue;
