use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::ConfigError;

/// Characters used by the default alphabet: uppercase Latin letters and space.
pub const UPPERCASE_WITH_SPACE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Shared, immutable, non-empty character set that genes are drawn from.
///
/// Cloning is cheap: both the character list and the lookup table live behind
/// an `Arc`, so one instance can be shared by the configuration, the engine
/// and every mutation call. Order is preserved and duplicates are kept, which
/// means a repeated character is proportionally more likely to be sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    /// Characters in declaration order
    chars: Arc<[char]>,
    /// Mapping from char to its (last) index for fast membership checks
    char_to_index: Arc<HashMap<char, usize>>,
}

impl Alphabet {
    /// Create a new alphabet from characters.
    ///
    /// Fails with [`ConfigError::EmptyAlphabet`] when no characters are given.
    pub fn new(chars: impl Into<Vec<char>>) -> Result<Self, ConfigError> {
        let chars: Vec<char> = chars.into();
        if chars.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        Ok(Self {
            chars: chars.into(),
            char_to_index: Arc::new(char_to_index),
        })
    }

    /// Uppercase A-Z plus the space character.
    pub fn uppercase_with_space() -> Self {
        Self::from_chars_unchecked(UPPERCASE_WITH_SPACE.chars().collect())
    }

    fn from_chars_unchecked(chars: Vec<char>) -> Self {
        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self {
            chars: chars.into(),
            char_to_index: Arc::new(char_to_index),
        }
    }

    /// Number of characters (duplicates included).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty alphabets.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn get_char(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    #[inline]
    pub fn get_index(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }

    /// Return the characters of `text` that are not part of this alphabet,
    /// in order of first appearance.
    pub fn foreign_chars(&self, text: &str) -> Vec<char> {
        let mut foreign = Vec::new();
        for c in text.chars() {
            if !self.contains(c) && !foreign.contains(&c) {
                foreign.push(c);
            }
        }
        foreign
    }

    /// Draw one character uniformly at random.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::uppercase_with_space()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they point to the same Arc
        Arc::ptr_eq(&self.chars, &other.chars) || self.chars == other.chars
    }
}

impl Eq for Alphabet {}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect::<Vec<_>>())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
