//! Core types and limits for the lexitrie prefix index.
//!
//! This crate holds the pieces shared by every part of the index:
//!
//! - **Limits**: the end-of-word sentinel, the depth bound, the joined-form scratch size
//! - **Errors**: the single [`LexiconError`] enum returned across the workspace
//! - **Configuration**: [`LexiconConfig`] and its presets
//!
//! Keeping these separate from the algorithm crate means callers can match on
//! errors and build configs without depending on the trie internals.

#![warn(missing_docs)]

use thiserror::Error;

/// End-of-word marker appended to every inserted sequence.
///
/// A path through the trie is a complete word iff this character is the next
/// character along it. Input containing it is rejected at insertion.
pub const SENTINEL: char = '\0';

/// Deepest position a trie node can record.
///
/// Node depth is stored in a `u8`; this names the bound instead of relying on
/// the counter wrapping.
pub const MAX_DEPTH: usize = u8::MAX as usize;

/// Longest word (in characters) the trie accepts.
///
/// One level of [`MAX_DEPTH`] is taken by the sentinel.
pub const MAX_WORD_CHARS: usize = MAX_DEPTH - 1;

/// Default scratch capacity for the hyphen-removed form of a compound word.
pub const DEFAULT_JOINED_CAPACITY: usize = 128;

/// Errors raised while analyzing or inserting a single word.
///
/// None of these are fatal to ingestion: each one describes exactly one form
/// that was not inserted. The trie is untouched when any of them is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexiconError {
    /// Word is longer than the depth counter can represent.
    #[error("word too long: {length} characters (max: {max_length} characters)")]
    OversizedWord {
        /// Length of the rejected word in characters.
        length: usize,
        /// Configured maximum in characters.
        max_length: usize,
    },
    /// Left and right parts of a compound do not fit the joined-form scratch.
    #[error("joined form too long: {length} characters (capacity: {capacity} characters)")]
    OversizedCombinedForm {
        /// Combined length of both parts in characters.
        length: usize,
        /// Configured scratch capacity in characters.
        capacity: usize,
    },
    /// Word contains the end-of-word sentinel.
    #[error("word contains the reserved end-of-word marker at character {position}")]
    ReservedCharacter {
        /// Character offset of the sentinel within the word.
        position: usize,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

/// Ingestion limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Longest accepted word in characters. Must be in `1..=MAX_WORD_CHARS`.
    pub max_word_chars: usize,
    /// Scratch capacity for joined compound forms, in characters.
    /// A joined form is inserted only when both parts together are strictly
    /// shorter than this.
    pub joined_capacity: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            max_word_chars: MAX_WORD_CHARS,
            joined_capacity: DEFAULT_JOINED_CAPACITY,
        }
    }
}

impl LexiconConfig {
    /// Tighter limits for short-token vocabularies.
    pub const fn compact() -> Self {
        Self {
            max_word_chars: 64,
            joined_capacity: 64,
        }
    }

    /// Checks every limit against the bounds the trie can honor.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::InvalidConfig` naming the first violated limit.
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.max_word_chars == 0 {
            return Err(LexiconError::InvalidConfig {
                reason: "max_word_chars must be greater than 0",
            });
        }

        if self.max_word_chars > MAX_WORD_CHARS {
            return Err(LexiconError::InvalidConfig {
                reason: "max_word_chars exceeds the trie depth bound (254)",
            });
        }

        if self.joined_capacity == 0 {
            return Err(LexiconError::InvalidConfig {
                reason: "joined_capacity must be greater than 0",
            });
        }

        Ok(())
    }
}
