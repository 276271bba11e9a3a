//! Path-compressed prefix trie.
//!
//! Every stored word is a path from the root followed by the sentinel. Chains
//! of single-child positions are collapsed into flat character runs and only
//! split when a later word diverges inside one, so a word of length `L` costs
//! `O(L)` to insert and every prefix of it is reachable without being stored
//! separately.
//!
//! Threading:
//! - [`Trie`] has no interior mutability. Insertion takes `&mut self`, so the
//!   borrow checker enforces a single writer; share it behind a mutex when
//!   several producers feed one trie.

mod branches;
mod insert;
mod node;
mod search;
mod stats;

pub use stats::TrieStats;

use lexitrie_types::{LexiconConfig, LexiconError, MAX_WORD_CHARS};

use crate::trie::node::TrieNode;

/// Append-only compressed trie of normalized words.
#[derive(Debug, Clone)]
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) words: usize,
    pub(crate) max_word_chars: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie accepting words up to [`MAX_WORD_CHARS`].
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            words: 0,
            max_word_chars: MAX_WORD_CHARS,
        }
    }

    /// Creates an empty trie with the word limit from `config`.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::InvalidConfig` if `config` fails validation.
    pub fn with_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        config.validate()?;
        Ok(Self {
            max_word_chars: config.max_word_chars,
            ..Self::new()
        })
    }

    /// Number of distinct words stored.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Longest word this trie accepts, in characters.
    #[inline(always)]
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }
}
