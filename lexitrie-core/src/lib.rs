//! Path-compressed prefix trie fed by a word-form tokenizer.
//!
//! The crate is split in three layers:
//!
//! - [`analyzer`]: splits text into candidate words, expands each word into
//!   its insertable forms and folds them into sentinel-terminated keys
//! - [`trie`]: the compressed trie itself, with insertion, lookups and
//!   shape statistics
//! - [`lexicon`]: the [`Lexicon`] facade tying both together
//!
//! ```rust
//! use lexitrie_core::Lexicon;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.add("The quick brown-fox");
//!
//! assert!(lexicon.contains("brownfox"));
//! assert!(lexicon.contains("uick"));
//! assert_eq!(lexicon.completions("bro"), ["brown", "brown-fox", "brownfox"]);
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod trie;

pub use analyzer::{Form, Tokenizer, WordKey};
pub use lexicon::{IngestReport, Lexicon, LexiconMetrics};
pub use trie::{Trie, TrieStats};

pub use lexitrie_types::{
    LexiconConfig, LexiconError, DEFAULT_JOINED_CAPACITY, MAX_DEPTH, MAX_WORD_CHARS, SENTINEL,
};
