//! Text ingestion on top of the compressed trie.
//!
//! [`Lexicon`] is the glue between the analyzer and the trie: it tokenizes a
//! text, expands each word into its forms, folds them and inserts them,
//! logging and counting anything that had to be skipped.
//!
//! Threading:
//! - [`Lexicon`] is `Send + Sync` but every ingestion method takes `&mut self`.
//!   Several producers share one behind a `Mutex`, or each fill their own.

mod api;
mod types;

pub use types::{IngestReport, Lexicon, LexiconMetrics};
