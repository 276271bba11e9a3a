//! Lexicon types and metrics.

use core::fmt;
use core::ops::AddAssign;

use lexitrie_types::{LexiconConfig, LexiconError};

use crate::analyzer::normalizer::{TextNormalizer, WordKey};
use crate::analyzer::tokenizer::Tokenizer;
use crate::trie::Trie;

/// Incremental prefix index over natural-language text.
///
/// Owns the analysis pipeline and the trie; feeds every form of every word
/// in an ingested text into the trie and answers case-insensitive lookups.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) trie: Trie,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) config: LexiconConfig,
    /// Reusable key buffer for insertion and lookup
    pub(crate) key_buf: WordKey,
    pub(crate) metrics: LexiconMetrics,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Creates an empty lexicon with default limits.
    pub fn new() -> Self {
        let config = LexiconConfig::default();
        Self {
            trie: Trie::new(),
            tokenizer: Tokenizer::with_config(&config),
            normalizer: TextNormalizer::new(),
            config,
            key_buf: WordKey::new(),
            metrics: LexiconMetrics::default(),
        }
    }

    /// Creates an empty lexicon with custom limits.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::InvalidConfig` if `config` fails validation.
    pub fn with_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        Ok(Self {
            trie: Trie::with_config(&config)?,
            tokenizer: Tokenizer::with_config(&config),
            config,
            ..Self::new()
        })
    }

    /// Returns the active limits.
    #[inline(always)]
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Returns the underlying trie.
    #[inline(always)]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of distinct forms stored.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if nothing has been stored.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Returns running totals since construction.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> LexiconMetrics {
        self.metrics
    }
}

/// Outcome of ingesting one or more texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Candidate words found by the tokenizer.
    pub words: usize,
    /// Forms that were new to the trie.
    pub inserted: usize,
    /// Forms that were already stored.
    pub duplicates: usize,
    /// Forms rejected by the trie (oversized or reserved character).
    pub rejected: usize,
    /// Joined compound forms skipped for exceeding the scratch capacity.
    pub skipped_joins: usize,
    /// Most recent error, if any form was rejected or skipped.
    pub last_error: Option<LexiconError>,
}

impl IngestReport {
    /// Total forms produced, whatever happened to them.
    pub fn forms(&self) -> usize {
        self.inserted + self.duplicates + self.rejected + self.skipped_joins
    }

    /// Returns `true` if no form was rejected or skipped.
    pub fn is_clean(&self) -> bool {
        self.rejected == 0 && self.skipped_joins == 0
    }
}

impl AddAssign for IngestReport {
    fn add_assign(&mut self, other: Self) {
        self.words += other.words;
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
        self.rejected += other.rejected;
        self.skipped_joins += other.skipped_joins;
        if other.last_error.is_some() {
            self.last_error = other.last_error;
        }
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} new forms, {} duplicates",
            self.words, self.inserted, self.duplicates
        )?;
        if !self.is_clean() {
            write!(
                f,
                ", {} rejected, {} joins skipped",
                self.rejected, self.skipped_joins
            )?;
        }
        Ok(())
    }
}

/// Basic operational metrics for the lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconMetrics {
    /// Texts passed to `add` (batch entries count individually).
    pub texts_ingested: u64,
    /// Forms that were new to the trie.
    pub forms_inserted: u64,
    /// Forms that were already stored.
    pub duplicate_forms: u64,
    /// Forms rejected by the trie.
    pub rejected_forms: u64,
    /// Joined forms skipped for exceeding the scratch capacity.
    pub skipped_joins: u64,
}

impl LexiconMetrics {
    pub(crate) fn record(&mut self, report: &IngestReport) {
        self.texts_ingested += 1;
        self.forms_inserted += report.inserted as u64;
        self.duplicate_forms += report.duplicates as u64;
        self.rejected_forms += report.rejected as u64;
        self.skipped_joins += report.skipped_joins as u64;
    }
}
