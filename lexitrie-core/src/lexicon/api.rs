//! Public API for ingesting text and querying the lexicon.

use lexitrie_types::LexiconError;
use smallvec::SmallVec;
use tracing::debug;

use crate::analyzer::normalizer::fold;
use crate::analyzer::Form;
use crate::lexicon::types::{IngestReport, Lexicon};
use crate::trie::TrieStats;

impl Lexicon {
    /// Ingests a text: every word, and every derived form of it, is inserted.
    ///
    /// Forms that cannot be stored are logged at `debug` level, counted in the
    /// report and skipped; the rest of the text is still ingested.
    pub fn add(&mut self, text: &str) -> IngestReport {
        let mut report = IngestReport::default();
        let mut current_word: Option<&str> = None;

        for next in self.tokenizer.forms(text) {
            let form = match next {
                Ok(form) => form,
                Err(error) => {
                    debug!(
                        word = current_word.unwrap_or_default(),
                        %error,
                        "skipping joined form"
                    );
                    report.skipped_joins += 1;
                    report.last_error = Some(error);
                    continue;
                }
            };

            if let Form::Whole(word) = form {
                report.words += 1;
                current_word = Some(word);
            }

            form.normalize_into(&self.normalizer, &mut self.key_buf);
            match self.trie.insert(&self.key_buf) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(error) => {
                    debug!(
                        word = current_word.unwrap_or_default(),
                        form = form.kind(),
                        %error,
                        "rejected form"
                    );
                    report.rejected += 1;
                    report.last_error = Some(error);
                }
            }
        }

        self.metrics.record(&report);
        report
    }

    /// Ingests several texts, returning the combined report.
    pub fn add_batch(&mut self, texts: &[&str]) -> IngestReport {
        let mut total = IngestReport::default();
        for text in texts {
            total += self.add(text);
        }
        debug!(texts = texts.len(), %total, "batch ingested");
        total
    }

    /// Inserts one word as given, without tokenizing or deriving forms.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::OversizedWord` or
    /// `LexiconError::ReservedCharacter`. Only `rejected_forms` is updated in
    /// either case; the stored words are unchanged.
    pub fn insert_word(&mut self, word: &str) -> Result<bool, LexiconError> {
        self.normalizer.normalize_into(word, &mut self.key_buf);
        match self.trie.insert(&self.key_buf) {
            Ok(true) => {
                self.metrics.forms_inserted += 1;
                Ok(true)
            }
            Ok(false) => {
                self.metrics.duplicate_forms += 1;
                Ok(false)
            }
            Err(error) => {
                debug!(word, %error, "rejected word");
                self.metrics.rejected_forms += 1;
                Err(error)
            }
        }
    }

    /// Returns `true` if `word` is stored as a complete form.
    ///
    /// Case-insensitive for ASCII letters, like ingestion.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.normalizer.normalize(word))
    }

    /// Returns `true` if some stored form starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        let folded: SmallVec<[char; 32]> = prefix.chars().map(fold).collect();
        self.trie.contains_prefix(&folded)
    }

    /// Every stored form starting with `prefix`, in lexicographic order.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let folded: SmallVec<[char; 32]> = prefix.chars().map(fold).collect();
        self.trie.completions(&folded)
    }

    /// Returns trie statistics.
    pub fn stats(&self) -> TrieStats {
        self.trie.stats()
    }
}
