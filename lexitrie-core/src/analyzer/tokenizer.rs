//! Separator-based word splitting.
//!
//! The first stage of the ingestion pipeline: raw text in, candidate words out.
//! A candidate word is any maximal run of characters that contains none of the
//! separators
//!
//! ```text
//! ' '  '\'  '/'  '['  ']'  '('  ')'
//! ```
//!
//! Empty runs (leading separators, two separators in a row) produce nothing.
//!
//! ## Zero allocation
//!
//! Words are slices of the input. Every separator is a single ASCII byte, which
//! is never part of a multi-byte UTF-8 sequence, so splitting on bytes always
//! lands on character boundaries.
//!
//! ## Usage
//!
//! ```rust
//! use lexitrie_core::analyzer::Tokenizer;
//!
//! let words: Vec<_> = Tokenizer::new().words("the (quick) brown/fox").collect();
//! assert_eq!(words, ["the", "quick", "brown", "fox"]);
//! ```

use lexitrie_types::LexiconConfig;

use crate::analyzer::forms::Forms;

const fn separator_table() -> [bool; 128] {
    let mut table = [false; 128];
    table[b' ' as usize] = true;
    table[b'\\' as usize] = true;
    table[b'/' as usize] = true;
    table[b'[' as usize] = true;
    table[b']' as usize] = true;
    table[b'(' as usize] = true;
    table[b')' as usize] = true;
    table
}

static SEPARATORS: [bool; 128] = separator_table();

/// Returns true if `b` ends a candidate word.
#[inline(always)]
pub const fn is_separator(b: u8) -> bool {
    b < 128 && SEPARATORS[b as usize]
}

/// Splits text into candidate words and expands them into insertable forms.
///
/// Cheap to copy; holds only the joined-form capacity.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    joined_capacity: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with the default joined-form capacity.
    pub fn new() -> Self {
        Self::with_config(&LexiconConfig::default())
    }

    /// Creates a tokenizer using the limits from `config`.
    pub fn with_config(config: &LexiconConfig) -> Self {
        Self {
            joined_capacity: config.joined_capacity,
        }
    }

    /// Candidate words of `text`, left to right.
    #[inline]
    pub fn words<'t>(&self, text: &'t str) -> Words<'t> {
        Words { text, pos: 0 }
    }

    /// Every insertable form of every word in `text`.
    ///
    /// See [`Forms`] for the expansion rules.
    #[inline]
    pub fn forms<'t>(&self, text: &'t str) -> Forms<'t> {
        Forms::new(self.words(text), self.joined_capacity)
    }
}

/// Iterator over the candidate words of a text.
///
/// Cloning restarts nothing; it forks the iteration at the current position.
/// Call [`Tokenizer::words`] again to start over.
#[derive(Debug, Clone)]
pub struct Words<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Words<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let bytes = self.text.as_bytes();
        let mut start = self.pos;

        while start < bytes.len() && is_separator(bytes[start]) {
            start += 1;
        }

        if start == bytes.len() {
            self.pos = start;
            return None;
        }

        let end = bytes[start..]
            .iter()
            .position(|&b| is_separator(b))
            .map_or(bytes.len(), |offset| start + offset);

        self.pos = end;
        Some(&self.text[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl core::iter::FusedIterator for Words<'_> {}
