//! Expansion of candidate words into insertable forms.
//!
//! Every candidate word produces one or more forms:
//!
//! | word          | forms                                              |
//! |---------------|----------------------------------------------------|
//! | `dog`         | `Whole("dog")`                                     |
//! | `Quick`       | `Whole("Quick")`, `Stem("uick")`                   |
//! | `brown-fox`   | `Whole("brown-fox")`, `Left("brown")`, `Right("fox")`, `Joined("brown", "fox")` |
//! | `a-b-c`       | split at the right-most hyphen: `Left("a-b")`, `Right("c")`, ... |
//!
//! The `quick` rule is a literal special case, matched ASCII
//! case-insensitively and only for the exact word. Hyphenated words never get
//! it.
//!
//! A joined form is emitted only while both parts together are strictly
//! shorter than the joined capacity; past that the iterator yields
//! [`LexiconError::OversizedCombinedForm`] in its place and carries on.
//! Empty halves (`"-fox"`, `"brown-"`) are dropped, and so is the joined form
//! of such a word, since it would repeat the non-empty half.

use lexitrie_types::LexiconError;
use memchr::memrchr;
use smallvec::SmallVec;

use crate::analyzer::normalizer::{TextNormalizer, WordKey};
use crate::analyzer::tokenizer::Words;

const STEM_WORD: &str = "quick";

/// One insertable variant of a candidate word.
///
/// Borrowed from the input text; nothing is folded or copied until
/// [`Form::normalize_into`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form<'t> {
    /// The word exactly as it appeared, hyphen included.
    Whole(&'t str),
    /// The word minus its first character (`quick` only).
    Stem(&'t str),
    /// Text before the right-most hyphen.
    Left(&'t str),
    /// Text after the right-most hyphen.
    Right(&'t str),
    /// Left and right parts with the hyphen removed.
    Joined(&'t str, &'t str),
}

impl Form<'_> {
    /// Writes the folded, sentinel-terminated form into `out`.
    #[inline]
    pub fn normalize_into(&self, normalizer: &TextNormalizer, out: &mut WordKey) {
        match *self {
            Form::Whole(s) | Form::Stem(s) | Form::Left(s) | Form::Right(s) => {
                normalizer.normalize_into(s, out)
            }
            Form::Joined(left, right) => normalizer.normalize_parts_into(&[left, right], out),
        }
    }

    /// Short label for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Form::Whole(_) => "whole",
            Form::Stem(_) => "stem",
            Form::Left(_) => "left",
            Form::Right(_) => "right",
            Form::Joined(..) => "joined",
        }
    }
}

type Pending<'t> = SmallVec<[Result<Form<'t>, LexiconError>; 4]>;

/// Lazy iterator over the forms of every word in a text.
///
/// Created by [`Tokenizer::forms`](crate::analyzer::Tokenizer::forms).
#[derive(Debug, Clone)]
pub struct Forms<'t> {
    words: Words<'t>,
    /// Forms of the current word, stored in reverse so `pop` yields them in order.
    pending: Pending<'t>,
    joined_capacity: usize,
    normalizer: TextNormalizer,
}

impl<'t> Forms<'t> {
    pub(crate) fn new(words: Words<'t>, joined_capacity: usize) -> Self {
        Self {
            words,
            pending: SmallVec::new(),
            joined_capacity,
            normalizer: TextNormalizer::new(),
        }
    }

    fn expand(&mut self, word: &'t str) {
        let mut forms = Pending::new();
        forms.push(Ok(Form::Whole(word)));

        match memrchr(b'-', word.as_bytes()) {
            None => {
                if self.normalizer.eq_folded(word, STEM_WORD) {
                    let first = word.chars().next().map_or(0, char::len_utf8);
                    forms.push(Ok(Form::Stem(&word[first..])));
                }
            }
            Some(hyphen) => {
                let left = &word[..hyphen];
                let right = &word[hyphen + 1..];

                if !left.is_empty() {
                    forms.push(Ok(Form::Left(left)));
                }
                if !right.is_empty() {
                    forms.push(Ok(Form::Right(right)));
                }

                if !left.is_empty() && !right.is_empty() {
                    let length = left.chars().count() + right.chars().count();
                    if length >= self.joined_capacity {
                        forms.push(Err(LexiconError::OversizedCombinedForm {
                            length,
                            capacity: self.joined_capacity,
                        }));
                    } else {
                        forms.push(Ok(Form::Joined(left, right)));
                    }
                }
            }
        }

        forms.reverse();
        self.pending = forms;
    }
}

impl<'t> Iterator for Forms<'t> {
    type Item = Result<Form<'t>, LexiconError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(form) = self.pending.pop() {
                return Some(form);
            }
            let word = self.words.next()?;
            self.expand(word);
        }
    }
}

impl core::iter::FusedIterator for Forms<'_> {}
