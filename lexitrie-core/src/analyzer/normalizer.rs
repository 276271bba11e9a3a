//! ASCII case folding into reusable, sentinel-terminated word keys.
//!
//! Folding is narrow: only `A`..=`Z` change, by setting bit `0x20`.
//! Digits, punctuation, the hyphen and every non-ASCII character pass through
//! untouched, so `"ÜBER"` folds to `"Über"`, not `"über"`.

use core::fmt;

use lexitrie_types::SENTINEL;
use smallvec::SmallVec;

/// Inline capacity of a [`WordKey`]; longer words spill to the heap.
const INLINE_KEY_CHARS: usize = 32;

/// Folds one character: ASCII upper-case letters become lower-case, everything
/// else is returned as is.
#[inline(always)]
pub const fn fold(c: char) -> char {
    if c.is_ascii_uppercase() {
        ((c as u8) | 0x20) as char
    } else {
        c
    }
}

/// A normalized word ready for insertion.
///
/// Holds the folded characters of the word followed by [`SENTINEL`]. The
/// buffer is meant to be reused: [`TextNormalizer::normalize_into`] clears it
/// and keeps its capacity.
#[derive(Clone, PartialEq, Eq)]
pub struct WordKey {
    chars: SmallVec<[char; INLINE_KEY_CHARS]>,
}

impl Default for WordKey {
    fn default() -> Self {
        Self::new()
    }
}

impl WordKey {
    /// Creates the key of the empty word.
    pub fn new() -> Self {
        let mut chars = SmallVec::new();
        chars.push(SENTINEL);
        Self { chars }
    }

    /// Normalizes `word` into a fresh key.
    pub fn from_word(word: &str) -> Self {
        let mut key = Self::new();
        TextNormalizer::new().normalize_into(word, &mut key);
        key
    }

    /// The full sequence, sentinel included.
    #[inline(always)]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// The word without its sentinel.
    #[inline(always)]
    pub fn body(&self) -> &[char] {
        &self.chars[..self.chars.len() - 1]
    }

    /// Word length in characters, sentinel excluded.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chars.len() - 1
    }

    /// Returns true for the empty word.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self) {
        self.chars.clear();
    }

    fn extend_folded(&mut self, text: &str) {
        self.chars.extend(text.chars().map(fold));
    }

    fn terminate(&mut self) {
        self.chars.push(SENTINEL);
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.body() {
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordKey({:?})", self.to_string())
    }
}

/// Turns words into [`WordKey`]s.
///
/// Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Folds `word` into `out`, replacing its previous contents.
    #[inline]
    pub fn normalize_into(&self, word: &str, out: &mut WordKey) {
        self.normalize_parts_into(&[word], out);
    }

    /// Folds the concatenation of `parts` into `out`.
    ///
    /// Used for joined compound forms, so the two halves never have to be
    /// copied into an intermediate string.
    pub fn normalize_parts_into(&self, parts: &[&str], out: &mut WordKey) {
        out.clear();
        for part in parts {
            out.extend_folded(part);
        }
        out.terminate();
    }

    /// Normalizes `word` into a new key.
    #[inline]
    pub fn normalize(&self, word: &str) -> WordKey {
        let mut key = WordKey::new();
        self.normalize_into(word, &mut key);
        key
    }

    /// Compares `word` with an already lower-case literal, folding only `word`.
    pub fn eq_folded(&self, word: &str, lower: &str) -> bool {
        let mut rest = lower.chars();
        for c in word.chars() {
            match rest.next() {
                Some(expected) if fold(c) == expected => {}
                _ => return false,
            }
        }
        rest.next().is_none()
    }
}
