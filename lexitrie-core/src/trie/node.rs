//! Trie node layout.
//!
//! ```text
//! root('\0', 0)
//!  └─ Fork { prefix: [], branches }
//!      ├─ 'b' (1) Fork { prefix: [r, o, w], branches }
//!      │            ├─ 'n' (5) Run(['\0'])            "brown"
//!      │            └─ 's' (5) Run(['\0'])            "brows"
//!      └─ 'f' (1) Fork { prefix: [], branches }
//!                   └─ 'o' (2) Fork { prefix: [], ... "fox"
//! ```
//!
//! A node's `depth` is the number of sequence characters consumed once its own
//! character has been matched. Characters of its run follow at `depth`,
//! `depth + 1`, and so on.

use lexitrie_types::SENTINEL;
use smallvec::SmallVec;

use crate::trie::branches::Branches;

/// Runs up to this many characters live inline in the node.
pub(crate) const RUN_INLINE: usize = 6;

/// An unbranching chain of characters stored flat.
pub(crate) type Run = SmallVec<[char; RUN_INLINE]>;

/// What follows a node's own character.
#[derive(Debug, Clone)]
pub(crate) enum Tail {
    /// Nothing: the root before the first insert, or a sentinel leaf.
    Empty,
    /// A terminal chain. Always ends with the sentinel.
    Run(Run),
    /// A shared chain (possibly empty, never containing the sentinel) followed
    /// by one child per distinct next character.
    Fork { prefix: Run, branches: Branches },
}

impl Tail {
    /// The compressed characters directly below the node.
    #[inline(always)]
    pub(crate) fn run(&self) -> &[char] {
        match self {
            Tail::Empty => &[],
            Tail::Run(run) => run,
            Tail::Fork { prefix, .. } => prefix,
        }
    }

    #[inline(always)]
    pub(crate) fn branches(&self) -> Option<&Branches> {
        match self {
            Tail::Fork { branches, .. } => Some(branches),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    pub(crate) ch: char,
    pub(crate) depth: u8,
    pub(crate) tail: Tail,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            ch: SENTINEL,
            depth: 0,
            tail: Tail::Empty,
        }
    }

    /// Builds a fresh path for `ch` at `depth` followed by `rest`.
    ///
    /// `rest` must end with the sentinel (or be empty when `ch` is the
    /// sentinel). Anything longer than one character keeps its last two
    /// characters in a nested node, so a later insert that diverges near the
    /// end of this word splits a short run instead of rewriting a long one.
    pub(crate) fn for_suffix(ch: char, depth: usize, rest: &[char]) -> Self {
        debug_assert!(depth <= u8::MAX as usize, "depth bound is checked before insertion");

        let tail = match rest.len() {
            0 => Tail::Empty,
            1 => Tail::Run(Run::from_slice(rest)),
            len => {
                let shared = len - 2;
                let nested = TrieNode {
                    ch: rest[shared],
                    depth: (depth + shared + 1) as u8,
                    tail: Tail::Run(Run::from_slice(&rest[shared + 1..])),
                };
                Tail::Fork {
                    prefix: Run::from_slice(&rest[..shared]),
                    branches: Branches::with_node(nested),
                }
            }
        };

        Self {
            ch,
            depth: depth as u8,
            tail,
        }
    }

    /// True for a sentinel leaf (the end of a stored word).
    #[inline(always)]
    pub(crate) fn is_terminal(&self) -> bool {
        self.depth > 0 && self.ch == SENTINEL
    }
}

/// Length of the longest common prefix of `a` and `b`.
#[inline]
pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
