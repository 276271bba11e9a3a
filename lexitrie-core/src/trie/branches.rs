//! Child storage for branching nodes.
//!
//! Children are kept in insertion order and found by a linear scan over their
//! characters.
//!
//! ## Growth
//!
//! Capacity follows a fixed ascending table and doubles once the table runs
//! out:
//!
//! ```text
//! 0 -> 2 -> 3 -> 5 -> 7 -> 11 -> 17 -> 23 -> 37 -> 53 -> 79 -> 113 -> 226 -> ...
//! ```
//!
//! Most nodes have two or three children and never reallocate past the first
//! steps.

use crate::trie::node::TrieNode;

const BRANCH_CAPACITIES: [usize; 11] = [2, 3, 5, 7, 11, 17, 23, 37, 53, 79, 113];

/// Next capacity after `current`. Always strictly greater.
#[inline]
pub(crate) fn next_capacity(current: usize) -> usize {
    BRANCH_CAPACITIES
        .iter()
        .copied()
        .find(|&cap| cap > current)
        .unwrap_or(current * 2)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Branches {
    nodes: Vec<TrieNode>,
}

impl Branches {
    pub(crate) fn with_node(node: TrieNode) -> Self {
        let mut branches = Self::default();
        branches.push(node);
        branches
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub(crate) fn find(&self, ch: char) -> Option<&TrieNode> {
        self.nodes.iter().find(|node| node.ch == ch)
    }

    #[inline]
    pub(crate) fn find_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        self.nodes.iter_mut().find(|node| node.ch == ch)
    }

    #[inline]
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, TrieNode> {
        self.nodes.iter()
    }

    /// Appends `node`, growing along the capacity table when full.
    ///
    /// The caller guarantees no existing child has the same character.
    pub(crate) fn push(&mut self, node: TrieNode) {
        debug_assert!(self.find(node.ch).is_none(), "duplicate branch character");

        if self.nodes.len() == self.nodes.capacity() {
            let target = next_capacity(self.nodes.capacity());
            self.nodes.reserve_exact(target - self.nodes.len());
        }
        self.nodes.push(node);
    }
}
