//! Read-only traversals mirroring the insertion descent.

use lexitrie_types::SENTINEL;
use smallvec::SmallVec;

use crate::analyzer::normalizer::WordKey;
use crate::trie::node::{common_prefix, TrieNode};
use crate::trie::Trie;

impl Trie {
    /// Returns `true` if `key` was inserted as a complete word.
    #[inline]
    pub fn contains(&self, key: &WordKey) -> bool {
        self.locate(key.as_chars()).is_some()
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// `prefix` is matched as given; fold it first for case-insensitive lookup.
    /// The empty prefix is always reachable.
    #[inline]
    pub fn contains_prefix(&self, prefix: &[char]) -> bool {
        self.locate(prefix).is_some()
    }

    /// Every stored word starting with `prefix`, in lexicographic order.
    pub fn completions(&self, prefix: &[char]) -> Vec<String> {
        let mut out = Vec::new();
        if let Some((node, before)) = self.locate(prefix) {
            let mut path: String = prefix[..before].iter().collect();
            node.collect_words(&mut path, &mut out);
        }
        out
    }

    /// Finds the node whose character or run holds the end of `seq`.
    ///
    /// Returns the node and the number of `seq` characters consumed before the
    /// node's own character.
    fn locate(&self, seq: &[char]) -> Option<(&TrieNode, usize)> {
        let mut node = &self.root;
        let mut before = 0;
        let mut pos = 0;

        loop {
            let rest = &seq[pos..];
            let run = node.tail.run();
            let k = common_prefix(run, rest);

            if k == rest.len() {
                return Some((node, before));
            }
            if k < run.len() {
                return None;
            }

            let child = node.tail.branches()?.find(rest[k])?;
            before = pos + k;
            pos = before + 1;
            node = child;
        }
    }
}

impl TrieNode {
    /// Appends every complete word at or below this node to `out`.
    ///
    /// `path` holds the characters before this node's own character and is
    /// restored before returning.
    fn collect_words(&self, path: &mut String, out: &mut Vec<String>) {
        let mark = path.len();

        if self.depth > 0 {
            if self.ch == SENTINEL {
                out.push(path.clone());
                return;
            }
            path.push(self.ch);
        }

        for &c in self.tail.run() {
            if c == SENTINEL {
                out.push(path.clone());
            } else {
                path.push(c);
            }
        }

        if let Some(branches) = self.tail.branches() {
            let mut children: SmallVec<[&TrieNode; 8]> = branches.iter().collect();
            children.sort_unstable_by_key(|child| child.ch);
            for child in children {
                child.collect_words(path, out);
            }
        }

        path.truncate(mark);
    }
}
