//! Statistics and TrieStats.

use crate::trie::node::{TrieNode, RUN_INLINE};
use crate::trie::Trie;
use lexitrie_types::SENTINEL;

/// A snapshot of trie shape statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of distinct complete words.
    pub words: usize,
    /// Number of nodes, root included.
    pub nodes: usize,
    /// Nodes with two or more children.
    pub branching_nodes: usize,
    /// Characters stored in compressed runs, sentinels included.
    pub run_chars: usize,
    /// Runs too long to live inline in their node.
    pub spilled_runs: usize,
    /// Characters held by spilled runs.
    pub spilled_run_chars: usize,
    /// Allocated child slots across all branch sets.
    pub branch_slots: usize,
    /// Length of the longest stored word in characters.
    pub longest_word: usize,
}

impl Trie {
    /// Returns trie statistics. Walks every node.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            words: self.words,
            ..TrieStats::default()
        };
        self.root.accumulate(&mut stats);
        stats
    }
}

impl TrieNode {
    fn accumulate(&self, stats: &mut TrieStats) {
        stats.nodes += 1;

        if self.is_terminal() {
            stats.longest_word = stats.longest_word.max(self.depth as usize - 1);
        }

        let run = self.tail.run();
        stats.run_chars += run.len();
        if run.len() > RUN_INLINE {
            stats.spilled_runs += 1;
            stats.spilled_run_chars += run.len();
        }
        if run.last() == Some(&SENTINEL) {
            stats.longest_word = stats.longest_word.max(self.depth as usize + run.len() - 1);
        }

        if let Some(branches) = self.tail.branches() {
            if branches.len() > 1 {
                stats.branching_nodes += 1;
            }
            stats.branch_slots += branches.capacity();
            for child in branches.iter() {
                child.accumulate(stats);
            }
        }
    }
}

impl TrieStats {
    /// Returns approximate memory usage in bytes: the root, every allocated
    /// child slot and the heap part of spilled runs.
    pub fn memory_usage_bytes(&self) -> usize {
        let slots = (self.branch_slots + 1) * std::mem::size_of::<TrieNode>();
        let runs = self.spilled_run_chars * std::mem::size_of::<char>();
        slots + runs
    }
}

impl core::fmt::Display for TrieStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} nodes ({} branching), {} run chars, longest word {}",
            self.words, self.nodes, self.branching_nodes, self.run_chars, self.longest_word
        )?;

        if self.spilled_runs > 0 {
            write!(f, ", {} spilled runs", self.spilled_runs)?;
        }

        Ok(())
    }
}
