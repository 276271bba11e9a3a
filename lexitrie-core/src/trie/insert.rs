//! Insertion: descent, run splitting and leaf extension.

use core::mem;

use lexitrie_types::{LexiconError, SENTINEL};
use tracing::trace;

use crate::analyzer::normalizer::WordKey;
use crate::trie::branches::Branches;
use crate::trie::node::{common_prefix, Run, Tail, TrieNode};
use crate::trie::Trie;

impl Trie {
    /// Inserts a normalized word.
    ///
    /// Returns `Ok(true)` if the word was new and `Ok(false)` if it was already
    /// stored. Inserting a duplicate never allocates.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::OversizedWord` if the word is longer than the
    /// trie's word limit and `LexiconError::ReservedCharacter` if it contains
    /// the sentinel. Both are detected before any node is touched.
    pub fn insert(&mut self, key: &WordKey) -> Result<bool, LexiconError> {
        self.check(key)?;

        let inserted = self.root.insert(key.as_chars(), 0);
        if inserted {
            self.words += 1;
        }
        Ok(inserted)
    }

    fn check(&self, key: &WordKey) -> Result<(), LexiconError> {
        let length = key.len();
        if length > self.max_word_chars {
            return Err(LexiconError::OversizedWord {
                length,
                max_length: self.max_word_chars,
            });
        }

        if let Some(position) = key.body().iter().position(|&c| c == SENTINEL) {
            return Err(LexiconError::ReservedCharacter { position });
        }

        Ok(())
    }
}

impl TrieNode {
    /// Inserts `seq[depth..]` below this node. `depth` equals `self.depth`.
    fn insert(&mut self, seq: &[char], depth: usize) -> bool {
        debug_assert_eq!(depth, self.depth as usize);

        if depth == seq.len() {
            return false;
        }

        let rest = &seq[depth..];
        match &mut self.tail {
            Tail::Empty => {
                self.tail = Tail::Fork {
                    prefix: Run::new(),
                    branches: Branches::with_node(TrieNode::for_suffix(
                        rest[0],
                        depth + 1,
                        &rest[1..],
                    )),
                };
                true
            }
            Tail::Run(run) => {
                let k = common_prefix(run, rest);
                // Both end with the sentinel, so a full run match is the whole word.
                if k == run.len() {
                    return false;
                }

                let (prefix, mut branches) = split_run(run, k, depth);
                branches.push(TrieNode::for_suffix(rest[k], depth + k + 1, &rest[k + 1..]));
                self.tail = Tail::Fork { prefix, branches };
                true
            }
            Tail::Fork { prefix, branches } => {
                let k = common_prefix(prefix, rest);
                if k < prefix.len() {
                    split_prefix(prefix, branches, k, depth);
                }
                branches.attach(seq, depth + k)
            }
        }
    }
}

/// Splits a terminal run at `at`: `run[..at]` becomes the shared prefix and
/// `run[at]` the single child, holding whatever followed it.
fn split_run(run: &[char], at: usize, depth: usize) -> (Run, Branches) {
    trace!(depth, at, "splitting terminal run");

    let rest = &run[at + 1..];
    let tail = if rest.is_empty() {
        Tail::Empty
    } else {
        Tail::Run(Run::from_slice(rest))
    };
    let child = TrieNode {
        ch: run[at],
        depth: (depth + at + 1) as u8,
        tail,
    };

    (Run::from_slice(&run[..at]), Branches::with_node(child))
}

/// Splits a shared prefix at `at` in place. The new single child takes
/// `prefix[at]`, the rest of the prefix and every existing branch.
fn split_prefix(prefix: &mut Run, branches: &mut Branches, at: usize, depth: usize) {
    trace!(depth, at, "splitting shared prefix");

    let child = TrieNode {
        ch: prefix[at],
        depth: (depth + at + 1) as u8,
        tail: Tail::Fork {
            prefix: Run::from_slice(&prefix[at + 1..]),
            branches: mem::take(branches),
        },
    };

    prefix.truncate(at);
    *branches = Branches::with_node(child);
}

impl Branches {
    /// Continues the insertion at `seq[depth]` below a consumed run.
    fn attach(&mut self, seq: &[char], depth: usize) -> bool {
        let ch = seq[depth];
        if let Some(child) = self.find_mut(ch) {
            return child.insert(seq, depth + 1);
        }
        self.push(TrieNode::for_suffix(ch, depth + 1, &seq[depth + 1..]));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::node::Tail;
    use lexitrie_types::{LexiconConfig, MAX_WORD_CHARS};

    fn key(word: &str) -> WordKey {
        WordKey::from_word(word)
    }

    fn insert(trie: &mut Trie, word: &str) -> bool {
        trie.insert(&key(word)).expect("insert should succeed")
    }

    #[test]
    fn first_word_hangs_off_root() {
        let mut trie = Trie::new();
        assert!(insert(&mut trie, "fox"));

        let branches = trie.root.tail.branches().expect("root fork");
        assert!(trie.root.tail.run().is_empty());
        assert_eq!(branches.len(), 1);
        assert_eq!(branches.find('f').map(|n| n.depth), Some(1));
    }

    #[test]
    fn duplicate_is_noop() {
        let mut trie = Trie::new();
        assert!(insert(&mut trie, "brown"));
        let before = trie.stats();
        assert!(!insert(&mut trie, "brown"));
        assert!(!insert(&mut trie, "BROWN"));
        let after = trie.stats();

        assert_eq!(trie.len(), 1);
        assert_eq!(before.nodes, after.nodes);
        assert_eq!(before.run_chars, after.run_chars);
    }

    #[test]
    fn divergence_inside_shared_prefix_splits() {
        let mut trie = Trie::new();
        // "brown" leaves 'b' Fork{[r, o, w], ['n']}; "bread" diverges at 'o'
        insert(&mut trie, "brown");
        insert(&mut trie, "bread");

        let b = trie.root.tail.branches().and_then(|br| br.find('b')).expect("b");
        assert_eq!(b.tail.run(), &['r']);
        let branches = b.tail.branches().expect("fork after split");
        assert_eq!(branches.len(), 2);

        let o = branches.find('o').expect("inherited remainder");
        assert_eq!(o.depth, 3);
        assert!(o.tail.branches().is_some(), "old branch set carried over");
        assert!(branches.find('e').is_some());

        assert!(trie.contains(&key("brown")));
        assert!(trie.contains(&key("bread")));
    }

    #[test]
    fn divergence_at_start_of_prefix() {
        let mut trie = Trie::new();
        insert(&mut trie, "jumps");
        insert(&mut trie, "jx");

        let j = trie.root.tail.branches().and_then(|br| br.find('j')).expect("j");
        assert!(j.tail.run().is_empty());
        assert_eq!(j.tail.branches().map(Branches::len), Some(2));
        assert!(trie.contains(&key("jumps")));
        assert!(trie.contains(&key("jx")));
    }

    #[test]
    fn word_ending_inside_existing_word() {
        let mut trie = Trie::new();
        insert(&mut trie, "quick");
        assert!(insert(&mut trie, "qui"));

        assert!(trie.contains(&key("quick")));
        assert!(trie.contains(&key("qui")));
        assert!(!trie.contains(&key("quic")));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn word_extending_existing_word() {
        let mut trie = Trie::new();
        insert(&mut trie, "over");
        assert!(insert(&mut trie, "overt"));
        assert!(insert(&mut trie, "overture"));

        for w in ["over", "overt", "overture"] {
            assert!(trie.contains(&key(w)), "{w} missing");
        }
        assert!(!trie.contains(&key("overtu")));
    }

    #[test]
    fn terminal_run_split_at_sentinel() {
        let mut trie = Trie::new();
        insert(&mut trie, "ab");
        // 'a' Fork{[], ['b' Run([\0])]}; "abc" diverges from Run([\0]) at 0
        insert(&mut trie, "abc");

        let a = trie.root.tail.branches().and_then(|br| br.find('a')).expect("a");
        let b = a.tail.branches().and_then(|br| br.find('b')).expect("b");
        let children = b.tail.branches().expect("b forks");
        assert_eq!(children.len(), 2);
        assert!(children.find(SENTINEL).is_some_and(TrieNode::is_terminal));
        assert!(children.find('c').is_some());
    }

    #[test]
    fn single_char_words() {
        let mut trie = Trie::new();
        for w in ["a", "b", "a", "c"] {
            insert(&mut trie, w);
        }
        assert_eq!(trie.len(), 3);
        assert!(trie.contains(&key("a")));
        assert!(!trie.contains(&key("d")));
    }

    #[test]
    fn empty_word() {
        let mut trie = Trie::new();
        assert!(!trie.contains(&WordKey::new()));
        assert!(trie.insert(&WordKey::new()).unwrap());
        assert!(trie.contains(&WordKey::new()));
        assert!(!trie.insert(&WordKey::new()).unwrap());
    }

    #[test]
    fn many_siblings_grow_branches() {
        let mut trie = Trie::new();
        let words: Vec<String> = ('a'..='z').map(|c| format!("x{c}yz")).collect();
        for w in &words {
            assert!(insert(&mut trie, w));
        }
        for w in &words {
            assert!(trie.contains(&key(w)));
        }
        assert_eq!(trie.len(), 26);
    }

    #[test]
    fn rejects_oversized_word_without_mutation() {
        let mut trie = Trie::new();
        insert(&mut trie, "dog");
        let before = trie.stats();

        let long = "a".repeat(MAX_WORD_CHARS + 1);
        let err = trie.insert(&key(&long)).unwrap_err();
        assert_eq!(
            err,
            LexiconError::OversizedWord {
                length: MAX_WORD_CHARS + 1,
                max_length: MAX_WORD_CHARS,
            }
        );

        let after = trie.stats();
        assert_eq!(before.nodes, after.nodes);
        assert_eq!(trie.len(), 1);
        assert!(!trie.contains_prefix(&['a']));
    }

    #[test]
    fn accepts_word_at_depth_bound() {
        let mut trie = Trie::new();
        let longest = "z".repeat(MAX_WORD_CHARS);
        assert!(insert(&mut trie, &longest));
        assert!(trie.contains(&key(&longest)));

        let sibling = format!("{}y", "z".repeat(MAX_WORD_CHARS - 1));
        assert!(insert(&mut trie, &sibling));
        assert!(trie.contains(&key(&sibling)));
        assert!(trie.contains(&key(&longest)));
    }

    #[test]
    fn configured_word_limit() {
        let mut trie = Trie::with_config(&LexiconConfig {
            max_word_chars: 4,
            ..Default::default()
        })
        .unwrap();
        assert!(insert(&mut trie, "lazy"));
        assert!(matches!(
            trie.insert(&key("lazier")),
            Err(LexiconError::OversizedWord { length: 6, max_length: 4 })
        ));
    }

    #[test]
    fn rejects_reserved_character() {
        let mut trie = Trie::new();
        let err = trie.insert(&key("do\0g")).unwrap_err();
        assert_eq!(err, LexiconError::ReservedCharacter { position: 2 });
        assert!(trie.is_empty());
        assert!(matches!(trie.root.tail, Tail::Empty));
    }

    #[test]
    fn sentinel_only_ends_runs() {
        let mut trie = Trie::new();
        for w in ["the", "then", "there", "these", "thesis", "t"] {
            insert(&mut trie, w);
        }

        fn walk(node: &TrieNode) {
            match &node.tail {
                Tail::Empty => {}
                Tail::Run(run) => {
                    assert_eq!(run.last(), Some(&SENTINEL));
                    assert!(!run[..run.len() - 1].contains(&SENTINEL));
                }
                Tail::Fork { prefix, branches } => {
                    assert!(!prefix.contains(&SENTINEL));
                    assert!(branches.len() > 0);
                    branches.iter().for_each(walk);
                }
            }
        }
        walk(&trie.root);
    }

    #[test]
    fn depths_are_consistent() {
        let mut trie = Trie::new();
        for w in ["brown", "brownfox", "brow", "bread", "fox"] {
            insert(&mut trie, w);
        }

        fn walk(node: &TrieNode) {
            if let Tail::Fork { prefix, branches } = &node.tail {
                for child in branches.iter() {
                    assert_eq!(
                        child.depth as usize,
                        node.depth as usize + prefix.len() + 1
                    );
                    walk(child);
                }
            }
        }
        walk(&trie.root);
    }
}
