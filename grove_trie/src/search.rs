// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment search and strict prefix lookup.

use alloc::vec::Vec;
use grove_layout::Marks;
use hashbrown::HashSet;

use crate::trie::{Trie, TrieId};

/// A node being explored by the containment walk.
struct Frame {
    id: TrieId,
    index: usize,
    matched: bool,
    /// Position in the node's call sequence.
    next: usize,
}

enum Visit {
    Found,
    Open(Frame),
    Skip,
}

impl Trie {
    /// Containment-style search for `word`.
    ///
    /// Starting at the root, a node matches when the word index is in range and
    /// its character occurs anywhere in `word`. A matching node at the last index
    /// completes the search. Otherwise its children are tried at the next index,
    /// and then every child is tried again at the current index. The first
    /// completed branch wins.
    ///
    /// Matched nodes are marked [`Marks::HIGHLIGHTED`] and the completing node
    /// [`Marks::FOUND`]; earlier marks are cleared first.
    pub fn search(&mut self, word: &str) -> bool {
        self.clear_marks();
        let word: Vec<char> = word.chars().collect();
        let found = self.search_containment(&word);
        if !found {
            tracing::debug!(word = ?word, "no containment match in trie");
        }
        found
    }

    /// Runs the containment walk over an explicit stack.
    ///
    /// A `(node, index)` pair that already failed fails again with the same
    /// marks, so it is recorded and skipped on every later visit.
    fn search_containment(&mut self, word: &[char]) -> bool {
        let mut failed: HashSet<(TrieId, usize)> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();
        match self.enter(TrieId::ROOT, 0, word, &failed) {
            Visit::Found => return true,
            Visit::Open(frame) => stack.push(frame),
            Visit::Skip => return false,
        }
        while let Some(frame) = stack.last_mut() {
            let children = &self.nodes[frame.id.idx()].children;
            let n = children.len();
            // A matched node first tries its children one index further,
            // then every node retries its children at the same index.
            let calls = if frame.matched { 2 * n } else { n };
            if frame.next >= calls {
                failed.insert((frame.id, frame.index));
                stack.pop();
                continue;
            }
            let (child, index) = if frame.matched && frame.next < n {
                (children[frame.next].1, frame.index + 1)
            } else {
                let k = if frame.matched { frame.next - n } else { frame.next };
                (children[k].1, frame.index)
            };
            frame.next += 1;
            match self.enter(child, index, word, &failed) {
                Visit::Found => return true,
                Visit::Open(frame) => stack.push(frame),
                Visit::Skip => {}
            }
        }
        false
    }

    fn enter(
        &mut self,
        id: TrieId,
        index: usize,
        word: &[char],
        failed: &HashSet<(TrieId, usize)>,
    ) -> Visit {
        if failed.contains(&(id, index)) {
            return Visit::Skip;
        }
        let node = &mut self.nodes[id.idx()];
        let matched = index < word.len() && node.ch.is_some_and(|ch| word.contains(&ch));
        if matched {
            node.marks.insert(Marks::HIGHLIGHTED);
            if index + 1 == word.len() {
                node.marks.insert(Marks::FOUND);
                return Visit::Found;
            }
        }
        Visit::Open(Frame {
            id,
            index,
            matched,
            next: 0,
        })
    }

    /// Classic prefix walk: one child per character of `prefix`.
    ///
    /// Highlights the walked path and marks its last node found. Returns that
    /// node, or `None` (with no marks) if the path does not exist.
    pub fn search_prefix(&mut self, prefix: &str) -> Option<TrieId> {
        self.clear_marks();
        let path = self.walk(prefix)?;
        for &id in &path {
            self.nodes[id.idx()].marks.insert(Marks::HIGHLIGHTED);
        }
        let last = path.last().copied().unwrap_or(TrieId::ROOT);
        self.nodes[last.idx()].marks.insert(Marks::FOUND);
        Some(last)
    }

    /// Returns true if `word` was inserted.
    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word)
            .map(|path| path.last().copied().unwrap_or(TrieId::ROOT))
            .is_some_and(|end| self.is_terminal(end))
    }

    /// Nodes along `prefix`, excluding the root.
    fn walk(&self, prefix: &str) -> Option<Vec<TrieId>> {
        let mut path = Vec::new();
        let mut current = TrieId::ROOT;
        for ch in prefix.chars() {
            current = self.nodes[current.idx()].child(ch)?;
            path.push(current);
        }
        Some(path)
    }

    fn clear_marks(&mut self) {
        for node in &mut self.nodes {
            node.marks = Marks::empty();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;
    use alloc::vec;
    use grove_layout::Marks;

    fn cat_car() -> Trie {
        let mut trie = Trie::new();
        trie.insert_all(["cat", "car"]);
        trie
    }

    #[test]
    fn containment_search_finds_stored_words() {
        let mut trie = cat_car();
        assert!(trie.search("cat"));
        let c = trie.child(trie.root(), 'c').unwrap();
        let a = trie.child(c, 'a').unwrap();
        let t = trie.child(a, 't').unwrap();
        assert_eq!(trie.marks(c), Some(Marks::HIGHLIGHTED));
        assert_eq!(trie.marks(a), Some(Marks::HIGHLIGHTED));
        assert_eq!(trie.marks(t), Some(Marks::HIGHLIGHTED | Marks::FOUND));
    }

    #[test]
    fn containment_search_ignores_order_and_prefixes() {
        let mut trie = cat_car();
        assert!(trie.search("tac"), "characters need not be in order");
        assert!(trie.search("ca"), "a prefix completes at its last index");
        assert!(trie.search("rc"), "c then a subtree retry at 'r'");
        assert!(!trie.search("dog"));
        assert!(!trie.search(""));
        assert!(!trie.search("aa"), "a single matching level is not enough");
    }

    #[test]
    fn failed_search_clears_previous_marks() {
        let mut trie = cat_car();
        assert!(trie.search("car"));
        assert!(!trie.search("zzz"));
        let mut cursor = vec![trie.root()];
        while let Some(id) = cursor.pop() {
            assert!(
                !trie.marks(id).unwrap().is_found(),
                "no node stays found after a miss"
            );
            cursor.extend(trie.children_of(id));
        }
    }

    #[test]
    fn long_chain_miss_stays_polynomial() {
        let mut trie = Trie::new();
        trie.insert(&"a".repeat(40));
        assert!(!trie.search(&"a".repeat(41)), "the chain is one level short");
        let mut cursor = trie.root();
        while let Some(next) = trie.child(cursor, 'a') {
            assert_eq!(trie.marks(next), Some(Marks::HIGHLIGHTED));
            cursor = next;
        }
        assert!(trie.search(&"a".repeat(40)));
        assert_eq!(trie.marks(cursor), Some(Marks::HIGHLIGHTED | Marks::FOUND));
    }

    #[test]
    fn prefix_search_is_positional() {
        let mut trie = cat_car();
        let a = trie.search_prefix("ca").unwrap();
        assert_eq!(trie.char_of(a), Some('a'));
        assert_eq!(trie.marks(a), Some(Marks::HIGHLIGHTED | Marks::FOUND));
        assert!(trie.search_prefix("tac").is_none());
        assert_eq!(trie.marks(a), Some(Marks::empty()));
        assert_eq!(trie.search_prefix(""), Some(trie.root()));
    }

    #[test]
    fn contains_word_requires_terminal() {
        let trie = cat_car();
        assert!(trie.contains_word("cat"));
        assert!(trie.contains_word("car"));
        assert!(!trie.contains_word("ca"));
        assert!(!trie.contains_word("cart"));
        assert!(!trie.contains_word(""));
    }
}
