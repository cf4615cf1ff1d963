// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trie storage: node arena, insertion, and inspection.

use alloc::string::String;
use alloc::vec::Vec;
use grove_layout::{Marks, Scroll, ScrollBar};
use smallvec::SmallVec;

use crate::view::TrieGeometry;

/// Identifier for a trie node. The root is always present.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TrieId(u32);

impl TrieId {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) fn from_index(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "tries built from typed input stay far below u32::MAX nodes"
        )]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TrieNode {
    pub(crate) ch: Option<char>,
    pub(crate) is_end: bool,
    /// Children in creation order; keys are unique.
    pub(crate) children: SmallVec<[(char, TrieId); 4]>,
    pub(crate) marks: Marks,
}

impl TrieNode {
    fn new(ch: Option<char>) -> Self {
        Self {
            ch,
            is_end: false,
            children: SmallVec::new(),
            marks: Marks::empty(),
        }
    }

    pub(crate) fn child(&self, ch: char) -> Option<TrieId> {
        self.children
            .iter()
            .find_map(|&(c, id)| (c == ch).then_some(id))
    }
}

/// Prefix tree over `char`s with scroll state for its layout.
#[derive(Clone, Debug)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    pub(crate) edges: Vec<(TrieId, TrieId)>,
    pub(crate) geometry: TrieGeometry,
    pub(crate) scroll: Scroll,
    pub(crate) scrollbar: ScrollBar,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Self::with_geometry(TrieGeometry::default())
    }

    /// Creates a trie holding only the root, laid out with `geometry`.
    pub fn with_geometry(geometry: TrieGeometry) -> Self {
        let mut trie = Self {
            nodes: Vec::from([TrieNode::new(None)]),
            edges: Vec::new(),
            geometry,
            scroll: Scroll::new(geometry.viewport_height, geometry.wheel_step),
            scrollbar: ScrollBar::default(),
        };
        trie.refresh_scroll();
        trie
    }

    /// Inserts `word`, creating nodes on demand, and returns its terminal node.
    ///
    /// The empty word marks the root as terminal.
    pub fn insert(&mut self, word: &str) -> TrieId {
        let mut current = TrieId::ROOT;
        for ch in word.chars() {
            current = match self.nodes[current.idx()].child(ch) {
                Some(next) => next,
                None => {
                    let id = TrieId::from_index(self.nodes.len());
                    self.nodes.push(TrieNode::new(Some(ch)));
                    self.nodes[current.idx()].children.push((ch, id));
                    self.edges.push((current, id));
                    id
                }
            };
        }
        self.nodes[current.idx()].is_end = true;
        self.refresh_scroll();
        current
    }

    /// Inserts each word and returns how many nodes were created.
    pub fn insert_all<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) -> usize {
        let before = self.nodes.len();
        for word in words {
            self.insert(word);
        }
        self.nodes.len() - before
    }

    /// Drops every node except a fresh root and scrolls back to the top.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new(None));
        self.edges.clear();
        self.scroll.reset();
        self.refresh_scroll();
        tracing::debug!("trie reset");
    }

    /// The root node.
    pub const fn root(&self) -> TrieId {
        TrieId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if only the root is present.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Character held by `id` (`None` for the root).
    pub fn char_of(&self, id: TrieId) -> Option<char> {
        self.nodes.get(id.idx()).and_then(|n| n.ch)
    }

    /// Returns true if a word ends at `id`.
    pub fn is_terminal(&self, id: TrieId) -> bool {
        self.nodes.get(id.idx()).is_some_and(|n| n.is_end)
    }

    /// Child of `id` reached through `ch`.
    pub fn child(&self, id: TrieId, ch: char) -> Option<TrieId> {
        self.nodes.get(id.idx()).and_then(|n| n.child(ch))
    }

    /// Children of `id` in creation order.
    pub fn children_of(&self, id: TrieId) -> impl Iterator<Item = TrieId> + '_ {
        self.nodes
            .get(id.idx())
            .into_iter()
            .flat_map(|n| n.children.iter().map(|&(_, c)| c))
    }

    /// Marks of `id`.
    pub fn marks(&self, id: TrieId) -> Option<Marks> {
        self.nodes.get(id.idx()).map(|n| n.marks)
    }

    /// `(parent, child)` edges in creation order.
    pub fn edges(&self) -> &[(TrieId, TrieId)] {
        &self.edges
    }

    /// Every stored word, depth first in child creation order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack: Vec<(TrieId, String)> = Vec::from([(TrieId::ROOT, String::new())]);
        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id.idx()];
            if node.is_end {
                out.push(prefix.clone());
            }
            for &(ch, child) in node.children.iter().rev() {
                let mut next = prefix.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }
        out
    }
}
