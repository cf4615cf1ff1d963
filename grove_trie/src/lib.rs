// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Trie: a character trie engine with scrollable depth layout.
//!
//! [`Trie`] stores words character by character, sharing common prefixes. The
//! root holds no character. Nodes and edges are append-only and listed in
//! creation order; [`Trie::reset`] is the only way to drop them.
//!
//! ## Searching
//!
//! Two lookups are offered, and they answer different questions:
//!
//! - [`Trie::search`] is a containment-style walk. A node matches when its
//!   character occurs *anywhere* in the search word; a match advances the word
//!   index into that node's children, and every subtree is also tried again at
//!   the same index. The search succeeds as soon as a node matches while the
//!   index is at the last character. Character order is therefore not
//!   enforced: after inserting `"cat"`, searching `"tac"` succeeds.
//! - [`Trie::search_prefix`] is the classic walk from the root, one child per
//!   character, and [`Trie::contains_word`] additionally requires the final node
//!   to terminate a word.
//!
//! Both searches clear earlier marks, highlight the nodes they matched with
//! [`Marks::HIGHLIGHTED`](grove_layout::Marks::HIGHLIGHTED), and flag the node
//! where the match completed with [`Marks::FOUND`](grove_layout::Marks::FOUND).
//!
//! ## Layout and scrolling
//!
//! Children are placed one level below their parent, spread rightward from the
//! parent's `x` by a fixed spacing per sibling index (no centering). The trie
//! tracks a [`Scroll`](grove_layout::Scroll) offset whose maximum is the laid
//! out content height minus the viewport height; [`Trie::layout`] shifts every
//! node and edge up by the current offset.
//!
//! ```rust
//! use grove_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat");
//! trie.insert("car");
//! assert_eq!(trie.len(), 5, "root, c, a, t, r");
//!
//! assert!(trie.search("tac"), "containment search ignores order");
//! assert!(trie.search_prefix("tac").is_none());
//! assert!(trie.contains_word("car"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod search;
mod trie;
mod view;

pub use trie::{Trie, TrieId};
pub use view::{TrieGeometry, TrieLabel};
