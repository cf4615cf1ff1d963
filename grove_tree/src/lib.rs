// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Tree: depth-capped binary search tree and AVL tree engines.
//!
//! Both trees store `i32` values in an append-only node arena addressed by
//! [`NodeId`]. Nodes are never removed individually; `reset` drops the arena.
//! Inserts never descend below [`MAX_DEPTH`] (root = depth 0) unless another cap
//! is chosen with `with_max_depth`. An insert that would go deeper returns
//! [`DepthLimit`] and leaves the tree unchanged; inserting a value that is
//! already present returns [`Insertion::Duplicate`].
//!
//! - [`BinarySearchTree`]: unbalanced. Records `(parent, child)` edges in
//!   creation order and carries a [`Reveal`] counter so a host can animate the
//!   nodes and edges appearing one step at a time.
//! - [`AvlTree`]: rebalances with single and double rotations after each
//!   successful insert. The depth cap is checked while descending, before any
//!   rotation could make room, so a capped insert can be rejected even where a
//!   rotation would have absorbed it.
//!
//! Layout places the root at [`TreeGeometry::anchor`] and each child
//! `spread` to the left or right of its parent, where `spread` starts at
//! [`TreeGeometry::horizontal_spacing`] and halves per level.
//!
//! ```rust
//! use grove_tree::{AvlTree, BinarySearchTree, Rotation};
//!
//! let mut bst = BinarySearchTree::new();
//! bst.insert_all([5, 3, 8, 1, 4]);
//! assert_eq!(bst.in_order(), vec![1, 3, 4, 5, 8]);
//!
//! // Nothing is shown until the reveal runs.
//! assert!(bst.layout().is_empty());
//! bst.start_reveal();
//! while bst.tick() {}
//! assert_eq!(bst.layout().nodes.len(), 5);
//!
//! let mut avl = AvlTree::new();
//! avl.insert(10).unwrap();
//! avl.insert(20).unwrap();
//! let done = avl.insert(30).unwrap();
//! assert!(matches!(done.rotations[..], [Rotation::Left(_)]));
//! assert_eq!(avl.root().and_then(|r| avl.value(r)), Some(20));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod avl;
mod bst;
mod error;
mod geometry;
mod reveal;

pub use avl::{AvlInsertion, AvlLabel, AvlTree, Rotation};
pub use bst::BinarySearchTree;
pub use error::DepthLimit;
pub use geometry::TreeGeometry;
pub use reveal::Reveal;

/// Default deepest level (root = 0) a node may be inserted at.
pub const MAX_DEPTH: usize = 3;

/// Identifier for a node in a tree's arena.
///
/// Identifiers are only meaningful for the tree that returned them and go
/// stale on `reset`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn from_index(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "depth-capped trees hold at most a few dozen nodes"
        )]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Successful outcome of an insert.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Insertion {
    /// A new node was created.
    Inserted(NodeId),
    /// The value was already present; nothing changed.
    Duplicate(NodeId),
}

impl Insertion {
    /// The node holding the inserted value.
    pub const fn node(self) -> NodeId {
        match self {
            Self::Inserted(id) | Self::Duplicate(id) => id,
        }
    }

    /// Returns true if a node was created.
    pub const fn is_new(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}
