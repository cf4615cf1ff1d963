// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unbalanced binary search tree with a reveal animation.

use alloc::vec::Vec;
use core::cmp::Ordering;
use grove_layout::{Layout, Marks, NodeLayout, link_line};
use kurbo::{Circle, Point};

use crate::error::DepthLimit;
use crate::geometry::{TreeGeometry, place};
use crate::reveal::Reveal;
use crate::{Insertion, MAX_DEPTH, NodeId};

#[derive(Clone, Debug)]
struct BstNode {
    value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    marks: Marks,
}

/// Unbalanced binary search tree of `i32` values with a maximum depth.
///
/// Nodes are kept in insertion order and edges in creation order; both orders
/// drive the [`Reveal`] animation, independent of tree shape.
#[derive(Clone, Debug)]
pub struct BinarySearchTree {
    nodes: Vec<BstNode>,
    root: Option<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    max_depth: usize,
    reveal: Reveal,
    geometry: TreeGeometry,
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinarySearchTree {
    /// Creates an empty tree capped at [`MAX_DEPTH`].
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    /// Creates an empty tree whose nodes may sit at depths `0..=max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            edges: Vec::new(),
            max_depth,
            reveal: Reveal::new(),
            geometry: TreeGeometry::default(),
        }
    }

    /// Returns the layout geometry.
    pub fn geometry(&self) -> &TreeGeometry {
        &self.geometry
    }

    /// Replaces the layout geometry.
    pub fn set_geometry(&mut self, geometry: TreeGeometry) {
        self.geometry = geometry;
    }

    /// Deepest level a node may occupy.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Inserts `value` by standard descent.
    ///
    /// An edge from the parent is recorded only when a new node is created.
    /// Descending past `max_depth` is refused with [`DepthLimit`].
    pub fn insert(&mut self, value: i32) -> Result<Insertion, DepthLimit> {
        let Some(mut current) = self.root else {
            let id = self.alloc(value);
            self.root = Some(id);
            return Ok(Insertion::Inserted(id));
        };
        let mut depth = 0;
        loop {
            let node = &self.nodes[current.idx()];
            let child = match value.cmp(&node.value) {
                Ordering::Equal => return Ok(Insertion::Duplicate(current)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            if depth >= self.max_depth {
                tracing::warn!(value, max_depth = self.max_depth, "max BST depth reached");
                return Err(DepthLimit {
                    value,
                    max_depth: self.max_depth,
                });
            }
            if let Some(child) = child {
                current = child;
                depth += 1;
                continue;
            }
            let id = self.alloc(value);
            let parent = &mut self.nodes[current.idx()];
            if value < parent.value {
                parent.left = Some(id);
            } else {
                parent.right = Some(id);
            }
            self.edges.push((current, id));
            return Ok(Insertion::Inserted(id));
        }
    }

    /// Inserts each value in turn and returns how many new nodes were created.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = i32>) -> usize {
        values
            .into_iter()
            .filter(|&v| matches!(self.insert(v), Ok(Insertion::Inserted(_))))
            .count()
    }

    /// Binary search from the root. Marks the matching node as found.
    ///
    /// Marks from a previous search are cleared first.
    pub fn search(&mut self, value: i32) -> Option<NodeId> {
        for node in &mut self.nodes {
            node.marks.remove(Marks::FOUND);
        }
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &mut self.nodes[id.idx()];
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => {
                    node.marks.insert(Marks::FOUND);
                    return Some(id);
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        tracing::debug!(value, "value not in the BST");
        None
    }

    /// Drops every node and edge and stops the reveal at step zero.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.root = None;
        self.reveal.reset();
        tracing::debug!("BST reset");
    }

    /// The root node, if any.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value held by `id`.
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.nodes.get(id.idx()).map(|n| n.value)
    }

    /// Left child of `id`.
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|n| n.left)
    }

    /// Right child of `id`.
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|n| n.right)
    }

    /// Marks of `id`.
    pub fn marks(&self, id: NodeId) -> Option<Marks> {
        self.nodes.get(id.idx()).map(|n| n.marks)
    }

    /// Recorded `(parent, child)` edges in creation order.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, i32)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_index(i), n.value))
    }

    /// Values in ascending (in-order) order.
    pub fn in_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        while cursor.is_some() || !stack.is_empty() {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.nodes[id.idx()].left;
            }
            if let Some(id) = stack.pop() {
                out.push(self.nodes[id.idx()].value);
                cursor = self.nodes[id.idx()].right;
            }
        }
        out
    }

    /// Number of levels (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[id.idx()];
            stack.extend(node.left.map(|c| (c, level + 1)));
            stack.extend(node.right.map(|c| (c, level + 1)));
        }
        height
    }

    // --- reveal ---

    /// The reveal state.
    pub const fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    /// Current reveal step.
    pub const fn reveal_step(&self) -> usize {
        self.reveal.step()
    }

    /// Steps needed to show everything: one per node plus one per edge.
    pub fn reveal_total(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    /// Starts (or resumes) the reveal animation.
    pub fn start_reveal(&mut self) {
        self.reveal.start();
    }

    /// Pauses the reveal animation.
    pub fn stop_reveal(&mut self) {
        self.reveal.stop();
    }

    /// Advances the reveal by one step. Returns false once nothing more can be shown.
    pub fn tick(&mut self) -> bool {
        let total = self.reveal_total();
        self.reveal.tick(total)
    }

    /// Jumps the reveal to `step`, clamped to [`Self::reveal_total`].
    pub fn scrub_reveal(&mut self, step: usize) {
        let total = self.reveal_total();
        self.reveal.scrub(step, total);
    }

    /// Shows everything at once.
    pub fn reveal_all(&mut self) {
        self.scrub_reveal(usize::MAX);
    }

    // --- layout ---

    /// Positions the revealed part of the tree.
    ///
    /// Every node is placed, but only the first `reveal_step` nodes (insertion
    /// order) and the first `reveal_step` edges (creation order) are emitted.
    pub fn layout(&self) -> Layout<i32> {
        let mut centers = Vec::from_iter(core::iter::repeat_n(Point::ZERO, self.nodes.len()));
        place(
            &self.geometry,
            self.root,
            |id| {
                let n = &self.nodes[id.idx()];
                (n.left, n.right)
            },
            |id, center| centers[id.idx()] = center,
        );

        let radius = self.geometry.radius;
        let mut layout = Layout::new();
        layout.edges.extend(
            self.edges
                .iter()
                .take(self.reveal.visible(self.edges.len()))
                .map(|&(parent, child)| {
                    link_line(centers[parent.idx()], centers[child.idx()], radius)
                }),
        );
        layout.nodes.extend(
            self.nodes
                .iter()
                .zip(&centers)
                .take(self.reveal.visible(self.nodes.len()))
                .map(|(n, &center)| {
                    NodeLayout::new(n.value, Circle::new(center, radius)).with_marks(n.marks)
                }),
        );
        layout
    }

    fn alloc(&mut self, value: i32) -> NodeId {
        self.nodes.push(BstNode {
            value,
            left: None,
            right: None,
            marks: Marks::empty(),
        });
        NodeId::from_index(self.nodes.len() - 1)
    }
}
