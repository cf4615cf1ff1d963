// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-balancing AVL tree with the same depth cap as the plain BST.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Ordering;
use grove_layout::{Layout, Marks, NodeLayout, link_line};
use hashbrown::HashMap;
use kurbo::{Circle, Point};
use smallvec::SmallVec;

use crate::error::DepthLimit;
use crate::geometry::{TreeGeometry, place};
use crate::{Insertion, MAX_DEPTH, NodeId};

/// A single rotation performed while rebalancing.
///
/// The payload is the node that moved down, i.e. the subtree root before the rotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// The right child was lifted over the node.
    Left(NodeId),
    /// The left child was lifted over the node.
    Right(NodeId),
}

/// Successful outcome of an AVL insert, with the rotations it triggered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlInsertion {
    /// Where the value ended up.
    pub insertion: Insertion,
    /// Rotations in the order they were applied (at most two per insert).
    pub rotations: SmallVec<[Rotation; 2]>,
}

/// Node label in an AVL layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AvlLabel {
    /// Stored value.
    pub value: i32,
    /// Left height minus right height.
    pub balance: i32,
}

#[derive(Clone, Debug)]
struct AvlNode {
    value: i32,
    height: i32,
    balance: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    marks: Marks,
}

#[derive(Clone, Copy, Debug)]
enum Outcome {
    Pending,
    Inserted(NodeId),
    Duplicate(NodeId),
    Capped,
}

struct InsertCtx {
    value: i32,
    outcome: Outcome,
    rotations: SmallVec<[Rotation; 2]>,
}

/// AVL tree of `i32` values with a maximum insertion depth.
#[derive(Clone, Debug)]
pub struct AvlTree {
    nodes: Vec<AvlNode>,
    root: Option<NodeId>,
    max_depth: usize,
    geometry: TreeGeometry,
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AvlTree {
    /// Creates an empty tree capped at [`MAX_DEPTH`].
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    /// Creates an empty tree whose inserts may descend to depth `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            max_depth,
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

    /// Deepest level an insert may descend to.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Inserts `value` and rebalances on the way back up.
    ///
    /// The depth cap is checked while descending, before any rotation, so an
    /// insert below the cap is refused even if rebalancing would have lifted it.
    pub fn insert(&mut self, value: i32) -> Result<AvlInsertion, DepthLimit> {
        let mut ctx = InsertCtx {
            value,
            outcome: Outcome::Pending,
            rotations: SmallVec::new(),
        };
        let root = self.insert_at(self.root, 0, &mut ctx);
        self.root = Some(root);
        let insertion = match ctx.outcome {
            Outcome::Inserted(id) => Insertion::Inserted(id),
            Outcome::Duplicate(id) => Insertion::Duplicate(id),
            Outcome::Capped | Outcome::Pending => {
                return Err(DepthLimit {
                    value,
                    max_depth: self.max_depth,
                });
            }
        };
        for rotation in &ctx.rotations {
            tracing::debug!(?rotation, value, "AVL rotation");
        }
        Ok(AvlInsertion {
            insertion,
            rotations: ctx.rotations,
        })
    }

    /// Inserts each value in turn and returns how many new nodes were created.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = i32>) -> usize {
        values
            .into_iter()
            .filter(|&v| matches!(self.insert(v), Ok(done) if done.insertion.is_new()))
            .count()
    }

    fn insert_at(&mut self, node: Option<NodeId>, depth: usize, ctx: &mut InsertCtx) -> NodeId {
        let Some(id) = node else {
            let id = self.alloc(ctx.value);
            ctx.outcome = Outcome::Inserted(id);
            return id;
        };
        let value = ctx.value;
        let n = &self.nodes[id.idx()];
        let (current, left, right) = (n.value, n.left, n.right);
        if value == current {
            ctx.outcome = Outcome::Duplicate(id);
            return id;
        }
        if depth >= self.max_depth {
            tracing::warn!(value, max_depth = self.max_depth, "max AVL depth reached");
            ctx.outcome = Outcome::Capped;
            return id;
        }
        if value < current {
            let child = self.insert_at(left, depth + 1, ctx);
            self.nodes[id.idx()].left = Some(child);
        } else {
            let child = self.insert_at(right, depth + 1, ctx);
            self.nodes[id.idx()].right = Some(child);
        }
        if !matches!(ctx.outcome, Outcome::Inserted(_)) {
            return id;
        }

        self.update(id);
        let balance = self.nodes[id.idx()].balance;
        let left = self.nodes[id.idx()].left;
        let right = self.nodes[id.idx()].right;

        if balance > 1
            && let Some(left) = left
        {
            let pivot = self.nodes[left.idx()].value;
            if value < pivot {
                return self.rotate_right(id, ctx);
            }
            if value > pivot {
                let lifted = self.rotate_left(left, ctx);
                self.nodes[id.idx()].left = Some(lifted);
                return self.rotate_right(id, ctx);
            }
        }
        if balance < -1
            && let Some(right) = right
        {
            let pivot = self.nodes[right.idx()].value;
            if value > pivot {
                return self.rotate_left(id, ctx);
            }
            if value < pivot {
                let lifted = self.rotate_right(right, ctx);
                self.nodes[id.idx()].right = Some(lifted);
                return self.rotate_left(id, ctx);
            }
        }
        id
    }

    /// Lifts the left child of `y` over it and returns the new subtree root.
    fn rotate_right(&mut self, y: NodeId, ctx: &mut InsertCtx) -> NodeId {
        let Some(x) = self.nodes[y.idx()].left else {
            return y;
        };
        let t2 = self.nodes[x.idx()].right;
        self.nodes[x.idx()].right = Some(y);
        self.nodes[y.idx()].left = t2;
        self.update(y);
        self.update(x);
        ctx.rotations.push(Rotation::Right(y));
        x
    }

    /// Lifts the right child of `x` over it and returns the new subtree root.
    fn rotate_left(&mut self, x: NodeId, ctx: &mut InsertCtx) -> NodeId {
        let Some(y) = self.nodes[x.idx()].right else {
            return x;
        };
        let t2 = self.nodes[y.idx()].left;
        self.nodes[y.idx()].left = Some(x);
        self.nodes[x.idx()].right = t2;
        self.update(x);
        self.update(y);
        ctx.rotations.push(Rotation::Left(x));
        y
    }

    fn height_of_slot(&self, id: Option<NodeId>) -> i32 {
        id.map_or(0, |id| self.nodes[id.idx()].height)
    }

    /// Recomputes height and balance factor of `id` from its children.
    fn update(&mut self, id: NodeId) {
        let (left, right) = {
            let n = &self.nodes[id.idx()];
            (self.height_of_slot(n.left), self.height_of_slot(n.right))
        };
        let n = &mut self.nodes[id.idx()];
        n.height = 1 + left.max(right);
        n.balance = left - right;
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
        tracing::debug!(value, "value not in the AVL tree");
        None
    }

    /// Drops every node.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.root = None;
        tracing::debug!("AVL tree reset");
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

    /// Stored height of `id` (a leaf has height 1).
    pub fn height_of(&self, id: NodeId) -> Option<i32> {
        self.nodes.get(id.idx()).map(|n| n.height)
    }

    /// Stored balance factor of `id`.
    pub fn balance_of(&self, id: NodeId) -> Option<i32> {
        self.nodes.get(id.idx()).map(|n| n.balance)
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

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> i32 {
        self.height_of_slot(self.root)
    }

    /// Values in ascending order.
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

    /// `(parent, child)` pairs in breadth-first order, left before right.
    pub fn level_order_edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let n = &self.nodes[id.idx()];
            for child in [n.left, n.right].into_iter().flatten() {
                edges.push((id, child));
                queue.push_back(child);
            }
        }
        edges
    }

    /// Positions the tree.
    ///
    /// Centers are collected into a map keyed by node; edges are listed in
    /// level order and nodes in insertion order.
    pub fn layout(&self) -> Layout<AvlLabel> {
        let mut centers: HashMap<NodeId, Point> = HashMap::with_capacity(self.nodes.len());
        place(
            &self.geometry,
            self.root,
            |id| {
                let n = &self.nodes[id.idx()];
                (n.left, n.right)
            },
            |id, center| {
                centers.insert(id, center);
            },
        );

        let radius = self.geometry.radius;
        let mut layout = Layout::new();
        for (parent, child) in self.level_order_edges() {
            if let (Some(&p), Some(&c)) = (centers.get(&parent), centers.get(&child)) {
                layout.edges.push(link_line(p, c, radius));
            }
        }
        for (i, n) in self.nodes.iter().enumerate() {
            let Some(&center) = centers.get(&NodeId::from_index(i)) else {
                continue;
            };
            let label = AvlLabel {
                value: n.value,
                balance: n.balance,
            };
            layout
                .nodes
                .push(NodeLayout::new(label, Circle::new(center, radius)).with_marks(n.marks));
        }
        layout
    }

    fn alloc(&mut self, value: i32) -> NodeId {
        self.nodes.push(AvlNode {
            value,
            height: 1,
            balance: 0,
            left: None,
            right: None,
            marks: Marks::empty(),
        });
        NodeId::from_index(self.nodes.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Recomputes heights from structure and checks every balance factor.
    fn assert_balanced(tree: &AvlTree) {
        fn check(tree: &AvlTree, id: Option<NodeId>) -> i32 {
            let Some(id) = id else { return 0 };
            let l = check(tree, tree.left_of(id));
            let r = check(tree, tree.right_of(id));
            assert!((l - r).abs() <= 1, "node {:?} is out of balance", tree.value(id));
            assert_eq!(tree.balance_of(id), Some(l - r), "stale balance factor");
            assert_eq!(tree.height_of(id), Some(1 + l.max(r)), "stale height");
            1 + l.max(r)
        }
        check(tree, tree.root());
    }

    fn root_value(tree: &AvlTree) -> Option<i32> {
        tree.root().and_then(|r| tree.value(r))
    }

    #[test]
    fn right_right_case_rotates_left_once() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(10).unwrap().rotations.is_empty());
        assert!(tree.insert(20).unwrap().rotations.is_empty());
        let done = tree.insert(30).unwrap();
        assert_eq!(done.rotations.len(), 1);
        let Rotation::Left(pivot) = done.rotations[0] else {
            panic!("expected a left rotation, got {:?}", done.rotations);
        };
        assert_eq!(tree.value(pivot), Some(10));
        assert_eq!(root_value(&tree), Some(20));
        assert_balanced(&tree);
    }

    #[test]
    fn left_left_case_rotates_right_once() {
        let mut tree = AvlTree::new();
        tree.insert_all([30, 20]);
        let done = tree.insert(10).unwrap();
        assert!(matches!(done.rotations[..], [Rotation::Right(_)]));
        assert_eq!(root_value(&tree), Some(20));
        assert_balanced(&tree);
    }

    #[test]
    fn left_right_case_rotates_twice() {
        let mut tree = AvlTree::new();
        tree.insert_all([30, 10]);
        let done = tree.insert(20).unwrap();
        assert!(matches!(
            done.rotations[..],
            [Rotation::Left(_), Rotation::Right(_)]
        ));
        assert_eq!(root_value(&tree), Some(20));
        assert_eq!(tree.in_order(), vec![10, 20, 30]);
        assert_balanced(&tree);
    }

    #[test]
    fn right_left_case_rotates_twice() {
        let mut tree = AvlTree::new();
        tree.insert_all([10, 30]);
        let done = tree.insert(20).unwrap();
        assert!(matches!(
            done.rotations[..],
            [Rotation::Right(_), Rotation::Left(_)]
        ));
        assert_eq!(root_value(&tree), Some(20));
        assert_balanced(&tree);
    }

    #[test]
    fn stays_balanced_over_mixed_inserts() {
        let mut tree = AvlTree::new();
        let accepted = tree.insert_all([50, 20, 70, 10, 30, 60, 80, 25, 35, 5]);
        assert_eq!(accepted, 10);
        assert_balanced(&tree);
        let mut sorted = tree.in_order();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn duplicate_is_a_no_op() {
        let mut tree = AvlTree::new();
        tree.insert_all([2, 1, 3]);
        let done = tree.insert(1).unwrap();
        assert!(!done.insertion.is_new());
        assert!(done.rotations.is_empty());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn cap_is_checked_before_rotation() {
        let mut tree = AvlTree::new();
        // 1..=8 builds 4(2(1,3),6(5,7(_,8))): 8 sits at depth 3.
        assert_eq!(tree.insert_all(1..=8), 8);
        assert_eq!(root_value(&tree), Some(4));
        // 9 would land below 8 before any rotation could lift it, so it is refused
        // even though a rebalance at 7 would have made room.
        assert_eq!(
            tree.insert(9),
            Err(DepthLimit {
                value: 9,
                max_depth: 3
            })
        );
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.in_order(), (1..=8).collect::<Vec<_>>());
        assert_balanced(&tree);
    }

    #[test]
    fn search_marks_match() {
        let mut tree = AvlTree::new();
        tree.insert_all([10, 20, 30]);
        let hit = tree.search(30).unwrap();
        assert_eq!(tree.marks(hit), Some(Marks::FOUND));
        assert_eq!(tree.search(31), None);
        assert_eq!(tree.marks(hit), Some(Marks::empty()));
    }

    #[test]
    fn layout_uses_level_order_edges() {
        let mut tree = AvlTree::new();
        tree.insert_all([10, 20, 30, 40]);
        // 20(10, 30(_, 40))
        let values: Vec<_> = tree
            .level_order_edges()
            .into_iter()
            .map(|(p, c)| (tree.value(p).unwrap(), tree.value(c).unwrap()))
            .collect();
        assert_eq!(values, vec![(20, 10), (20, 30), (30, 40)]);

        let layout = tree.layout();
        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.edges.len(), 3);
        let at = |v: i32| {
            layout
                .nodes
                .iter()
                .find(|n| n.label.value == v)
                .unwrap()
        };
        assert_eq!(at(20).center(), Point::new(400.0, 170.0));
        assert_eq!(at(10).center(), Point::new(300.0, 290.0));
        assert_eq!(at(40).center(), Point::new(550.0, 410.0));
        assert_eq!(at(30).label.balance, -1);
        assert_eq!(layout.edges[2], link_line(at(30).center(), at(40).center(), 20.0));
    }

    #[test]
    fn reset_twice_is_empty() {
        let mut tree = AvlTree::new();
        tree.insert_all([3, 1, 2]);
        tree.reset();
        tree.reset();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.height(), 0);
        assert!(tree.layout().is_empty());
    }
}
