// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian placement shared by both binary trees.

use alloc::vec::Vec;
use kurbo::Point;

use crate::NodeId;

/// Placement of binary tree nodes.
///
/// The root sits at `anchor`. Each child is offset horizontally by the
/// parent's spread (`horizontal_spacing` at the root, halving per level) and
/// vertically by `vertical_spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeGeometry {
    /// Center of the root node.
    pub anchor: Point,
    /// Horizontal offset from the root to its children.
    pub horizontal_spacing: f64,
    /// Vertical distance between levels.
    pub vertical_spacing: f64,
    /// Node radius.
    pub radius: f64,
}

impl Default for TreeGeometry {
    fn default() -> Self {
        Self {
            anchor: Point::new(400.0, 170.0),
            horizontal_spacing: 100.0,
            vertical_spacing: 120.0,
            radius: 20.0,
        }
    }
}

/// Visits every node reachable from `root` with its center.
///
/// `children` returns the `(left, right)` children of a node. Traversal is
/// preorder over an explicit stack.
pub(crate) fn place(
    geometry: &TreeGeometry,
    root: Option<NodeId>,
    children: impl Fn(NodeId) -> (Option<NodeId>, Option<NodeId>),
    mut visit: impl FnMut(NodeId, Point),
) {
    let Some(root) = root else {
        return;
    };
    let mut stack: Vec<(NodeId, Point, f64)> =
        Vec::from([(root, geometry.anchor, geometry.horizontal_spacing)]);
    while let Some((id, center, spread)) = stack.pop() {
        visit(id, center);
        let (left, right) = children(id);
        let y = center.y + geometry.vertical_spacing;
        if let Some(right) = right {
            stack.push((right, Point::new(center.x + spread, y), spread / 2.0));
        }
        if let Some(left) = left {
            stack.push((left, Point::new(center.x - spread, y), spread / 2.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn spread_halves_per_level() {
        // 0 -> (1, 2), 1 -> (3, _)
        let children = |id: NodeId| match id.0 {
            0 => (Some(NodeId(1)), Some(NodeId(2))),
            1 => (Some(NodeId(3)), None),
            _ => (None, None),
        };
        let mut seen = vec![];
        place(&TreeGeometry::default(), Some(NodeId(0)), children, |id, p| {
            seen.push((id.0, p));
        });
        assert_eq!(
            seen,
            vec![
                (0, Point::new(400.0, 170.0)),
                (1, Point::new(300.0, 290.0)),
                (3, Point::new(250.0, 410.0)),
                (2, Point::new(500.0, 290.0)),
            ]
        );
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let mut calls = 0;
        place(&TreeGeometry::default(), None, |_| (None, None), |_, _| calls += 1);
        assert_eq!(calls, 0);
    }
}
