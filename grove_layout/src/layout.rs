// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned nodes and edges handed to a renderer.

use alloc::vec::Vec;
use kurbo::{Circle, Line, Point, Rect, Shape, Vec2};

use crate::marks::Marks;

/// A single positioned node: its label, its disc, and its display marks.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeLayout<L> {
    /// Engine-specific label (a value, a character, a value plus balance factor).
    pub label: L,
    /// Disc occupied by the node.
    pub circle: Circle,
    /// Search marks at the time the layout was computed.
    pub marks: Marks,
}

impl<L> NodeLayout<L> {
    /// Creates an unmarked node layout.
    pub fn new(label: L, circle: Circle) -> Self {
        Self {
            label,
            circle,
            marks: Marks::empty(),
        }
    }

    /// Returns `self` with `marks` attached.
    #[must_use]
    pub fn with_marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    /// Center of the node's disc.
    pub fn center(&self) -> Point {
        self.circle.center
    }
}

/// Nodes and edges of one engine, in the order the engine reports them.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout<L> {
    /// Positioned nodes.
    pub nodes: Vec<NodeLayout<L>>,
    /// Edge segments between node discs.
    pub edges: Vec<Line>,
}

impl<L> Default for Layout<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Layout<L> {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Shifts every node and edge by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for node in &mut self.nodes {
            node.circle.center += delta;
        }
        for edge in &mut self.edges {
            *edge = Line::new(edge.p0 + delta, edge.p1 + delta);
        }
    }

    /// Returns the union of all node discs and edge segments, if any.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut it = self
            .nodes
            .iter()
            .map(|n| n.circle.bounding_box())
            .chain(self.edges.iter().map(Shape::bounding_box));
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Returns the first node carrying [`Marks::FOUND`].
    pub fn found(&self) -> Option<&NodeLayout<L>> {
        self.nodes.iter().find(|n| n.marks.is_found())
    }
}

/// Segment from the bottom of a parent disc to the top of a child disc.
///
/// Both points are disc centers; `radius` is shared by the two discs.
pub fn link_line(parent: Point, child: Point, radius: f64) -> Line {
    Line::new(
        Point::new(parent.x, parent.y + radius),
        Point::new(child.x, child.y - radius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_line_joins_bottom_to_top() {
        let line = link_line(Point::new(400.0, 170.0), Point::new(300.0, 290.0), 20.0);
        assert_eq!(line.p0, Point::new(400.0, 190.0));
        assert_eq!(line.p1, Point::new(300.0, 270.0));
    }

    #[test]
    fn bounding_box_covers_nodes_and_edges() {
        let mut layout: Layout<u8> = Layout::new();
        assert!(layout.bounding_box().is_none(), "empty layout has no bounds");

        layout
            .nodes
            .push(NodeLayout::new(1, Circle::new((10.0, 10.0), 5.0)));
        layout
            .edges
            .push(Line::new((10.0, 15.0), (100.0, 200.0)));
        let bounds = layout.bounding_box().unwrap();
        assert_eq!(bounds, Rect::new(5.0, 5.0, 100.0, 200.0));
    }

    #[test]
    fn translate_moves_everything() {
        let mut layout = Layout::new();
        layout
            .nodes
            .push(NodeLayout::new('a', Circle::new((0.0, 100.0), 20.0)));
        layout.edges.push(Line::new((0.0, 120.0), (50.0, 180.0)));

        layout.translate(Vec2::new(0.0, -40.0));

        assert_eq!(layout.nodes[0].center(), Point::new(0.0, 60.0));
        assert_eq!(layout.edges[0].p0, Point::new(0.0, 80.0));
        assert_eq!(layout.edges[0].p1, Point::new(50.0, 140.0));
    }

    #[test]
    fn found_returns_first_marked_node() {
        let mut layout = Layout::new();
        layout
            .nodes
            .push(NodeLayout::new(1, Circle::new((0.0, 0.0), 1.0)).with_marks(Marks::HIGHLIGHTED));
        layout
            .nodes
            .push(NodeLayout::new(2, Circle::new((5.0, 0.0), 1.0)).with_marks(Marks::FOUND));
        assert_eq!(layout.found().map(|n| n.label), Some(2));
    }
}
