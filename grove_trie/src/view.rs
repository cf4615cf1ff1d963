// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trie layout and scroll state.

use alloc::vec::Vec;
use grove_layout::{Layout, NodeLayout, Scroll, ScrollBar, link_line};
use kurbo::{Circle, Point, Rect, Vec2};

use crate::trie::{Trie, TrieId};

/// Placement and viewport of a trie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrieGeometry {
    /// Center of the root node.
    pub anchor: Point,
    /// Horizontal distance between consecutive siblings.
    pub sibling_spacing: f64,
    /// Vertical distance between levels.
    pub vertical_spacing: f64,
    /// Node radius.
    pub radius: f64,
    /// Height of the visible area.
    pub viewport_height: f64,
    /// Scroll distance per wheel line.
    pub wheel_step: f64,
}

impl Default for TrieGeometry {
    fn default() -> Self {
        Self {
            anchor: Point::new(100.0, 200.0),
            sibling_spacing: 50.0,
            vertical_spacing: 100.0,
            radius: 20.0,
            viewport_height: 600.0,
            wheel_step: 20.0,
        }
    }
}

/// Node label in a trie layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TrieLabel {
    /// Character on the node (`None` for the root).
    pub ch: Option<char>,
    /// Whether a word ends here.
    pub is_end: bool,
}

impl Trie {
    /// Returns the layout geometry.
    pub fn geometry(&self) -> &TrieGeometry {
        &self.geometry
    }

    /// Replaces the layout geometry, keeping the scroll offset where possible.
    pub fn set_geometry(&mut self, geometry: TrieGeometry) {
        let offset = self.scroll.offset();
        self.geometry = geometry;
        self.scroll = Scroll::new(geometry.viewport_height, geometry.wheel_step);
        self.refresh_scroll();
        self.scroll.set_offset(offset);
    }

    /// Unscrolled node centers, indexed like the node arena.
    ///
    /// The `k`-th child of a node sits one level down at the parent's `x` plus
    /// `k` sibling spacings.
    pub(crate) fn centers(&self) -> Vec<Point> {
        let g = &self.geometry;
        let mut centers = Vec::from_iter(core::iter::repeat_n(g.anchor, self.nodes.len()));
        let mut stack = Vec::from([TrieId::ROOT]);
        while let Some(id) = stack.pop() {
            let origin = centers[id.idx()];
            for (k, &(_, child)) in self.nodes[id.idx()].children.iter().enumerate() {
                centers[child.idx()] = Point::new(
                    origin.x + k as f64 * g.sibling_spacing,
                    origin.y + g.vertical_spacing,
                );
                stack.push(child);
            }
        }
        centers
    }

    /// Height of the laid out content: one level spacing past the deepest
    /// node, and never less than the root's `y`.
    pub fn content_height(&self) -> f64 {
        let g = &self.geometry;
        self.centers()
            .iter()
            .map(|c| c.y + g.vertical_spacing)
            .fold(g.anchor.y, f64::max)
    }

    pub(crate) fn refresh_scroll(&mut self) {
        let height = self.content_height();
        self.scroll.set_content_extent(height);
    }

    /// The scroll state.
    pub fn scroll(&self) -> &Scroll {
        &self.scroll
    }

    /// Sets the scroll offset, clamped to `[0, max_offset]`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll.set_offset(offset);
    }

    /// Scrolls by whole wheel lines; positive values scroll down.
    pub fn scroll_lines(&mut self, lines: i32) {
        self.scroll.scroll_lines(lines);
    }

    /// Returns the scrollbar geometry.
    pub fn scrollbar(&self) -> &ScrollBar {
        &self.scrollbar
    }

    /// Replaces the scrollbar geometry.
    pub fn set_scrollbar(&mut self, scrollbar: ScrollBar) {
        self.scrollbar = scrollbar;
    }

    /// Current scrollbar handle rectangle.
    pub fn scrollbar_handle(&self) -> Rect {
        self.scrollbar.handle_rect(&self.scroll)
    }

    /// Moves the scroll offset to match a handle dragged to `pointer_y`.
    pub fn drag_scrollbar(&mut self, pointer_y: f64) {
        self.scrollbar.drag(&mut self.scroll, pointer_y);
    }

    /// Positions every node and edge, shifted up by the scroll offset.
    ///
    /// Nodes and edges are listed in creation order.
    pub fn layout(&self) -> Layout<TrieLabel> {
        let centers = self.centers();
        let radius = self.geometry.radius;
        let mut layout = Layout::new();
        layout.edges.extend(
            self.edges
                .iter()
                .map(|&(p, c)| link_line(centers[p.idx()], centers[c.idx()], radius)),
        );
        layout
            .nodes
            .extend(self.nodes.iter().zip(&centers).map(|(n, &center)| {
                let label = TrieLabel {
                    ch: n.ch,
                    is_end: n.is_end,
                };
                NodeLayout::new(label, Circle::new(center, radius)).with_marks(n.marks)
            }));
        layout.translate(Vec2::new(0.0, -self.scroll.offset()));
        layout
    }
}
