// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::TAU;
use grove_layout::{Layout, Marks, NodeLayout};
use kurbo::{Circle, Line, Point, Vec2};

use crate::error::UnknownNode;

/// Identifier for a graph node, in insertion order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GraphNodeId(u32);

impl GraphNodeId {
    fn from_index(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "graphs entered by hand stay far below u32::MAX nodes"
        )]
        let idx = idx as u32;
        Self(idx)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Ring the nodes are placed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphGeometry {
    /// Center of the ring.
    pub center: Point,
    /// Radius of the ring.
    pub ring_radius: f64,
    /// Node radius.
    pub radius: f64,
}

impl Default for GraphGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 300.0),
            ring_radius: 200.0,
            radius: 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct GraphNode {
    value: i32,
    marks: Marks,
}

/// Directed graph over integer-valued nodes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<(GraphNodeId, GraphNodeId)>,
    geometry: GraphGeometry,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout geometry.
    pub fn geometry(&self) -> &GraphGeometry {
        &self.geometry
    }

    /// Replaces the layout geometry.
    pub fn set_geometry(&mut self, geometry: GraphGeometry) {
        self.geometry = geometry;
    }

    /// Appends a node holding `value`. Duplicate values are allowed.
    pub fn add_node(&mut self, value: i32) -> GraphNodeId {
        let id = GraphNodeId::from_index(self.nodes.len());
        self.nodes.push(GraphNode {
            value,
            marks: Marks::empty(),
        });
        id
    }

    /// Appends a node per value and returns how many were added.
    pub fn add_nodes(&mut self, values: impl IntoIterator<Item = i32>) -> usize {
        let before = self.nodes.len();
        for value in values {
            self.add_node(value);
        }
        self.nodes.len() - before
    }

    /// Appends a directed edge between the first nodes holding `start` and `end`.
    ///
    /// If either value is missing the graph is unchanged and the first missing
    /// value is reported.
    pub fn add_edge(&mut self, start: i32, end: i32) -> Result<usize, UnknownNode> {
        let resolve = |value| self.find(value).ok_or(UnknownNode { value });
        let from = resolve(start);
        let to = resolve(end);
        match (from, to) {
            (Ok(from), Ok(to)) => {
                self.edges.push((from, to));
                Ok(self.edges.len() - 1)
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(start, end, missing = err.value, "edge endpoint not found");
                Err(err)
            }
        }
    }

    /// First node holding `value`.
    pub fn find(&self, value: i32) -> Option<GraphNodeId> {
        self.nodes
            .iter()
            .position(|n| n.value == value)
            .map(GraphNodeId::from_index)
    }

    /// Marks the first node holding `value` as found, clearing earlier marks.
    pub fn search(&mut self, value: i32) -> Option<GraphNodeId> {
        for node in &mut self.nodes {
            node.marks.remove(Marks::FOUND);
        }
        let hit = self.find(value);
        match hit {
            Some(id) => self.nodes[id.idx()].marks.insert(Marks::FOUND),
            None => tracing::debug!(value, "value not in graph"),
        }
        hit
    }

    /// Drops every node and edge.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        tracing::debug!("graph reset");
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as `(start, end)` in insertion order.
    pub fn edges(&self) -> &[(GraphNodeId, GraphNodeId)] {
        &self.edges
    }

    /// Value held by `id`.
    pub fn value(&self, id: GraphNodeId) -> Option<i32> {
        self.nodes.get(id.idx()).map(|n| n.value)
    }

    /// Marks of `id`.
    pub fn marks(&self, id: GraphNodeId) -> Option<Marks> {
        self.nodes.get(id.idx()).map(|n| n.marks)
    }

    /// Node ids and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (GraphNodeId, i32)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (GraphNodeId::from_index(i), n.value))
    }

    /// Targets of the edges leaving `id`, in edge order.
    pub fn neighbors(&self, id: GraphNodeId) -> impl Iterator<Item = GraphNodeId> + '_ {
        self.edges
            .iter()
            .filter(move |&&(from, _)| from == id)
            .map(|&(_, to)| to)
    }

    /// Places the nodes around the ring and joins edge endpoints center to center.
    pub fn layout(&self) -> Layout<i32> {
        let g = &self.geometry;
        let mut layout = Layout::new();
        if self.nodes.is_empty() {
            return layout;
        }
        let step = TAU / self.nodes.len() as f64;
        let centers: Vec<Point> = (0..self.nodes.len())
            .map(|i| g.center + Vec2::from_angle(step * i as f64) * g.ring_radius)
            .collect();
        layout
            .nodes
            .extend(self.nodes.iter().zip(&centers).map(|(n, &center)| {
                NodeLayout::new(n.value, Circle::new(center, g.radius)).with_marks(n.marks)
            }));
        layout.edges.extend(
            self.edges
                .iter()
                .map(|&(from, to)| Line::new(centers[from.idx()], centers[to.idx()])),
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn edges_to_missing_values_are_rejected() {
        let mut graph = Graph::new();
        graph.add_nodes([1, 2, 3]);
        assert_eq!(graph.add_edge(1, 2), Ok(0));
        assert_eq!(graph.add_edge(2, 3), Ok(1));
        assert_eq!(graph.add_edge(1, 4), Err(UnknownNode { value: 4 }));
        assert_eq!(graph.add_edge(7, 4), Err(UnknownNode { value: 7 }));
        assert_eq!(graph.edge_count(), 2, "failed edges leave the graph unchanged");
    }

    #[test]
    fn duplicate_values_resolve_to_first_node() {
        let mut graph = Graph::new();
        let first = graph.add_node(5);
        let second = graph.add_node(5);
        let other = graph.add_node(6);
        assert_ne!(first, second);
        graph.add_edge(5, 6).unwrap();
        assert_eq!(graph.edges(), &[(first, other)]);

        assert_eq!(graph.search(5), Some(first));
        assert_eq!(graph.marks(first), Some(Marks::FOUND));
        assert_eq!(graph.marks(second), Some(Marks::empty()));
    }

    #[test]
    fn search_moves_the_found_mark() {
        let mut graph = Graph::new();
        let a = graph.add_node(1);
        let b = graph.add_node(2);
        graph.search(1);
        graph.search(2);
        assert_eq!(graph.marks(a), Some(Marks::empty()));
        assert_eq!(graph.marks(b), Some(Marks::FOUND));
        assert_eq!(graph.search(9), None);
        assert_eq!(graph.marks(b), Some(Marks::empty()));
    }

    #[test]
    fn neighbors_follow_edge_direction() {
        let mut graph = Graph::new();
        graph.add_nodes([1, 2, 3]);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(3, 1).unwrap();
        let one = graph.find(1).unwrap();
        let two = graph.find(2).unwrap();
        let out: Vec<_> = graph.neighbors(one).filter_map(|id| graph.value(id)).collect();
        assert_eq!(out, vec![2, 3]);
        assert_eq!(graph.neighbors(two).count(), 0);
    }

    #[test]
    fn nodes_sit_evenly_on_the_ring() {
        let mut graph = Graph::new();
        graph.add_nodes([10, 20, 30, 40]);
        graph.add_edge(10, 30).unwrap();
        let layout = graph.layout();
        let centers: Vec<_> = layout.nodes.iter().map(NodeLayout::center).collect();
        assert!(near(centers[0], Point::new(600.0, 300.0)));
        assert!(near(centers[1], Point::new(400.0, 500.0)));
        assert!(near(centers[2], Point::new(200.0, 300.0)));
        assert!(near(centers[3], Point::new(400.0, 100.0)));
        assert_eq!(layout.edges, vec![Line::new(centers[0], centers[2])]);
    }

    #[test]
    fn layout_tracks_node_count() {
        let mut graph = Graph::new();
        assert!(graph.layout().is_empty());
        graph.add_node(1);
        assert!(near(graph.layout().nodes[0].center(), Point::new(600.0, 300.0)));
        graph.add_node(2);
        let layout = graph.layout();
        assert!(near(layout.nodes[1].center(), Point::new(200.0, 300.0)));
    }

    #[test]
    fn reset_twice_leaves_empty_graph() {
        let mut graph = Graph::new();
        graph.add_nodes([1, 2]);
        graph.add_edge(1, 2).unwrap();
        graph.reset();
        graph.reset();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.find(1), None);
    }
}
