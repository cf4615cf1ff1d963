// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Graph: an append-only directed graph with circular layout.
//!
//! [`Graph`] holds integer-valued nodes and directed edges between them. Values
//! are not required to be unique; wherever a value has to be resolved to a node
//! (adding an edge, searching) the first node holding it wins.
//!
//! Nodes are laid out evenly around a circle, in insertion order, starting at
//! angle zero (to the right of [`GraphGeometry::center`]) and turning by
//! `2π / n`. The layout is recomputed from scratch on every call.
//!
//! ```rust
//! use grove_graph::{Graph, UnknownNode};
//!
//! let mut graph = Graph::new();
//! graph.add_nodes([1, 2, 3]);
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//! assert_eq!(graph.add_edge(1, 4), Err(UnknownNode { value: 4 }));
//! assert_eq!(graph.edge_count(), 2);
//!
//! let layout = graph.layout();
//! assert_eq!(layout.nodes.len(), 3);
//! assert_eq!(layout.edges.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod graph;

pub use error::UnknownNode;
pub use graph::{Graph, GraphGeometry, GraphNodeId};
