// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Layout: shared layout output for the Grove data-structure engines.
//!
//! Every Grove engine (stack, queue, binary search tree, AVL tree, trie, graph)
//! owns its structure and computes 2-D coordinates for it on request. This crate
//! holds the small vocabulary those engines share so that a host renderer can
//! consume all of them the same way:
//!
//! - [`Marks`]: display-facing per-node flags set by searches ([`Marks::FOUND`],
//!   [`Marks::HIGHLIGHTED`]). They never affect structure.
//! - [`NodeLayout`] / [`Layout`]: a positioned disc per live node plus one
//!   [`kurbo::Line`] per edge, ready to be stroked and filled by a renderer.
//! - [`link_line`]: the parent-bottom to child-top segment used by tree-shaped
//!   layouts.
//! - [`Scroll`] / [`ScrollBar`]: a clamped 1D scroll offset derived from content
//!   and viewport extents, and the geometry of a vertical scrollbar driving it.
//!
//! This crate does not draw, hit test, or dispatch events. Coordinates live in a
//! caller-chosen logical pixel space with `y` growing downward.
//!
//! ## Minimal example
//!
//! ```rust
//! use grove_layout::{Layout, Marks, NodeLayout, link_line};
//! use kurbo::{Circle, Point, Vec2};
//!
//! let parent = Point::new(400.0, 170.0);
//! let child = Point::new(300.0, 290.0);
//!
//! let mut layout = Layout::new();
//! layout.nodes.push(NodeLayout::new(5, Circle::new(parent, 20.0)));
//! layout.nodes.push(NodeLayout::new(3, Circle::new(child, 20.0)).with_marks(Marks::FOUND));
//! layout.edges.push(link_line(parent, child, 20.0));
//!
//! // Scrolled content is shifted before it reaches the renderer.
//! layout.translate(Vec2::new(0.0, -50.0));
//! assert_eq!(layout.nodes[0].center(), Point::new(400.0, 120.0));
//! assert_eq!(layout.found().map(|n| n.label), Some(3));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod marks;
mod scroll;

pub use layout::{Layout, NodeLayout, link_line};
pub use marks::Marks;
pub use scroll::{Scroll, ScrollBar};
