// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Returned when an insert would place a node below the tree's maximum depth.
///
/// The tree is left unchanged below the cap.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("inserting {value} would exceed the maximum depth of {max_depth}")]
pub struct DepthLimit {
    /// The rejected value.
    pub value: i32,
    /// Deepest level (root = 0) a node may occupy.
    pub max_depth: usize,
}
