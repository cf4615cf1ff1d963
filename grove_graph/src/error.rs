// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Returned when an edge endpoint names a value no node holds.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no node holds the value {value}")]
pub struct UnknownNode {
    /// The value that could not be resolved.
    pub value: i32,
}
