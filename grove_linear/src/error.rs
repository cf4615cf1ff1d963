// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Returned when pushing onto a stack or queue that already holds `capacity` elements.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("capacity of {capacity} elements reached")]
pub struct Full {
    /// The capacity that was reached.
    pub capacity: usize,
}
