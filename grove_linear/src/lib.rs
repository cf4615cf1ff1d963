// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Linear: bounded stack and queue engines.
//!
//! - [`BoundedStack`]: LIFO store of integers with a fixed capacity
//!   ([`STACK_CAPACITY`] by default), laid out as a column of plates.
//! - [`BoundedQueue`]: FIFO store of integers with a fixed capacity
//!   ([`QUEUE_CAPACITY`] by default), doubly linked over a slot arena and laid
//!   out as a row of cells with "link to next" indicators.
//!
//! Pushing onto a full structure is not a fault: it returns [`Full`] and leaves
//! the structure unchanged. Searching marks the first match with
//! [`grove_layout::Marks::FOUND`] and never changes the structure.
//!
//! ```rust
//! use grove_linear::{BoundedQueue, BoundedStack, Full};
//!
//! let mut stack = BoundedStack::new();
//! for v in 1..=9 {
//!     stack.push(v).unwrap();
//! }
//! assert_eq!(stack.push(10), Err(Full { capacity: 9 }));
//! assert_eq!(stack.pop(), Some(9));
//!
//! let mut queue = BoundedQueue::new();
//! queue.enqueue(4).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.dequeue(), Some(4));
//! let cells = queue.layout();
//! assert_eq!(cells.len(), 1);
//! assert!(cells[0].link.is_none(), "the rear never links onward");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod queue;
mod stack;

pub use error::Full;
pub use queue::{BoundedQueue, CellId, CellLayout, QUEUE_CAPACITY, QueueGeometry};
pub use stack::{BoundedStack, PlateLayout, STACK_CAPACITY, StackGeometry};
