// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded LIFO stack drawn as a column of plates.

use alloc::vec::Vec;
use grove_layout::Marks;
use kurbo::{Point, Rect, Size};

use crate::error::Full;

/// Default number of plates a [`BoundedStack`] accepts.
pub const STACK_CAPACITY: usize = 9;

/// Placement of stack plates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackGeometry {
    /// Top-left corner of the bottom plate.
    pub base: Point,
    /// Size of each plate.
    pub plate: Size,
    /// Vertical distance between the tops of consecutive plates.
    pub pitch: f64,
}

impl Default for StackGeometry {
    fn default() -> Self {
        Self {
            base: Point::new(350.0, 500.0),
            plate: Size::new(100.0, 30.0),
            pitch: 40.0,
        }
    }
}

/// One positioned plate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateLayout {
    /// Value printed on the plate.
    pub value: i32,
    /// Plate rectangle.
    pub rect: Rect,
    /// Search marks.
    pub marks: Marks,
}

#[derive(Clone, Copy, Debug)]
struct Plate {
    value: i32,
    marks: Marks,
}

/// LIFO store of integers with a fixed capacity.
///
/// Index 0 is the bottom of the stack; the top is the highest index.
#[derive(Clone, Debug)]
pub struct BoundedStack {
    plates: Vec<Plate>,
    capacity: usize,
    geometry: StackGeometry,
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedStack {
    /// Creates an empty stack holding at most [`STACK_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_capacity(STACK_CAPACITY)
    }

    /// Creates an empty stack holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            plates: Vec::with_capacity(capacity.min(STACK_CAPACITY)),
            capacity,
            geometry: StackGeometry::default(),
        }
    }

    /// Returns the plate geometry.
    pub fn geometry(&self) -> &StackGeometry {
        &self.geometry
    }

    /// Replaces the plate geometry.
    pub fn set_geometry(&mut self, geometry: StackGeometry) {
        self.geometry = geometry;
    }

    /// Pushes `value` on top and returns its index.
    ///
    /// A full stack is left untouched and reports [`Full`].
    pub fn push(&mut self, value: i32) -> Result<usize, Full> {
        if self.is_full() {
            tracing::warn!(value, capacity = self.capacity, "stack is full, push rejected");
            return Err(Full {
                capacity: self.capacity,
            });
        }
        self.plates.push(Plate {
            value,
            marks: Marks::empty(),
        });
        Ok(self.plates.len() - 1)
    }

    /// Pushes each value in turn and returns how many were accepted.
    pub fn push_all(&mut self, values: impl IntoIterator<Item = i32>) -> usize {
        values
            .into_iter()
            .filter(|&v| self.push(v).is_ok())
            .count()
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<i32> {
        self.plates.pop().map(|p| p.value)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<i32> {
        self.plates.last().map(|p| p.value)
    }

    /// Marks the lowest plate holding `value` as found and returns its index.
    ///
    /// Marks from a previous search are cleared first.
    pub fn search(&mut self, value: i32) -> Option<usize> {
        for plate in &mut self.plates {
            plate.marks.remove(Marks::FOUND);
        }
        let Some(index) = self.plates.iter().position(|p| p.value == value) else {
            tracing::debug!(value, "value not on the stack");
            return None;
        };
        self.plates[index].marks.insert(Marks::FOUND);
        Some(index)
    }

    /// Removes every plate.
    pub fn reset(&mut self) {
        self.plates.clear();
        tracing::debug!("stack reset");
    }

    /// Number of plates.
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Returns true if there are no plates.
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Returns true if another push would be rejected.
    pub fn is_full(&self) -> bool {
        self.plates.len() >= self.capacity
    }

    /// Maximum number of plates.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.plates.iter().map(|p| p.value)
    }

    /// Marks of the plate at `index`.
    pub fn marks(&self, index: usize) -> Option<Marks> {
        self.plates.get(index).map(|p| p.marks)
    }

    /// Plates from bottom to top, each stacked `pitch` above the previous one.
    pub fn layout(&self) -> Vec<PlateLayout> {
        let g = &self.geometry;
        self.plates
            .iter()
            .enumerate()
            .map(|(i, plate)| {
                let origin = Point::new(g.base.x, g.base.y - i as f64 * g.pitch);
                PlateLayout {
                    value: plate.value,
                    rect: Rect::from_origin_size(origin, g.plate),
                    marks: plate.marks,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn tenth_push_is_rejected() {
        let mut stack = BoundedStack::new();
        for v in 0..9 {
            assert_eq!(stack.push(v), Ok(v as usize));
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(99), Err(Full { capacity: 9 }));
        assert_eq!(stack.len(), 9);
        assert_eq!(stack.peek(), Some(8), "rejected push leaves the top alone");
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut stack = BoundedStack::with_capacity(usize::MAX);
        assert_eq!(stack.capacity(), usize::MAX);
        assert_eq!(stack.push_all(0..20), 20);
        assert!(!stack.is_full());
    }

    #[test]
    fn pops_in_lifo_order() {
        let mut stack = BoundedStack::new();
        assert_eq!(stack.push_all([3, 1, 4, 1, 5]), 5);
        let mut popped = vec![];
        while let Some(v) = stack.pop() {
            popped.push(v);
        }
        assert_eq!(popped, vec![5, 1, 4, 1, 3]);
        assert_eq!(stack.pop(), None, "pop on empty is a no-op");
    }

    #[test]
    fn push_all_counts_accepted_values() {
        let mut stack = BoundedStack::with_capacity(3);
        assert_eq!(stack.push_all(1..=5), 3);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn search_marks_lowest_match_only() {
        let mut stack = BoundedStack::new();
        stack.push_all([7, 2, 7]);
        assert_eq!(stack.search(7), Some(0));
        assert_eq!(stack.marks(0), Some(Marks::FOUND));
        assert_eq!(stack.marks(2), Some(Marks::empty()));

        assert_eq!(stack.search(2), Some(1));
        assert_eq!(stack.marks(0), Some(Marks::empty()), "old marks are cleared");

        assert_eq!(stack.search(42), None);
        assert_eq!(stack.len(), 3, "search does not change structure");
    }

    #[test]
    fn plates_stack_upward() {
        let mut stack = BoundedStack::new();
        stack.push_all([10, 20]);
        let plates = stack.layout();
        assert_eq!(plates[0].rect, Rect::new(350.0, 500.0, 450.0, 530.0));
        assert_eq!(plates[1].rect, Rect::new(350.0, 460.0, 450.0, 490.0));
        assert_eq!(plates[1].value, 20);
    }

    #[test]
    fn reset_twice_is_empty() {
        let mut stack = BoundedStack::new();
        stack.push_all([1, 2, 3]);
        stack.reset();
        stack.reset();
        assert!(stack.is_empty());
        assert!(stack.layout().is_empty());
        assert_eq!(stack.push(4), Ok(0));
    }
}
