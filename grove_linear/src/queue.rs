// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded FIFO queue over a doubly linked slot arena.

use alloc::vec::Vec;
use grove_layout::Marks;
use kurbo::{Circle, Point, Rect, Size, Vec2};

use crate::error::Full;

/// Default number of cells a [`BoundedQueue`] accepts.
pub const QUEUE_CAPACITY: usize = 7;

/// Identifier for a queue cell (generational).
///
/// An identifier goes stale once its cell is dequeued or the queue is reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellId(u32, u32);

impl CellId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Placement of queue cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueueGeometry {
    /// Center of the front cell.
    pub first_center: Point,
    /// Horizontal distance between consecutive cell centers.
    pub pitch: f64,
    /// Cell radius.
    pub radius: f64,
    /// Size of the "link to next" indicator.
    pub link_size: Size,
    /// Top-left of the link indicator relative to the cell center.
    pub link_offset: Vec2,
}

impl Default for QueueGeometry {
    fn default() -> Self {
        Self {
            first_center: Point::new(125.0, 325.0),
            pitch: 100.0,
            radius: 25.0,
            link_size: Size::new(30.0, 2.0),
            link_offset: Vec2::new(35.0, -5.0),
        }
    }
}

/// One positioned queue cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    /// The cell.
    pub id: CellId,
    /// Value shown in the cell.
    pub value: i32,
    /// Cell disc.
    pub circle: Circle,
    /// Link indicator toward the next cell; `None` for the rear.
    pub link: Option<Rect>,
    /// Search marks.
    pub marks: Marks,
}

#[derive(Clone, Debug)]
struct Cell {
    generation: u32,
    value: i32,
    prev: Option<CellId>,
    next: Option<CellId>,
    marks: Marks,
}

/// FIFO store of integers with a fixed capacity.
pub struct BoundedQueue {
    /// Cell storage; `None` marks a dequeued cell awaiting reuse.
    cells: Vec<Option<Cell>>,
    /// Generation last handed out for each cell index, kept across dequeues and resets.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    front: Option<CellId>,
    rear: Option<CellId>,
    len: usize,
    capacity: usize,
    geometry: QueueGeometry,
}

impl core::fmt::Debug for BoundedQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("slots_total", &self.cells.len())
            .field("free_list", &self.free_list.len())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish_non_exhaustive()
    }
}

impl Default for BoundedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedQueue {
    /// Creates an empty queue holding at most [`QUEUE_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }

    /// Creates an empty queue holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            front: None,
            rear: None,
            len: 0,
            capacity,
            geometry: QueueGeometry::default(),
        }
    }

    /// Returns the cell geometry.
    pub fn geometry(&self) -> &QueueGeometry {
        &self.geometry
    }

    /// Replaces the cell geometry.
    pub fn set_geometry(&mut self, geometry: QueueGeometry) {
        self.geometry = geometry;
    }

    /// Appends `value` at the rear and links the previous rear to it.
    ///
    /// A full queue is left untouched and reports [`Full`].
    pub fn enqueue(&mut self, value: i32) -> Result<CellId, Full> {
        if self.is_full() {
            tracing::warn!(value, capacity = self.capacity, "queue is full, enqueue rejected");
            return Err(Full {
                capacity: self.capacity,
            });
        }
        let id = self.alloc(value);
        if let Some(rear) = self.rear {
            self.cell_mut(rear).next = Some(id);
            self.cell_mut(id).prev = Some(rear);
        } else {
            self.front = Some(id);
        }
        self.rear = Some(id);
        self.len += 1;
        Ok(id)
    }

    /// Enqueues each value in turn and returns how many were accepted.
    pub fn enqueue_all(&mut self, values: impl IntoIterator<Item = i32>) -> usize {
        values
            .into_iter()
            .filter(|&v| self.enqueue(v).is_ok())
            .count()
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    ///
    /// Removing the last cell clears both ends.
    pub fn dequeue(&mut self) -> Option<i32> {
        let front = self.front?;
        let cell = self.cells[front.idx()].take()?;
        self.free_list.push(front.idx());
        self.len -= 1;
        self.front = cell.next;
        match cell.next {
            Some(next) => self.cell_mut(next).prev = None,
            None => self.rear = None,
        }
        Some(cell.value)
    }

    /// Marks the first cell (from the front) holding `value` as found.
    ///
    /// Marks from a previous search are cleared first.
    pub fn search(&mut self, value: i32) -> Option<CellId> {
        let mut hit = None;
        let mut cursor = self.front;
        while let Some(id) = cursor {
            let cell = self.cell_mut(id);
            cell.marks.remove(Marks::FOUND);
            if hit.is_none() && cell.value == value {
                cell.marks.insert(Marks::FOUND);
                hit = Some(id);
            }
            cursor = cell.next;
        }
        if hit.is_none() {
            tracing::debug!(value, "value not in the queue");
        }
        hit
    }

    /// Drops every cell at once. Identifiers handed out before the reset go stale.
    pub fn reset(&mut self) {
        for slot in &mut self.cells {
            *slot = None;
        }
        self.free_list.clear();
        self.free_list.extend((0..self.cells.len()).rev());
        self.front = None;
        self.rear = None;
        self.len = 0;
        tracing::debug!("queue reset");
    }

    /// Number of queued values.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if another enqueue would be rejected.
    pub const fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// Maximum number of values.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The front cell, if any.
    pub const fn front(&self) -> Option<CellId> {
        self.front
    }

    /// The rear cell, if any.
    pub const fn rear(&self) -> Option<CellId> {
        self.rear
    }

    /// Returns true if `id` refers to a queued cell.
    pub fn is_alive(&self, id: CellId) -> bool {
        self.cells
            .get(id.idx())
            .and_then(|c| c.as_ref())
            .map(|c| c.generation == id.1)
            .unwrap_or(false)
    }

    /// Value held by a live cell.
    pub fn value(&self, id: CellId) -> Option<i32> {
        self.cell(id).map(|c| c.value)
    }

    /// Marks of a live cell.
    pub fn marks(&self, id: CellId) -> Option<Marks> {
        self.cell(id).map(|c| c.marks)
    }

    /// Successor of a live cell, toward the rear.
    pub fn next_of(&self, id: CellId) -> Option<CellId> {
        self.cell(id).and_then(|c| c.next)
    }

    /// Predecessor of a live cell, toward the front.
    pub fn prev_of(&self, id: CellId) -> Option<CellId> {
        self.cell(id).and_then(|c| c.prev)
    }

    /// Values from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.cells_in_order().map(|(_, c)| c.value)
    }

    /// Cells from front to rear at fixed spacing; every cell but the rear
    /// carries a link indicator.
    pub fn layout(&self) -> Vec<CellLayout> {
        let g = &self.geometry;
        self.cells_in_order()
            .enumerate()
            .map(|(i, (id, cell))| {
                let center = g.first_center + Vec2::new(i as f64 * g.pitch, 0.0);
                CellLayout {
                    id,
                    value: cell.value,
                    circle: Circle::new(center, g.radius),
                    link: cell
                        .next
                        .map(|_| Rect::from_origin_size(center + g.link_offset, g.link_size)),
                    marks: cell.marks,
                }
            })
            .collect()
    }

    // --- internals ---

    fn cells_in_order(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        let mut cursor = self.front;
        core::iter::from_fn(move || {
            let id = cursor?;
            let cell = self.cell(id)?;
            cursor = cell.next;
            Some((id, cell))
        })
    }

    fn alloc(&mut self, value: i32) -> CellId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.cells.push(None);
            self.generations.push(1);
            (self.cells.len() - 1, 1)
        };
        self.cells[idx] = Some(Cell {
            generation,
            value,
            prev: None,
            next: None,
            marks: Marks::empty(),
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "queue capacities are far below u32::MAX"
        )]
        let idx = idx as u32;
        CellId::new(idx, generation)
    }

    fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells
            .get(id.idx())
            .and_then(|c| c.as_ref())
            .filter(|c| c.generation == id.1)
    }

    fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        match self.cells[id.idx()].as_mut() {
            Some(cell) => cell,
            None => unreachable!("linked cells are always live"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn eighth_enqueue_is_rejected() {
        let mut queue = BoundedQueue::new();
        assert_eq!(queue.enqueue_all(1..=7), 7);
        assert_eq!(queue.enqueue(8), Err(Full { capacity: 7 }));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn dequeues_in_fifo_order_and_clears_ends() {
        let mut queue = BoundedQueue::new();
        queue.enqueue_all([9, 8, 7]);
        assert_eq!(queue.dequeue(), Some(9));
        assert_eq!(queue.dequeue(), Some(8));
        assert_eq!(queue.front(), queue.rear(), "one cell left");
        assert_eq!(queue.dequeue(), Some(7));
        assert_eq!(queue.front(), None);
        assert_eq!(queue.rear(), None);
        assert_eq!(queue.dequeue(), None, "dequeue on empty is a no-op");
    }

    #[test]
    fn links_run_both_ways() {
        let mut queue = BoundedQueue::new();
        let a = queue.enqueue(1).unwrap();
        let b = queue.enqueue(2).unwrap();
        assert_eq!(queue.next_of(a), Some(b));
        assert_eq!(queue.prev_of(b), Some(a));
        queue.dequeue();
        assert!(!queue.is_alive(a));
        assert_eq!(queue.prev_of(b), None, "new front has no predecessor");
    }

    #[test]
    fn slots_are_reused_with_fresh_generations() {
        let mut queue = BoundedQueue::with_capacity(2);
        let a = queue.enqueue(1).unwrap();
        queue.dequeue();
        let b = queue.enqueue(2).unwrap();
        assert_ne!(a, b);
        assert!(!queue.is_alive(a));
        assert_eq!(queue.value(a), None);
        assert_eq!(queue.value(b), Some(2));
    }

    #[test]
    fn search_marks_first_from_front() {
        let mut queue = BoundedQueue::new();
        queue.enqueue_all([5, 6, 5]);
        let hit = queue.search(5).unwrap();
        assert_eq!(Some(hit), queue.front());
        assert_eq!(queue.marks(hit), Some(Marks::FOUND));
        assert_eq!(queue.rear().and_then(|r| queue.marks(r)), Some(Marks::empty()));
        assert_eq!(queue.search(11), None);
        assert_eq!(queue.marks(hit), Some(Marks::empty()), "previous match cleared");
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn layout_spaces_cells_and_links_all_but_rear() {
        let mut queue = BoundedQueue::new();
        queue.enqueue_all([1, 2, 3]);
        queue.dequeue();
        let cells = queue.layout();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].value, 2);
        assert_eq!(cells[0].circle.center, Point::new(125.0, 325.0));
        assert_eq!(cells[1].circle.center, Point::new(225.0, 325.0));
        assert_eq!(cells[0].link, Some(Rect::new(160.0, 320.0, 190.0, 322.0)));
        assert_eq!(cells[1].link, None);
    }

    #[test]
    fn reset_twice_is_empty_and_stales_ids() {
        let mut queue = BoundedQueue::new();
        let a = queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.reset();
        queue.reset();
        assert!(queue.is_empty());
        assert!(queue.layout().is_empty());
        assert!(!queue.is_alive(a));
        let b = queue.enqueue(3).unwrap();
        assert_ne!(a, b, "reused slot carries a new generation");
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![3]);
    }
}
