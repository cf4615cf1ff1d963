// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical scroll state and scrollbar geometry.

use kurbo::Rect;

/// Clamped scroll offset over a content extent seen through a viewport.
///
/// The offset always lies in `[0, max_offset()]`, where `max_offset` is the
/// amount by which the content overflows the viewport (or zero).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scroll {
    offset: f64,
    content_extent: f64,
    viewport_extent: f64,
    line_step: f64,
}

impl Scroll {
    /// Creates a scroll state for a viewport of `viewport_extent`, moving
    /// `line_step` units per wheel line.
    #[must_use]
    pub fn new(viewport_extent: f64, line_step: f64) -> Self {
        Self {
            offset: 0.0,
            content_extent: 0.0,
            viewport_extent: viewport_extent.max(0.0),
            line_step: line_step.max(0.0),
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Returns the content extent last reported through [`Scroll::set_content_extent`].
    #[must_use]
    pub const fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Returns the viewport extent.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Updates the content extent and re-clamps the offset.
    pub fn set_content_extent(&mut self, extent: f64) {
        debug_assert!(
            extent.is_finite(),
            "content extents must be finite; got {extent:?}"
        );
        self.content_extent = extent.max(0.0);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Updates the viewport extent and re-clamps the offset.
    pub fn set_viewport_extent(&mut self, extent: f64) {
        self.viewport_extent = extent.max(0.0);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Sets the offset, clamped to `[0, max_offset()]`.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Adjusts the offset by `delta`, clamped.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_offset(self.offset + delta);
    }

    /// Scrolls by whole wheel lines. Positive values scroll toward the end of the content.
    pub fn scroll_lines(&mut self, lines: i32) {
        self.scroll_by(f64::from(lines) * self.line_step);
    }

    /// Returns the offset as a fraction of `max_offset()`, or zero when nothing overflows.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let max = self.max_offset();
        if max > 0.0 { self.offset / max } else { 0.0 }
    }

    /// Returns to the top with no content.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.content_extent = 0.0;
    }
}

/// Geometry of a vertical scrollbar: a fixed track and a proportional handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBar {
    /// Track rectangle in viewport space.
    pub track: Rect,
    /// Smallest handle height.
    pub min_handle: f64,
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self {
            track: Rect::new(760.0, 200.0, 780.0, 600.0),
            min_handle: 50.0,
        }
    }
}

impl ScrollBar {
    /// Height of the handle for the given scroll state.
    ///
    /// The handle covers the visible fraction of the track, but never less than
    /// `min_handle` and never more than the whole track.
    #[must_use]
    pub fn handle_extent(&self, scroll: &Scroll) -> f64 {
        let track = self.track.height();
        let content = scroll.content_extent();
        let proportional = if content > 0.0 {
            track * (scroll.viewport_extent() / content)
        } else {
            track
        };
        proportional.max(self.min_handle).min(track)
    }

    /// Rectangle of the handle for the given scroll state.
    #[must_use]
    pub fn handle_rect(&self, scroll: &Scroll) -> Rect {
        let extent = self.handle_extent(scroll);
        let travel = (self.track.height() - extent).max(0.0);
        let y0 = self.track.y0 + travel * scroll.fraction();
        Rect::new(self.track.x0, y0, self.track.x1, y0 + extent)
    }

    /// Maps a dragged pointer `y` (viewport space) to the offset it selects.
    ///
    /// The pointer is measured from the top of the track and clamped to the
    /// handle's range of travel.
    #[must_use]
    pub fn offset_for_pointer(&self, scroll: &Scroll, pointer_y: f64) -> f64 {
        let travel = (self.track.height() - self.handle_extent(scroll)).max(0.0);
        if travel <= 0.0 {
            return 0.0;
        }
        let handle_y = (pointer_y - self.track.y0).clamp(0.0, travel);
        scroll.max_offset() * (handle_y / travel)
    }

    /// Drags the handle of `scroll` to `pointer_y`.
    pub fn drag(&self, scroll: &mut Scroll, pointer_y: f64) {
        let offset = self.offset_for_pointer(scroll, pointer_y);
        scroll.set_offset(offset);
    }
}
