// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step counter gating how much of an already built structure is shown.

/// Reveal animation state.
///
/// `step` only grows while animating, one unit per [`Reveal::tick`], and stops
/// at the total the caller passes in. The caller owns the real-time delay
/// between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    step: usize,
    animating: bool,
}

impl Reveal {
    /// A stopped reveal at step zero.
    pub const fn new() -> Self {
        Self {
            step: 0,
            animating: false,
        }
    }

    /// Current step.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns true if ticks advance the step.
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Starts (or resumes) advancing. The step is kept.
    pub fn start(&mut self) {
        self.animating = true;
    }

    /// Stops advancing. The step is kept.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    /// Advances one step if animating and below `total`. Returns true if the step moved.
    pub fn tick(&mut self, total: usize) -> bool {
        if self.animating && self.step < total {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `step`, clamped to `total`.
    pub fn scrub(&mut self, step: usize, total: usize) {
        self.step = step.min(total);
    }

    /// Returns true once the step has reached `total`.
    pub const fn is_complete(&self, total: usize) -> bool {
        self.step >= total
    }

    /// How many of `count` items are visible at the current step.
    pub fn visible(&self, count: usize) -> usize {
        self.step.min(count)
    }

    /// Back to a stopped reveal at step zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::Reveal;

    #[test]
    fn ticks_only_while_animating() {
        let mut reveal = Reveal::new();
        assert!(!reveal.tick(3), "stopped reveal does not advance");
        reveal.start();
        assert!(reveal.tick(3));
        reveal.stop();
        assert!(!reveal.tick(3));
        assert_eq!(reveal.step(), 1);
    }

    #[test]
    fn stops_at_total() {
        let mut reveal = Reveal::new();
        reveal.start();
        for _ in 0..3 {
            assert!(reveal.tick(3));
        }
        assert!(!reveal.tick(3));
        assert!(reveal.is_complete(3));
        assert!(reveal.is_animating(), "completion does not clear the flag");
        // Growing the total lets the reveal continue.
        assert!(reveal.tick(4));
    }

    #[test]
    fn scrub_and_visible_clamp() {
        let mut reveal = Reveal::new();
        reveal.scrub(10, 4);
        assert_eq!(reveal.step(), 4);
        assert_eq!(reveal.visible(2), 2);
        assert_eq!(reveal.visible(9), 4);
        reveal.reset();
        assert_eq!(reveal, Reveal::new());
    }
}
