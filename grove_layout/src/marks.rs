// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display marks attached to engine nodes.

bitflags::bitflags! {
    /// Display-facing flags set by searches.
    ///
    /// Marks are not structural: no engine consults them when inserting or
    /// rebalancing, and every `reset` drops them along with the nodes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Marks: u8 {
        /// The node is the result of the most recent search.
        const FOUND       = 0b0000_0001;
        /// The node matched part of the most recent search on the way to a result.
        const HIGHLIGHTED = 0b0000_0010;
    }
}

impl Marks {
    /// Returns true if [`Marks::FOUND`] is set.
    pub fn is_found(self) -> bool {
        self.contains(Self::FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::Marks;

    #[test]
    fn default_is_unmarked() {
        assert!(Marks::default().is_empty(), "fresh nodes carry no marks");
        assert!(!Marks::HIGHLIGHTED.is_found());
        assert!((Marks::HIGHLIGHTED | Marks::FOUND).is_found());
    }
}
