//! Selection bookkeeping over original indices.
//!
//! The tracker never sees displayed positions; the adapter translates through
//! the item store before calling in. Two entry points with different contracts
//! coexist: [`SelectionTracker::select_single`] replaces the selection and
//! ignores repeats, [`SelectionTracker::toggle`] flips one index and leaves
//! the others alone.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<usize>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `index` the only selected index.
    ///
    /// Returns `None` if it was already selected (nothing changes). Otherwise
    /// returns the indices that were deselected.
    pub fn select_single(&mut self, index: usize) -> Option<Vec<usize>> {
        if self.selected.contains(&index) {
            return None;
        }
        let previous: Vec<usize> = std::mem::take(&mut self.selected).into_iter().collect();
        self.selected.insert(index);
        Some(previous)
    }

    /// Flips the selection state of `index`, returning the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.selected.remove(&index) {
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected original indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_single_replaces_previous() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.select_single(2), Some(vec![]));
        assert_eq!(tracker.select_single(5), Some(vec![2]));
        assert_eq!(tracker.iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn select_single_repeat_is_noop() {
        let mut tracker = SelectionTracker::new();
        tracker.select_single(3);
        assert_eq!(tracker.select_single(3), None);
        assert!(tracker.contains(3));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn toggle_allows_multiple() {
        let mut tracker = SelectionTracker::new();
        assert!(tracker.toggle(1));
        assert!(tracker.toggle(4));
        assert_eq!(tracker.len(), 2);
        assert!(!tracker.toggle(1));
        assert_eq!(tracker.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn select_single_clears_multi_selection() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle(1);
        tracker.toggle(2);
        assert_eq!(tracker.select_single(7), Some(vec![1, 2]));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle(0);
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
