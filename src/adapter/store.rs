//! Item store holding the original and displayed collections.
//!
//! Both collections are only ever replaced wholesale. The index map is `None`
//! while no filter is active, meaning displayed positions equal original
//! positions.

use super::filter::{self, FilterMode, FilterOutcome};
use crate::domain::Item;

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    original: Vec<Item>,
    displayed: Vec<Item>,
    index_map: Option<Vec<usize>>,
    /// Lowercased query of the active filter, empty when none is active.
    query: String,
    mode: FilterMode,
}

impl ItemStore {
    #[must_use]
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replaces the original collection.
    ///
    /// Without an active filter the displayed collection becomes a copy of the
    /// new items. With one, the active query is run again over the new items
    /// so the index map never points into a discarded collection.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        tracing::debug!(
            item_count = items.len(),
            filter_active = self.is_filtered(),
            "replacing items"
        );
        self.original = items;
        if self.index_map.is_none() {
            self.displayed = self.original.clone();
        } else {
            let query = self.query.clone();
            self.apply_filter(&query);
        }
    }

    /// Recomputes the displayed collection and index map for `query`.
    pub fn apply_filter(&mut self, query: &str) {
        let FilterOutcome { displayed, index_map } = filter::apply(&self.original, query, self.mode);
        self.query = if index_map.is_some() {
            query.to_lowercase()
        } else {
            String::new()
        };
        self.displayed = displayed;
        self.index_map = index_map;
    }

    /// Number of displayed items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.displayed.len()
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.index_map.is_some()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn original(&self) -> &[Item] {
        &self.original
    }

    #[must_use]
    pub fn displayed(&self) -> &[Item] {
        &self.displayed
    }

    #[must_use]
    pub fn index_map(&self) -> Option<&[usize]> {
        self.index_map.as_deref()
    }

    #[must_use]
    pub fn displayed_item(&self, position: usize) -> Option<&Item> {
        self.displayed.get(position)
    }

    /// Maps a displayed position to its original index.
    ///
    /// Returns `None` when the position is outside the displayed collection.
    #[must_use]
    pub fn original_index(&self, position: usize) -> Option<usize> {
        match &self.index_map {
            Some(map) => map.get(position).copied(),
            None => (position < self.displayed.len()).then_some(position),
        }
    }

    /// Maps an original index to its displayed position, if it is shown.
    ///
    /// The index map is strictly increasing, so this is a binary search.
    #[must_use]
    pub fn displayed_position(&self, original: usize) -> Option<usize> {
        match &self.index_map {
            Some(map) => map.binary_search(&original).ok(),
            None => (original < self.displayed.len()).then_some(original),
        }
    }
}
