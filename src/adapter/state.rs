//! The list adapter facade.
//!
//! [`ListAdapter`] owns the item store, the selection tracker, the fixed row
//! template and the click listener. Callers address rows by displayed
//! position; everything reported back out (click callbacks, selected indices)
//! uses original indices.
//!
//! # Example
//!
//! ```rust
//! use listadapter::adapter::ListAdapter;
//! use listadapter::domain::Item;
//! use listadapter::Config;
//!
//! let items = vec![Item::text("Apple"), Item::text("Banana pie")];
//! let mut adapter = ListAdapter::new(items, &Config::default());
//! adapter.apply_filter("an");
//! adapter.toggle_selection(0);
//! assert!(adapter.is_selected(0));
//! assert_eq!(adapter.selected_indices(), vec![1]);
//! ```

use super::selection::SelectionTracker;
use super::store::ItemStore;
use crate::domain::Item;
use crate::ui::layout::RowLayout;
use crate::ui::theme::Color;
use crate::ui::viewmodel::{Refresh, RowBinding, RowTemplate};
use crate::Config;
use std::fmt;

/// Callback receiving the original index of a clicked row.
pub type ClickListener = Box<dyn FnMut(usize)>;

pub struct ListAdapter {
    store: ItemStore,
    selection: SelectionTracker,
    template: RowTemplate,
    selection_color: Color,
    click_listener: Option<ClickListener>,
}

impl ListAdapter {
    /// Creates an adapter over `items` with the row configuration in `config`.
    ///
    /// An unrecognized layout is logged as an error; the adapter still works
    /// but its rows bind without content.
    #[must_use]
    pub fn new(items: Vec<Item>, config: &Config) -> Self {
        let layout = match RowLayout::from_config(config) {
            Ok(layout) => Some(layout),
            Err(e) => {
                tracing::error!(layout = %config.layout, error = %e, "row layout not recognized");
                None
            }
        };

        let mut store = ItemStore::new(config.filter_mode);
        store.replace_items(items);

        Self {
            store,
            selection: SelectionTracker::new(),
            template: RowTemplate {
                layout,
                background: config.background_color,
                corner_radius: config.corner_radius,
            },
            selection_color: config.selection_color,
            click_listener: None,
        }
    }

    /// Replaces all items and clears the selection.
    ///
    /// An active filter stays active: its query is applied to the new items
    /// rather than leaving the previous filtered rows on display.
    pub fn replace_items(&mut self, items: Vec<Item>) -> Refresh {
        self.store.replace_items(items);
        // Cleared even when nothing was selected.
        self.selection.clear();
        Refresh::All
    }

    /// Filters the displayed rows by `query`; an empty query shows all items.
    pub fn apply_filter(&mut self, query: &str) -> Refresh {
        self.store.apply_filter(query);
        Refresh::All
    }

    /// Number of displayed rows.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Selects the row at `position` as the only selection.
    ///
    /// Selecting an already selected row does nothing; it never deselects.
    pub fn toggle_selection(&mut self, position: usize) -> Refresh {
        let Some(index) = self.store.original_index(position) else {
            tracing::debug!(position, "toggle_selection out of range");
            return Refresh::Nothing;
        };

        let Some(previous) = self.selection.select_single(index) else {
            return Refresh::Nothing;
        };

        tracing::debug!(position, original_index = index, deselected = ?previous, "selection replaced");

        let stale = previous
            .into_iter()
            .filter_map(|old| self.store.displayed_position(old));
        Refresh::rows(stale.chain(std::iter::once(position)))
    }

    /// Flips the selection state of the row at `position`.
    ///
    /// Other selections are left in place, so several rows may end up
    /// selected.
    pub fn change_selection(&mut self, position: usize) -> Refresh {
        let Some(index) = self.store.original_index(position) else {
            tracing::debug!(position, "change_selection out of range");
            return Refresh::Nothing;
        };

        let selected = self.selection.toggle(index);
        tracing::debug!(position, original_index = index, selected, "selection changed");
        Refresh::rows([position])
    }

    pub fn clear_selections(&mut self) -> Refresh {
        self.selection.clear();
        Refresh::All
    }

    #[must_use]
    pub fn is_selected(&self, position: usize) -> bool {
        self.store
            .original_index(position)
            .is_some_and(|index| self.selection.contains(index))
    }

    /// Selected original indices in ascending order.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.iter().collect()
    }

    /// Computes the binding for the row at `position`.
    ///
    /// Returns `None` only if `position` is not displayed.
    #[must_use]
    pub fn bind_row(&self, position: usize) -> Option<RowBinding> {
        let item = self.store.displayed_item(position)?;
        let is_selected = self.is_selected(position);
        let background = if is_selected {
            self.selection_color
        } else {
            self.template.background
        };

        Some(RowBinding {
            content: self.template.layout.as_ref().map(|layout| layout.content_for(item)),
            background,
            is_selected,
        })
    }

    #[must_use]
    pub const fn row_template(&self) -> &RowTemplate {
        &self.template
    }

    /// Registers the click listener, replacing any previous one.
    pub fn set_on_item_click<F>(&mut self, listener: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.click_listener = Some(Box::new(listener));
    }

    /// Handles a tap on the row at `position`.
    ///
    /// The listener receives the original index, which is also returned.
    pub fn click(&mut self, position: usize) -> Option<usize> {
        let Some(index) = self.store.original_index(position) else {
            tracing::debug!(position, "click out of range");
            return None;
        };

        tracing::debug!(position, original_index = index, "row clicked");
        if let Some(listener) = self.click_listener.as_mut() {
            listener(index);
        }
        Some(index)
    }

    #[must_use]
    pub fn displayed(&self) -> &[Item] {
        self.store.displayed()
    }

    #[must_use]
    pub fn original(&self) -> &[Item] {
        self.store.original()
    }

    /// Displayed-to-original index map, `None` while no filter is active.
    #[must_use]
    pub fn index_map(&self) -> Option<&[usize]> {
        self.store.index_map()
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.store.is_filtered()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.store.query()
    }
}

impl Default for ListAdapter {
    fn default() -> Self {
        Self::new(Vec::new(), &Config::default())
    }
}

impl fmt::Debug for ListAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAdapter")
            .field("store", &self.store)
            .field("selection", &self.selection)
            .field("template", &self.template)
            .field("selection_color", &self.selection_color)
            .field("has_click_listener", &self.click_listener.is_some())
            .finish()
    }
}
