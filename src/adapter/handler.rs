//! Event handling for the list adapter.
//!
//! Hosts that drive the adapter from an input loop translate their input into
//! [`Event`]s and let [`handle_event`] apply them. The returned actions tell
//! the host which rows to rebind and which clicks to forward.
//!
//! # Example
//!
//! ```rust
//! use listadapter::adapter::{handle_event, Action, Event, ListAdapter};
//! use listadapter::domain::Item;
//! use listadapter::ui::Refresh;
//!
//! let mut adapter = ListAdapter::default();
//! handle_event(&mut adapter, &Event::ReplaceItems(vec![Item::text("a"), Item::text("b")]));
//! let actions = handle_event(&mut adapter, &Event::ToggleSelection(1));
//! assert_eq!(actions, vec![Action::Refresh(Refresh::Rows(vec![1]))]);
//! ```

use super::{Action, ListAdapter};
use crate::domain::Item;

/// Caller requests, addressed by displayed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces every item and clears the selection.
    ReplaceItems(Vec<Item>),
    /// Sets the filter query; empty shows everything.
    Filter(String),
    /// Single-select the row, ignoring repeats.
    ToggleSelection(usize),
    /// Flip the row's selection without touching others.
    ChangeSelection(usize),
    ClearSelections,
    /// The row was tapped.
    Click(usize),
}

/// Applies `event` to `adapter` and returns the resulting actions.
pub fn handle_event(adapter: &mut ListAdapter, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let refresh = match event {
        Event::ReplaceItems(items) => adapter.replace_items(items.clone()),
        Event::Filter(query) => adapter.apply_filter(query),
        Event::ToggleSelection(position) => adapter.toggle_selection(*position),
        Event::ChangeSelection(position) => adapter.change_selection(*position),
        Event::ClearSelections => adapter.clear_selections(),
        Event::Click(position) => {
            return adapter
                .click(*position)
                .map(Action::ItemClicked)
                .into_iter()
                .collect();
        }
    };

    if refresh.is_nothing() {
        tracing::debug!("nothing to refresh");
        vec![]
    } else {
        vec![Action::Refresh(refresh)]
    }
}
