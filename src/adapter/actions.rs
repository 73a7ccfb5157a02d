//! Actions emitted by the event handler for the rendering host.
//!
//! Actions are the boundary between adapter state changes and the effects a
//! host performs: repainting rows and forwarding clicks.

use crate::ui::viewmodel::Refresh;

/// Effects requested by the adapter after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Rebind the listed rows (or all rows).
    Refresh(Refresh),

    /// A row was clicked; carries its original index.
    ItemClicked(usize),
}
