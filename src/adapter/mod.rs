//! Adapter layer: item storage, filtering, selection and event handling.
//!
//! ```text
//! Event → handle_event → ListAdapter ─┬─ ItemStore ── filter::apply
//!                                     ├─ SelectionTracker
//!                                     └─ RowTemplate → RowBinding
//! ```
//!
//! # Modules
//!
//! - [`state`]: The [`ListAdapter`] facade
//! - [`store`]: Original/displayed collections and the index map
//! - [`filter`]: Query matching and index map computation
//! - [`selection`]: Selected original indices
//! - [`handler`]: Event dispatch returning [`Action`]s
//! - [`actions`]: Host-facing effects

pub mod actions;
pub mod filter;
pub mod handler;
pub mod selection;
pub mod state;
pub mod store;

pub use actions::Action;
pub use filter::FilterMode;
pub use handler::{handle_event, Event};
pub use selection::SelectionTracker;
pub use state::{ClickListener, ListAdapter};
pub use store::ItemStore;
