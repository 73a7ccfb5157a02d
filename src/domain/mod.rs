//! Domain layer for the list adapter.
//!
//! Holds the item model and the error types, independent of any rendering
//! collaborator.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: List items (plain strings and records)
//!
//! # Examples
//!
//! ```
//! use listadapter::domain::{Item, Record};
//!
//! let items = vec![
//!     Item::text("Apple"),
//!     Item::Record(Record::new("Banana").with_description("yellow")),
//! ];
//! assert_eq!(items[1].main_text(), "Banana");
//! ```

pub mod error;
pub mod item;

pub use error::{ListAdapterError, Result};
pub use item::{Item, Record, KEY_DESCRIPTION, KEY_IMAGE, KEY_MAIN_TEXT};
