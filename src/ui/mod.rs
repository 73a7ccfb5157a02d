//! Row rendering contract and terminal rendering.
//!
//! The adapter computes view models; a renderer paints them.
//!
//! ```text
//! Config → RowLayout → RowTemplate ─┐
//! ListAdapter::bind_row → RowBinding ┴→ RowRenderer → output
//! ```
//!
//! # Modules
//!
//! - [`layout`]: Tagged row layout variants and layout codes
//! - [`viewmodel`]: Row templates, bindings and refresh notifications
//! - [`theme`]: ARGB colors and ANSI escape sequences
//! - [`image`]: Image loading with placeholder fallback
//! - [`renderer`]: The renderer trait and a terminal renderer

pub mod image;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{LayoutKind, LayoutSpec, RowLayout};
pub use renderer::{render, AnsiRenderer, RowRenderer};
pub use theme::{Color, Theme};
pub use viewmodel::{ImageSlot, Refresh, RowBinding, RowContent, RowTemplate, TextStyle};
