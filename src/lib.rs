//! listadapter: a filterable, selectable list adapter for recyclable rows.
//!
//! Given a list of items (plain strings or key-value records) the adapter
//! provides:
//! - Row bindings in one of five fixed layouts (single text, two texts,
//!   two texts linear, image + single text, image + two texts)
//! - Case-insensitive substring filtering over main text and description,
//!   with a displayed→original index map
//! - Single-selection (and a multi-select toggle) with a highlight color
//! - Click reporting by original index, whatever filter is active

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Demo host
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Adapter Layer (adapter/)                           │
//! │  - Item store, filter engine, selection tracker     │
//! │  - Event handling → actions                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Row layouts, templates, bindings                 │
//! │  - Colors, image fallback, terminal renderer        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! │  - Items and errors (domain/)                       │
//! │  - Paths (infrastructure/)                          │
//! │  - Rotating-file tracing (observability/)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`adapter`]: The [`ListAdapter`] and its components
//! - [`domain`]: Items and error types
//! - [`ui`]: Row rendering contract and terminal renderer
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Row styling is fixed at construction. It can be read from a TOML file:
//!
//! ```toml
//! layout = "two-text"          # or a host code 0-4
//! main_text_color = "#FFFFFF"
//! main_text_size = 22.0
//! detail_text_color = "#CCCCCC"
//! background_color = "#000000"
//! selection_color = "#FF4081"
//! filter_mode = "substring"     # or "fuzzy"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use listadapter::{initialize, Config};
//! use listadapter::domain::{Item, Record};
//!
//! let items = vec![
//!     Item::Record(Record::new("A").with_description("fruit")),
//!     Item::Record(Record::new("B")),
//! ];
//! let mut adapter = initialize(&Config::default(), items);
//! adapter.apply_filter("fruit");
//! assert_eq!(adapter.index_map(), Some(&[0][..]));
//! ```

pub mod adapter;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use adapter::{handle_event, Action, Event, FilterMode, ListAdapter};
pub use domain::{Item, ListAdapterError, Record, Result};
pub use ui::{Color, LayoutSpec, Refresh, RowBinding};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Adapter configuration.
///
/// Row styling fields are applied once at construction and stay fixed for the
/// adapter's lifetime. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row layout, as a host code (0-4) or a name such as `two-text`.
    pub layout: LayoutSpec,

    pub main_text_color: Color,
    pub main_text_size: f32,
    pub main_text_font: String,

    pub detail_text_color: Color,
    pub detail_text_size: f32,
    pub detail_text_font: String,

    /// Row background when not selected.
    pub background_color: Color,
    /// Row background when selected.
    pub selection_color: Color,

    pub image_width: u32,
    pub image_height: u32,
    pub corner_radius: f32,

    /// How filter queries match. Default: substring.
    pub filter_mode: FilterMode,

    /// Directory image references are resolved against.
    pub asset_dir: String,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `listadapter.log` in the data directory.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutSpec::default(),
            main_text_color: Color::WHITE,
            main_text_size: 22.0,
            main_text_font: "default".to_string(),
            detail_text_color: Color::LIGHT_GRAY,
            detail_text_size: 14.0,
            detail_text_font: "default".to_string(),
            background_color: Color::BLACK,
            selection_color: Color::LIGHT_GRAY,
            image_width: 200,
            image_height: 200,
            corner_radius: 0.0,
            filter_mode: FilterMode::default(),
            asset_dir: ".".to_string(),
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map, as host components pass
    /// their properties.
    ///
    /// Unknown keys are ignored; values that fail to parse keep their default
    /// and are logged at debug level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use listadapter::{Color, Config, LayoutSpec};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("layout".to_string(), "2".to_string());
    /// map.insert("selection_color".to_string(), "#FF4081".to_string());
    /// map.insert("image_width".to_string(), "oops".to_string());
    ///
    /// let config = Config::from_properties(&map);
    /// assert_eq!(config.layout, LayoutSpec::Code(2));
    /// assert_eq!(config.selection_color, Color(0xFFFF_4081));
    /// assert_eq!(config.image_width, 200);
    /// ```
    #[must_use]
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(layout) = properties.get("layout") {
            config.layout = LayoutSpec::from(layout.as_str());
        }
        parse_into(properties, "main_text_color", &mut config.main_text_color);
        parse_into(properties, "main_text_size", &mut config.main_text_size);
        parse_into(properties, "main_text_font", &mut config.main_text_font);
        parse_into(properties, "detail_text_color", &mut config.detail_text_color);
        parse_into(properties, "detail_text_size", &mut config.detail_text_size);
        parse_into(properties, "detail_text_font", &mut config.detail_text_font);
        parse_into(properties, "background_color", &mut config.background_color);
        parse_into(properties, "selection_color", &mut config.selection_color);
        parse_into(properties, "image_width", &mut config.image_width);
        parse_into(properties, "image_height", &mut config.image_height);
        parse_into(properties, "corner_radius", &mut config.corner_radius);
        parse_into(properties, "filter_mode", &mut config.filter_mode);
        parse_into(properties, "asset_dir", &mut config.asset_dir);

        config.trace_level = properties.get("trace_level").cloned();
        config.log_file = properties.get("log_file").cloned();
        config
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ListAdapterError::Config`] if the file cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ListAdapterError::Config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ListAdapterError::Config`] on invalid TOML or field values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ListAdapterError::Config(format!("Failed to parse config TOML: {e}")))
    }
}

/// Parses `properties[key]` into `slot`, leaving it untouched on failure.
fn parse_into<T>(properties: &BTreeMap<String, String>, key: &str, slot: &mut T)
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = properties.get(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(e) => tracing::debug!(key, value = %raw, error = %e, "invalid property, keeping default"),
    }
}

/// Creates an adapter over `items` with `config`.
///
/// Installs tracing when `config.trace_level` is set.
pub fn initialize(config: &Config, items: Vec<Item>) -> ListAdapter {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }
    tracing::debug!(item_count = items.len(), layout = %config.layout, "initializing list adapter");
    ListAdapter::new(items, config)
}
