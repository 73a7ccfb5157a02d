//! Error types for the list adapter.
//!
//! Adapter operations themselves never fail: a row must always produce
//! something displayable. Errors only surface at the edges, while loading
//! configuration, parsing item files, reading images or writing logs.

use thiserror::Error;

/// The main error type for list adapter edge operations.
///
/// Most variants carry a description string; I/O and JSON failures wrap the
/// underlying error using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use listadapter::ListAdapterError;
///
/// fn validate() -> Result<(), ListAdapterError> {
///     Err(ListAdapterError::Config("image_width must be positive".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ListAdapterError {
    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Item data could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Layout code or name is not one of the known row layouts.
    #[error("Layout not recognized: {0}")]
    Layout(String),

    /// An image reference could not be resolved to a drawable.
    #[error("Unable to load image {reference}: {reason}")]
    Image {
        /// The reference that failed to load.
        reference: String,
        /// What went wrong.
        reason: String,
    },
}

/// A specialized `Result` type for list adapter operations.
pub type Result<T> = std::result::Result<T, ListAdapterError>;
