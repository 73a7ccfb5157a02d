//! Platform utilities.
//!
//! - [`paths`]: Data directory lookup and tilde expansion

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
