//! Logging setup.
//!
//! Events from `tracing` macros across the crate are formatted by
//! `tracing-subscriber` and written to a size-rotated log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → listadapter.log (+ .1 .. .3)
//! ```
//!
//! # Configuration
//!
//! Level resolution:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, log_file_path};
