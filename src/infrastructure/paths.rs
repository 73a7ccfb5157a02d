//! Path utilities for asset and log locations.

use std::path::PathBuf;

/// Name of the application directory under the platform data directory.
const APP_DIR: &str = "listadapter";

/// Returns the data directory used for log files.
///
/// Resolves to `listadapter` under the platform data directory
/// (`$XDG_DATA_HOME` or `~/.local/share` on Linux, `Application Support` on
/// macOS, `%APPDATA%` on Windows), and to a relative `.listadapter` directory
/// when the platform has none.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".listadapter"), |dir| dir.join(APP_DIR))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use listadapter::infrastructure::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };
    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else if path == "~" {
        home.display().to_string()
    } else {
        path.to_string()
    }
}
