// src/constants.rs
//
// Application-wide constants.

/// Note service used when neither `--url`, `NOTEDESK_URL` nor the config file
/// names one.
pub const DEFAULT_BASE_URL: &str = "https://personal-notemanager-backend.onrender.com";

/// Collection endpoint, relative to the base URL.
///
/// Single notes live under `notes/<id>`.
pub const NOTES_PATH: &str = "notes";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "NOTEDESK_URL";

/// Config file name inside `<config_dir>/notedesk/`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum characters of a description shown in a list table cell.
///
/// Used in: `ports/table.rs`
pub const DESCRIPTION_CELL_WIDTH: usize = 40;

/// Maximum characters of a title shown in a list table cell.
///
/// Used in: `ports/table.rs`
pub const TITLE_CELL_WIDTH: usize = 32;

/// Delay in milliseconds after writing the HTML file before returning.
///
/// The browser is spawned detached; the temporary directory must outlive the
/// moment it reads the file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
