//! Application configuration.
//!
//! Centralized configuration for the ClearX demo page.
//! In development, these are hardcoded. In production, they could be
//! injected at build time by trunk.

/// Enhancement endpoint base URL.
///
/// The page posts to `{ENHANCE_ENDPOINT}/enhance`.
pub const ENHANCE_ENDPOINT: &str = "http://localhost:8000";

/// Product name shown in the page title, header and hero.
pub const PRODUCT_NAME: &str = "ClearX";

/// Stem of the downloaded result file name.
///
/// The extension follows the result MIME type, e.g. `ClearX_enhanced_satellite.png`.
pub const DOWNLOAD_FILE_STEM: &str = "ClearX_enhanced_satellite";

/// Maximum file size accepted by the drop surface (in bytes).
///
/// 20 MB, matching the endpoint's default upload limit.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Maximum activity log entries kept in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
