//! # ClearX - satellite image enhancement endpoint
//!
//! Serves the `POST /enhance` endpoint used by the ClearX demo page, and a
//! native client for the same endpoint.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  multipart  │────▶│   decode    │────▶│   enhance   │────▶│  image/png  │
//! │   `file`    │     │  (any fmt)  │     │ (×4, sharp) │     │  response   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clearx::{enhance_bytes, EnhanceOptions};
//!
//! let input = std::fs::read("tile.png")?;
//! let result = enhance_bytes(&input, &EnhanceOptions::default())?;
//! std::fs::write("tile_x4.png", &result.png)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment configuration
//! - [`enhance`] - Enhancement pipeline
//! - [`client`] - Native client for a remote endpoint
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Processing
pub mod enhance;

// HTTP
pub mod client;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    EnhanceError,
    ConfigError,
    ServerError,
    ClientError,
    EnhanceResult,
    ConfigResult,
    ServerResult,
    ClientResult,
};

pub use config::ServerConfig;

pub use enhance::{enhance_bytes, output_dimensions, EnhanceOptions, EnhancedImage};

pub use client::{download_file_name, EnhanceClient, EnhancedDownload, DOWNLOAD_FILE_STEM};

pub use api::{build_router, AppState, HealthResponse, error_response};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
