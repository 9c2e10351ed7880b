//! Browser-side services.
//!
//! # Services
//!
//! - [`enhance`] - Multipart upload to the enhancement endpoint
//! - [`files`] - Local file reading and result download

pub mod enhance;
pub mod files;

pub use enhance::*;
pub use files::*;
