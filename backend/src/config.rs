//! Server configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the CLI),
//! and CLI flags override them.
//!
//! | Variable                   | Default  |
//! |----------------------------|----------|
//! | `CLEARX_PORT`              | 8000     |
//! | `CLEARX_SCALE`             | 4        |
//! | `CLEARX_MAX_UPLOAD_BYTES`  | 20 MiB   |
//! | `CLEARX_MAX_OUTPUT_PIXELS` | 64 Mpx   |
//! | `CLEARX_STATIC_DIR`        | unset    |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::enhance::EnhanceOptions;
use crate::error::{ConfigError, ConfigResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default multipart upload limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub max_upload_bytes: usize,
    pub enhance: EnhanceOptions,
    /// Built frontend (trunk `dist/`) served at `/` when set
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enhance: EnhanceOptions::default(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let defaults = Self::default();

        let config = Self {
            port: parse_or(&lookup, "CLEARX_PORT", defaults.port)?,
            max_upload_bytes: parse_or(&lookup, "CLEARX_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            enhance: EnhanceOptions {
                scale: parse_or(&lookup, "CLEARX_SCALE", defaults.enhance.scale)?,
                max_output_pixels: parse_or(
                    &lookup,
                    "CLEARX_MAX_OUTPUT_PIXELS",
                    defaults.enhance.max_output_pixels,
                )?,
                ..defaults.enhance
            },
            static_dir: lookup("CLEARX_STATIC_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=8).contains(&self.enhance.scale) {
            return Err(ConfigError::Invalid(format!(
                "scale must be between 1 and 8, got {}",
                self.enhance.scale
            )));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("max upload size must be positive".into()));
        }
        Ok(())
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> ConfigResult<T> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}
