//! Runtime settings for the storefront server
//!
//! Settings come from defaults overridden by environment variables.

use std::collections::HashMap;
use std::ffi::OsString;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid STOREFRONT_BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: SocketAddr,

    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Builds settings from key/value pairs.
    ///
    /// `STOREFRONT_BIND_ADDR` sets the listen address. `STOREFRONT_LOG` sets the
    /// log filter, falling back to `RUST_LOG`.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let raw_addr = vars
            .get("STOREFRONT_BIND_ADDR")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.to_string()))?;

        let log_filter = vars
            .get("STOREFRONT_LOG")
            .or_else(|| vars.get("RUST_LOG"))
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

/// Keeps the pairs whose key and value are both valid UTF-8.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
