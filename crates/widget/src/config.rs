//! Widget configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use sdmart_cart::DEFAULT_CART_KEY;
use sdmart_observability::LogFormat;
use sdmart_storage::StoreError;
use sdmart_storage::kv::file::default_store_path;

pub const ENV_CART_KEY: &str = "SDMART_CART_KEY";
pub const ENV_STORE_PATH: &str = "SDMART_STORE_PATH";
pub const ENV_LOG_FORMAT: &str = "SDMART_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("SDMART_LOG_FORMAT: {0}")]
    LogFormat(#[from] sdmart_observability::ParseLogFormatError),

    #[error("cannot resolve default store path: {0}")]
    StorePath(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Key the cart is stored under.
    pub cart_key: String,
    /// JSON file backing the key-value store.
    pub store_path: PathBuf,
    pub log_format: LogFormat,
}

impl WidgetConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(name) {
                None => Ok(None),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
                Some(value) => Ok(Some(value)),
            }
        };

        let cart_key = read(ENV_CART_KEY)?.unwrap_or_else(|| DEFAULT_CART_KEY.to_string());

        let store_path = match read(ENV_STORE_PATH)? {
            Some(path) => PathBuf::from(path),
            None => default_store_path()?,
        };

        let log_format = match read(ENV_LOG_FORMAT)? {
            Some(format) => format.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            cart_key,
            store_path,
            log_format,
        })
    }
}
