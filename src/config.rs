//! Provider configuration

use crate::constants::{
    DATABASE_NAME, MONGODB_DATABASE_KEY, MONGODB_TLS_CA_FILE_KEY, MONGODB_URL_KEY,
};
use crate::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Provider configuration
///
/// Names where the connection URL comes from and what the defaults are.
/// The URL itself is read lazily, on the first connection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Environment variable holding the connection URL
    pub url_env: String,
    /// Database used by `default_connection`
    pub default_database: String,
    /// Explicit CA bundle (None = system bundle or driver roots)
    pub ca_file: Option<PathBuf>,
    /// Application name reported to the server
    pub app_name: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url_env: MONGODB_URL_KEY.to_string(),
            default_database: DATABASE_NAME.to_string(),
            ca_file: None,
            app_name: None,
        }
    }
}

impl ProviderConfig {
    /// Create configuration with defaults
    ///
    /// # Defaults
    ///
    /// - `url_env`: `MONGODB_URL`
    /// - `default_database`: `app`
    /// - `ca_file`: None
    /// - `app_name`: None
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder
    ///
    /// # Examples
    ///
    /// ```
    /// use mongo_bootstrap::ProviderConfig;
    ///
    /// let config = ProviderConfig::builder()
    ///     .url_env("ORDERS_MONGODB_URL")
    ///     .default_database("orders")
    ///     .build();
    /// assert_eq!(config.default_database, "orders");
    /// ```
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder {
            config: Self::default(),
        }
    }

    /// Defaults overridden from the environment
    ///
    /// Honours `MONGODB_DATABASE` and `MONGODB_TLS_CA_FILE`. Empty values are
    /// ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(database) = non_empty_var(MONGODB_DATABASE_KEY) {
            config.default_database = database;
        }
        if let Some(ca_file) = non_empty_var(MONGODB_TLS_CA_FILE_KEY) {
            config.ca_file = Some(PathBuf::from(ca_file));
        }
        config
    }

    /// Explicit CA bundle, if any
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }

    /// Read the connection URL.
    ///
    /// # Errors
    ///
    /// `Error::Config` when the variable is unset, empty, or not unicode.
    pub fn read_url(&self) -> Result<String> {
        match env::var(&self.url_env) {
            // Whitespace-only counts as empty
            Ok(url) if !url.trim().is_empty() => Ok(url),
            Ok(_) => Err(Error::Config(format!(
                "environment variable '{}' is empty",
                self.url_env
            ))),
            Err(env::VarError::NotPresent) => Err(Error::Config(format!(
                "environment variable '{}' is not set",
                self.url_env
            ))),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Config(format!(
                "environment variable '{}' is not valid unicode",
                self.url_env
            ))),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for `ProviderConfig`
#[derive(Debug, Clone)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Set the environment variable holding the URL
    pub fn url_env(mut self, key: impl Into<String>) -> Self {
        self.config.url_env = key.into();
        self
    }

    /// Set the default database
    pub fn default_database(mut self, name: impl Into<String>) -> Self {
        self.config.default_database = name.into();
        self
    }

    /// Set an explicit CA bundle
    pub fn ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ca_file = Some(path.into());
        self
    }

    /// Set the application name
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = Some(name.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}
