//! Client library seam
//!
//! The provider only needs two things from a database client library: build a
//! client from a URL and a trust root, and derive named database handles from
//! it. `MongoConnector` does this with the official `mongodb` driver.

use super::tls::TrustRoot;
use crate::BoxError;
use async_trait::async_trait;
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use std::path::Path;

/// Shared client handle produced by a [`Connector`]
pub trait ClientHandle: Send + Sync + 'static {
    /// Named database scope derived from the client
    type Database: Send + Sync;

    /// Derive the handle for `name`
    fn database(&self, name: &str) -> Self::Database;
}

/// Builds client handles
#[async_trait]
pub trait Connector: Send + Sync {
    /// Client type produced
    type Client: ClientHandle;

    /// Build a client for an already sanitized URL.
    ///
    /// May perform network I/O (DNS SRV lookups for `mongodb+srv://`).
    async fn connect(&self, url: &str, trust_root: &TrustRoot) -> Result<Self::Client, BoxError>;
}

impl ClientHandle for mongodb::Client {
    type Database = mongodb::Database;

    fn database(&self, name: &str) -> mongodb::Database {
        mongodb::Client::database(self, name)
    }
}

/// Connector backed by the `mongodb` driver
///
/// TLS is always enabled; a URL with `tls=false` is rejected. The trust root
/// becomes the CA file unless the URL already names one through `tlsCAFile`.
#[derive(Debug, Clone, Default)]
pub struct MongoConnector {
    app_name: Option<String>,
}

impl MongoConnector {
    /// Create a connector
    pub fn new() -> Self {
        Self::default()
    }

    /// Application name reported to the server, unless the URL sets `appName`
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Resolve driver options for `url`
    async fn options(&self, url: &str, trust_root: &TrustRoot) -> Result<ClientOptions, BoxError> {
        let mut options = ClientOptions::parse(url).await?;

        let mut tls = match options.tls.take() {
            Some(Tls::Enabled(tls)) => tls,
            Some(Tls::Disabled) => {
                return Err("tls=false conflicts with the required trust root".into());
            }
            None => TlsOptions::default(),
        };
        if tls.ca_file_path.is_none() {
            tls.ca_file_path = trust_root.path().map(Path::to_path_buf);
        }
        options.tls = Some(Tls::Enabled(tls));

        if options.app_name.is_none() {
            options.app_name = self.app_name.clone();
        }

        Ok(options)
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Client = mongodb::Client;

    async fn connect(&self, url: &str, trust_root: &TrustRoot) -> Result<mongodb::Client, BoxError> {
        let options = self.options(url, trust_root).await?;
        let client = mongodb::Client::with_options(options)?;
        Ok(client)
    }
}
