//! mongo-bootstrap: credential-safe MongoDB URLs and a shared, lazily built client
//!
//! The connection URL is read from the environment (`MONGODB_URL` by default),
//! its user name and password are percent-encoded, and a single driver client
//! is built on first use. Every later request, from any task, reuses that
//! client and derives the named database from it.
//!
//! ```no_run
//! # async fn example() -> mongo_bootstrap::Result<()> {
//! use mongo_bootstrap::ConnectionProvider;
//!
//! let provider = ConnectionProvider::from_env()?;
//! let conn = provider.connection("orders").await?;
//! let orders = conn.database();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod connection;
pub mod constants;
pub mod error;
pub mod metrics;

pub use client::{redact, sanitize, Connection, ConnectionProvider};
pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use connection::{ClientHandle, Connector, MongoConnector, ProviderState, TrustRoot};
pub use error::{BoxError, Error, Result};
