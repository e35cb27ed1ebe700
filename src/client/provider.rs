//! ConnectionProvider implementation

use super::connection_string::{redact, sanitize};
use crate::config::ProviderConfig;
use crate::connection::{ClientHandle, Connector, MongoConnector, ProviderState, TrustRoot};
use crate::metrics::{counters, histograms, labels};
use crate::{Error, Result};
use std::future::Future;
use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// A database handle together with the shared client it came from
pub struct Connection<H: ClientHandle> {
    client: Arc<H>,
    database: H::Database,
    database_name: String,
}

impl<H: ClientHandle> Connection<H> {
    /// Shared client
    pub fn client(&self) -> &Arc<H> {
        &self.client
    }

    /// Database handle
    pub fn database(&self) -> &H::Database {
        &self.database
    }

    /// Name the database handle was derived for
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Split into client and database handle
    pub fn into_parts(self) -> (Arc<H>, H::Database) {
        (self.client, self.database)
    }
}

impl<H: ClientHandle> Clone for Connection<H>
where
    H::Database: Clone,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            database: self.database.clone(),
            database_name: self.database_name.clone(),
        }
    }
}

impl<H: ClientHandle> std::fmt::Debug for Connection<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("database_name", &self.database_name)
            .field("client", &"<ClientHandle>")
            .finish()
    }
}

/// Lazily connected, shared database client
///
/// The client is built on the first connection request and reused by every
/// later request, including concurrent ones. Build one provider at startup and
/// share it by reference or `Arc`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> mongo_bootstrap::Result<()> {
/// use mongo_bootstrap::ConnectionProvider;
///
/// // Reads MONGODB_URL on first use
/// let provider = ConnectionProvider::from_env()?;
///
/// let orders = provider.connection("orders").await?;
/// let default = provider.default_connection().await?;
/// assert!(std::sync::Arc::ptr_eq(orders.client(), default.client()));
/// # Ok(())
/// # }
/// ```
pub struct ConnectionProvider<C: Connector = MongoConnector> {
    config: ProviderConfig,
    trust_root: TrustRoot,
    connector: C,
    client: OnceCell<Arc<C::Client>>,
}

impl ConnectionProvider<MongoConnector> {
    /// Build a provider from environment configuration.
    ///
    /// The trust root is resolved here; the connection URL is not read until
    /// the first connection request.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ProviderConfig::from_env())
    }

    /// Build a provider using the MongoDB driver
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        let trust_root = TrustRoot::resolve(config.ca_file())?;
        let mut connector = MongoConnector::new();
        if let Some(app_name) = &config.app_name {
            connector = connector.app_name(app_name);
        }
        Ok(Self::new(config, trust_root, connector))
    }
}

impl<C: Connector> ConnectionProvider<C> {
    /// Create a provider with an explicit connector
    pub fn new(config: ProviderConfig, trust_root: TrustRoot, connector: C) -> Self {
        Self {
            config,
            trust_root,
            connector,
            client: OnceCell::new(),
        }
    }

    /// Configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Trust root handed to the connector
    pub fn trust_root(&self) -> &TrustRoot {
        &self.trust_root
    }

    /// Current state
    pub fn state(&self) -> ProviderState {
        if self.client.initialized() {
            ProviderState::Connected
        } else {
            ProviderState::Uninitialized
        }
    }

    /// Whether the client has been built
    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Shared client, if already built
    pub fn client(&self) -> Option<Arc<C::Client>> {
        self.client.get().cloned()
    }

    /// Get a handle to `database_name`, building the client on first use.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the URL environment variable is missing or empty;
    ///   the connector is not called
    /// - `Error::Connection` if the client could not be built; carries the
    ///   cause and the location of this call
    ///
    /// A failed first attempt leaves the provider uninitialized.
    #[track_caller]
    pub fn connection<'a>(
        &'a self,
        database_name: &'a str,
    ) -> impl Future<Output = Result<Connection<C::Client>>> + Send + 'a {
        let location = Location::caller();
        async move {
            let client = self.shared_client(location).await?;
            let database = client.database(database_name);
            Ok(Connection {
                client,
                database,
                database_name: database_name.to_string(),
            })
        }
    }

    /// [`connection`](Self::connection) for the configured default database
    #[track_caller]
    pub fn default_connection(
        &self,
    ) -> impl Future<Output = Result<Connection<C::Client>>> + Send + '_ {
        self.connection(&self.config.default_database)
    }

    async fn shared_client(&self, location: &'static Location<'static>) -> Result<Arc<C::Client>> {
        let client = self
            .client
            .get_or_try_init(|| {
                self.initialize(location).instrument(tracing::info_span!(
                    "initialize",
                    env = %self.config.url_env
                ))
            })
            .await?;
        Ok(Arc::clone(client))
    }

    /// Runs at most once per successful initialization, under the cell's lock
    async fn initialize(&self, location: &'static Location<'static>) -> Result<Arc<C::Client>> {
        let started = Instant::now();
        counters::connection_attempted();

        let url = self.config.read_url().map_err(|e| {
            counters::connection_failed(labels::REASON_CONFIG);
            e
        })?;
        let url = sanitize(&url);
        tracing::debug!(url = %redact(&url), "connection url sanitized");

        let client = self
            .connector
            .connect(&url, &self.trust_root)
            .await
            .map_err(|source| {
                counters::connection_failed(labels::REASON_CLIENT);
                tracing::debug!(error = %source, "client construction failed");
                Error::connection(source, location)
            })?;

        debug_assert!(self.state().can_transition_to(ProviderState::Connected));
        histograms::connect_duration(started.elapsed().as_millis() as u64);
        counters::connection_succeeded();
        tracing::info!(url = %redact(&url), "connection successful");

        Ok(Arc::new(client))
    }
}

impl<C: Connector + std::fmt::Debug> std::fmt::Debug for ConnectionProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("config", &self.config)
            .field("trust_root", &self.trust_root)
            .field("connector", &self.connector)
            .field("state", &self.state())
            .finish()
    }
}
