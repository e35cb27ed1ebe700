//! Error types

use std::panic::Location;
use thiserror::Error;

/// Boxed error raised by a client library while building a client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration (environment, trust root)
    #[error("configuration error: {0}")]
    Config(String),

    /// Client construction failed
    ///
    /// `location` is the call site that requested the connection.
    #[error("connection failed at {location}: {source}")]
    Connection {
        /// Where the connection was requested
        location: &'static Location<'static>,
        /// Underlying cause
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Wrap a client construction failure with call-site context
    pub fn connection(source: impl Into<BoxError>, location: &'static Location<'static>) -> Self {
        Self::Connection {
            location,
            source: source.into(),
        }
    }

    /// Whether this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether this is a wrapped connection failure
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Call site attached to a connection failure
    pub fn location(&self) -> Option<&'static Location<'static>> {
        match self {
            Self::Connection { location, .. } => Some(*location),
            Self::Config(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
