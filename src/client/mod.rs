//! High-level client API
//!
//! URL credential escaping and the lazily connected provider.

mod connection_string;
mod provider;

pub use connection_string::{redact, sanitize};
pub use provider::{Connection, ConnectionProvider};
