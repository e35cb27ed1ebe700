//! Connection bootstrap
//!
//! This module handles:
//! * Client library abstraction (connector seam, MongoDB driver)
//! * Trust root resolution and validation
//! * Provider state

mod connector;
mod state;
mod tls;

pub use connector::{ClientHandle, Connector, MongoConnector};
pub use state::ProviderState;
pub use tls::TrustRoot;
