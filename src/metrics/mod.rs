//! Metrics emitted while bootstrapping the client
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! application installs a recorder.

/// Label names and values
pub mod labels {
    /// Failure reason label
    pub const REASON: &str = "reason";

    /// Connection URL missing or unusable
    pub const REASON_CONFIG: &str = "config";

    /// Client library refused to build a client
    pub const REASON_CLIENT: &str = "client";
}

/// Counters
pub mod counters {
    use super::labels;

    /// First-connection attempt started
    pub fn connection_attempted() {
        metrics::counter!("mongo_bootstrap_connections_attempted_total").increment(1);
    }

    /// Client stored
    pub fn connection_succeeded() {
        metrics::counter!("mongo_bootstrap_connections_succeeded_total").increment(1);
    }

    /// Attempt failed
    pub fn connection_failed(reason: &'static str) {
        metrics::counter!(
            "mongo_bootstrap_connections_failed_total",
            labels::REASON => reason
        )
        .increment(1);
    }
}

/// Histograms
pub mod histograms {
    /// Time spent building the client, in milliseconds
    pub fn connect_duration(duration_ms: u64) {
        metrics::histogram!("mongo_bootstrap_connect_duration_ms").record(duration_ms as f64);
    }
}
