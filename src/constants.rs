//! Environment keys and defaults

/// Environment variable holding the full connection URL
pub const MONGODB_URL_KEY: &str = "MONGODB_URL";

/// Environment variable overriding the default database name
pub const MONGODB_DATABASE_KEY: &str = "MONGODB_DATABASE";

/// Environment variable overriding the CA bundle location
pub const MONGODB_TLS_CA_FILE_KEY: &str = "MONGODB_TLS_CA_FILE";

/// Database used when the caller does not name one
pub const DATABASE_NAME: &str = "app";

/// Placeholder written in place of passwords in log output
pub const REDACTED: &str = "****";
