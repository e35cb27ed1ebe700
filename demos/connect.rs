//! Connect using environment configuration and list collections
//!
//! Run with:
//! ```bash
//! MONGODB_URL="mongodb+srv://user:p@ss@cluster0.example.net/" \
//! RUST_LOG=mongo_bootstrap=debug cargo run --example connect -- orders
//! ```

use mongo_bootstrap::ConnectionProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider = ConnectionProvider::from_env()?;
    match provider.trust_root().path() {
        Some(path) => println!("trust root: {}", path.display()),
        None => println!("trust root: driver defaults"),
    }

    let conn = match std::env::args().nth(1) {
        Some(name) => provider.connection(&name).await?,
        None => provider.default_connection().await?,
    };

    let collections = conn.database().list_collection_names(None).await?;
    println!("{}: {} collection(s)", conn.database_name(), collections.len());
    for name in collections {
        println!("  {}", name);
    }

    Ok(())
}
