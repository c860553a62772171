//! Connectivity check

use anyhow::{Context, Result};
use pear_db::{Database, DatabaseConfig};

/// Open the shared connection and ping it
pub async fn run_check(config: &DatabaseConfig) -> Result<()> {
    let db = Database::shared(config).await;

    db.ping()
        .await
        .with_context(|| format!("Cannot reach {}", db.target()))?;

    println!("ok {}", db.target());
    Ok(())
}
