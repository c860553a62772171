use anyhow::{Context, Result};
use clap::Parser;
use pear_db::{Database, DatabaseConfig};
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ExecArgs {
    /// SQL statement to execute
    pub sql: String,
}

pub async fn run_exec(args: ExecArgs, config: &DatabaseConfig) -> Result<()> {
    let db = Database::shared(config).await;

    debug!(sql = %args.sql, "Executing statement");
    let rows = db
        .execute(&args.sql)
        .await
        .with_context(|| format!("Statement failed on {}", db.target()))?;

    println!("{rows} row(s) affected");
    Ok(())
}
