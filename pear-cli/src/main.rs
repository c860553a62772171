//! pear CLI - MySQL connectivity for the pear database
//!
//! Opens the single shared connection from `pear-db` and exposes it:
//! - `check`: connect, log the outcome, ping
//! - `config`: show the effective connection settings (masked)
//! - `exec`: run one statement over the shared connection

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pear_db::config::mask_url;
use pear_db::DatabaseConfig;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pear",
    author,
    version,
    about = "Connect to the pear MySQL database and run checks or statements"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect once and verify the server answers
    Check,
    /// Inspect the effective connection configuration
    Config(commands::config::ConfigArgs),
    /// Execute one SQL statement and report rows affected
    Exec(commands::exec::ExecArgs),
}

/// Connection overrides; these win over environment and config file
#[derive(Args, Clone, Default)]
struct ConnectionArgs {
    /// Config file (default: ~/.pear/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Database server host
    #[arg(long, global = true)]
    host: Option<String>,

    /// Database server port
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Database user
    #[arg(long, global = true)]
    user: Option<String>,

    /// Database password
    #[arg(long, global = true)]
    password: Option<String>,

    /// Database name
    #[arg(long, global = true)]
    database: Option<String>,

    /// Full mysql:// URL (overrides the individual settings)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("database_url", &self.database_url.as_deref().map(mask_url))
            .finish()
    }
}

impl ConnectionArgs {
    fn has_field_overrides(&self) -> bool {
        self.host.is_some()
            || self.port.is_some()
            || self.user.is_some()
            || self.password.is_some()
            || self.database.is_some()
    }

    /// Layer CLI flags over file and environment settings
    fn resolve(&self) -> Result<DatabaseConfig> {
        let mut config = DatabaseConfig::load(self.config.as_deref())
            .context("Failed to load database configuration")?;

        // Explicit fields on the command line beat a URL from env or file
        if self.has_field_overrides() {
            config.url = None;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    pear_db::load_dotenv();

    let config = cli.connection.resolve()?;

    match cli.command {
        Commands::Check => commands::check::run_check(&config).await,
        Commands::Config(args) => {
            commands::config::run_config(args, &config, cli.connection.config.as_deref())
        }
        Commands::Exec(args) => commands::exec::run_exec(args, &config).await,
    }
}
