use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pear_db::config::default_config_path;
use pear_db::DatabaseConfig;
use serde::Serialize;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML (password masked)
    Show,
    /// Show config file path
    Path,
}

/// Same layout as config.toml so the output can be pasted back in
#[derive(Serialize)]
struct Rendered<'a> {
    database: &'a DatabaseConfig,
}

pub fn run_config(args: ConfigArgs, config: &DatabaseConfig, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => run_show(config),
        ConfigCommands::Path => run_path(explicit),
    }
}

fn run_show(config: &DatabaseConfig) -> Result<()> {
    let masked = config.masked();
    let body = toml::to_string_pretty(&Rendered { database: &masked })
        .context("Failed to render configuration")?;

    print!("{body}");
    println!("\n# effective url: {}", config.display_url());
    Ok(())
}

fn run_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_config_path().context("Could not determine home directory")?,
    };

    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("{}{status}", path.display());
    Ok(())
}
