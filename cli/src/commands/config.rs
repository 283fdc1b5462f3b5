//! `castellan config` — show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::domain::config::{validate_config_key, validate_config_value};
use crate::output::OutputContext;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the config file cannot
/// be read or written.
pub fn run(ctx: &OutputContext, cmd: ConfigCommand, store: &impl ConfigStore) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(ctx, store),
        ConfigCommand::Set { key, value } => set_config(ctx, store, &key, &value),
    }
}

fn show_config(ctx: &OutputContext, store: &impl ConfigStore) -> Result<()> {
    let config = store.load()?;
    let path = store.path()?;
    ctx.header("Configuration");
    ctx.kv("controller.address", &config.controller.address);
    ctx.info(&format!("File: {}", path.display()));
    Ok(())
}

fn set_config(ctx: &OutputContext, store: &impl ConfigStore, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load()?;
    match key {
        "controller.address" => config.controller.address = value.to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    store.save(&config)?;

    ctx.success(&format!("Set {key} = {value}"));
    Ok(())
}
