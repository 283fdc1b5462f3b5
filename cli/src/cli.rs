//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::ports::{ConfigStore as _, SessionStore as _};
use crate::commands;
use crate::infra::{HttpManagementClient, ProcessEnvironment, SessionManager, YamlConfigStore};
use crate::output::OutputContext;

/// Administrative command-line interface for the Castellan controller
#[derive(Parser)]
#[command(
    name = "castellan",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report version and environment information
    Version,

    /// Connect to a management controller
    Connect(commands::connect::ConnectArgs),

    /// Discard the saved controller session
    Disconnect,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::Version => {
                let store = SessionManager::new()?;
                let client = store
                    .load()?
                    .map(|session| HttpManagementClient::new(session.address));
                commands::version::run(&ctx, client.as_ref(), &ProcessEnvironment::new())
            }
            Command::Connect(args) => {
                let store = SessionManager::new()?;
                let config = YamlConfigStore::new().load()?;
                let address =
                    commands::connect::resolve_address(args.controller.as_deref(), &config);
                let client = HttpManagementClient::new(address.clone());
                commands::connect::run(&ctx, &address, &client, &store)
            }
            Command::Disconnect => {
                let store = SessionManager::new()?;
                commands::disconnect::run(&ctx, &store)
            }
            Command::Config(cmd) => commands::config::run(&ctx, cmd, &YamlConfigStore::new()),
        }
    }
}
