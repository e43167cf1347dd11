//! commands/mod.rs
//!
//! One module per subcommand group. Each group exposes a `run` that takes the
//! parsed subcommand, and workflow functions returning typed results so the
//! chains can be driven from tests against a mock server.

pub mod apis;
pub mod applications;
pub mod certs;
pub mod health;
pub mod key_manager;
pub mod roles;
pub mod subscriptions;
pub mod tokens;
pub mod users;

use anyhow::{Context, Result};

use wso2_rs::Wso2Client;
use wso2_rs::tokens::MANAGEMENT_SCOPES;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::workflow::{Sequencer, StepFailure};

pub async fn dispatch(cli: Cli, cfg: &Config) -> Result<()> {
    match cli.command {
        // cert commands never authenticate against the products
        Commands::Cert { command } => certs::run(command, cfg).await,
        command => run_with_client(command, cfg).await,
    }
}

async fn run_with_client(command: Commands, cfg: &Config) -> Result<()> {
    let mut client = Wso2Client::new_with_config(cfg.admin.clone(), cfg.client_config())
        .context("building HTTP client")?;

    match command {
        Commands::Health => health::run_health(&client).await,
        Commands::Setup { roles } => health::run_setup(&mut client, cfg, &roles).await,
        Commands::KeyManager { command } => key_manager::run(command, &mut client, cfg).await,
        Commands::App { command } => applications::run(command, &mut client, cfg).await,
        Commands::Role { command } => roles::run(command, &client).await,
        Commands::Token { command } => tokens::run(command, &client).await,
        Commands::Api { command } => apis::run(command, &mut client, cfg).await,
        Commands::Subscription { command } => subscriptions::run(command, &mut client, cfg).await,
        Commands::User { command } => users::run(command, &client, cfg).await,
        Commands::Cert { command } => certs::run(command, cfg).await,
    }
}

/// First step of every publisher, devportal or admin chain.
pub(crate) async fn authorize(
    seq: &mut Sequencer,
    client: &mut Wso2Client,
) -> Result<(), StepFailure> {
    seq.step("obtain management token", client.authorize_management(MANAGEMENT_SCOPES))
        .await?;
    Ok(())
}
