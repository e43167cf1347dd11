use anyhow::Result;

use wso2_rs::tokens::models::Grant;
use wso2_rs::{Target, Wso2Client};

use crate::cli::{TokenCommands, TokenServer};
use crate::config::Config;
use crate::report;
use crate::workflow::Sequencer;

const RESIDENT_KEY_MANAGER: &str = "Resident Key Manager";

/// Token endpoint for applications whose keys live in the configured key manager.
pub fn token_target(cfg: &Config) -> Target {
    if cfg.key_manager_name == RESIDENT_KEY_MANAGER {
        Target::ApiManager
    } else {
        Target::IdentityServer
    }
}

fn server_target(server: TokenServer) -> Target {
    match server {
        TokenServer::Is => Target::IdentityServer,
        TokenServer::Am => Target::ApiManager,
    }
}

pub async fn run(command: TokenCommands, client: &Wso2Client) -> Result<()> {
    let (client_id, client_secret, grant, scopes, server) = match command {
        TokenCommands::Userinfo { access_token } => {
            let mut seq = Sequencer::new("token userinfo", 1);
            let claims = seq.step("userinfo", client.userinfo(&access_token)).await?;
            seq.finish();
            report::print_json(&claims);
            return Ok(());
        }
        TokenCommands::Password { client_id, client_secret, username, password, scopes, server } => (
            client_id,
            client_secret,
            Grant::Password { username, password },
            scopes,
            server,
        ),
        TokenCommands::ClientCredentials { client_id, client_secret, scopes, server } => {
            (client_id, client_secret, Grant::ClientCredentials, scopes, server)
        }
        TokenCommands::Refresh { client_id, client_secret, refresh_token, server } => (
            client_id,
            client_secret,
            Grant::RefreshToken { refresh_token },
            Vec::new(),
            server,
        ),
        TokenCommands::AuthorizationCode { client_id, client_secret, code, redirect_uri, server } => (
            client_id,
            client_secret,
            Grant::AuthorizationCode { code, redirect_uri },
            Vec::new(),
            server,
        ),
    };

    let scopes: Vec<&str> = scopes.iter().map(String::as_str).collect();
    let mut seq = Sequencer::new(format!("token {}", grant.grant_type()), 1);
    let token = seq
        .step(
            &format!("{} grant", grant.grant_type()),
            client.issue_token(server_target(server), &client_id, &client_secret, &grant, &scopes),
        )
        .await?;
    seq.finish();
    report::print_token(&token);
    Ok(())
}
