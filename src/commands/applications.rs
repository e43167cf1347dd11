use anyhow::Result;
use tracing::info;

use wso2_rs::Wso2Client;
use wso2_rs::applications::models::{ApplicationCredentials, GenerateKeysRequest};
use wso2_rs::tokens::models::Grant;

use crate::cli::AppCommands;
use crate::commands::{authorize, tokens::token_target};
use crate::config::Config;
use crate::report;
use crate::workflow::{Sequencer, StepFailure};

const APP_DESCRIPTION: &str = "created by wso2ctl";

pub async fn run(command: AppCommands, client: &mut Wso2Client, cfg: &Config) -> Result<()> {
    match command {
        AppCommands::Create { name, callback_url, grant_types } => {
            let callback = callback_url.unwrap_or_else(|| cfg.callback_url.clone());
            let mut seq = Sequencer::new(format!("app create {name}"), 3);
            authorize(&mut seq, client).await?;
            let creds =
                create_application_with_keys(&mut seq, client, cfg, &name, &callback, &grant_types)
                    .await?;
            seq.finish();
            report::print_credentials(&creds);
        }
        AppCommands::List => {
            let mut seq = Sequencer::new("app list", 2);
            authorize(&mut seq, client).await?;
            let apps = seq.step("list applications", client.list_applications()).await?;
            seq.finish();
            report::print_applications(&apps.list);
        }
        AppCommands::Get { application_id } => {
            let mut seq = Sequencer::new("app get", 2);
            authorize(&mut seq, client).await?;
            let app = seq
                .step("get application", client.get_application(&application_id))
                .await?;
            seq.finish();
            report::print_applications(std::slice::from_ref(&app));
        }
        AppCommands::Delete { application_id } => {
            let mut seq = Sequencer::new("app delete", 2);
            authorize(&mut seq, client).await?;
            seq.step("delete application", client.delete_application(&application_id))
                .await?;
            seq.finish();
            println!("deleted application {application_id}");
        }
        AppCommands::Onboard { name, api_id, callback_url, resource } => {
            let callback = callback_url.unwrap_or_else(|| cfg.callback_url.clone());
            let response =
                onboard_application(client, cfg, &name, &api_id, &callback, &resource).await?;
            println!("{}", response);
            println!("{}", response.body);
        }
    }
    Ok(())
}

/// Create the application, then generate production keys in the configured
/// key manager. Two steps.
pub async fn create_application_with_keys(
    seq: &mut Sequencer,
    client: &Wso2Client,
    cfg: &Config,
    name: &str,
    callback_url: &str,
    grant_types: &[String],
) -> Result<ApplicationCredentials, StepFailure> {
    let app = seq
        .step(
            &format!("create application {name}"),
            client.create_application(name, &cfg.default_tier, APP_DESCRIPTION),
        )
        .await?;
    info!(application_id = %app.application_id, "application created");

    let req = GenerateKeysRequest::production(&cfg.key_manager_name, grant_types, Some(callback_url));
    let keys = seq
        .step(
            &format!("generate keys in {}", cfg.key_manager_name),
            client.generate_keys(&app.application_id, &req),
        )
        .await?;

    Ok(ApplicationCredentials::new(&app, &keys))
}

/// Application to first gateway call: create, keys, subscribe, token, invoke.
pub async fn onboard_application(
    client: &mut Wso2Client,
    cfg: &Config,
    name: &str,
    api_id: &str,
    callback_url: &str,
    resource: &str,
) -> Result<wso2_rs::gateway::models::GatewayResponse, StepFailure> {
    let grants = vec!["client_credentials".to_string(), "refresh_token".to_string()];
    let mut seq = Sequencer::new(format!("app onboard {name}"), 7);
    authorize(&mut seq, client).await?;
    let api = seq.step("look up API", client.get_api(api_id)).await?;
    let creds = create_application_with_keys(&mut seq, client, cfg, name, callback_url, &grants).await?;
    report::print_credentials(&creds);

    seq.step(
        &format!("subscribe to {}", api.name),
        client.create_subscription(&creds.application_id, api_id, &cfg.default_tier),
    )
    .await?;
    let token = seq
        .step(
            "client credentials token",
            client.issue_token(
                token_target(cfg),
                &creds.client_id,
                &creds.client_secret,
                &Grant::ClientCredentials,
                &[],
            ),
        )
        .await?;
    let response = seq
        .step(
            "call the gateway",
            client.invoke_gateway(&api.context, &api.version, resource, &token.access_token),
        )
        .await?;
    seq.finish();
    Ok(response)
}
