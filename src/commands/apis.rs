use anyhow::Result;
use tracing::info;

use wso2_rs::apis::models::{Api, CreateApiRequest, Revision};
use wso2_rs::{Wso2Client, Wso2Error};

use crate::cli::ApiCommands;
use crate::commands::authorize;
use crate::config::Config;
use crate::report;
use crate::workflow::{Sequencer, StepFailure};

const REVISION_DESCRIPTION: &str = "created by wso2ctl";

#[derive(Debug)]
pub struct Rollout {
    pub api: Api,
    pub lifecycle_state: String,
    pub revision: Revision,
    /// Revision the gateway environment reports after the deploy.
    pub deployed: Revision,
}

pub async fn run(command: ApiCommands, client: &mut Wso2Client, cfg: &Config) -> Result<()> {
    match command {
        ApiCommands::Create { name, version, context, backend_url } => {
            let mut seq = Sequencer::new(format!("api create {name}"), 2);
            authorize(&mut seq, client).await?;
            let req = CreateApiRequest::http(&name, &version, &context, &backend_url, &cfg.default_tier);
            let api = seq.step(&format!("create API {name} {version}"), client.create_api(&req)).await?;
            seq.finish();
            report::print_api(&api);
        }
        ApiCommands::Publish { api_id } => {
            let mut seq = Sequencer::new("api publish", 2);
            authorize(&mut seq, client).await?;
            let state = seq.step("publish API", client.publish_api(&api_id)).await?;
            seq.finish();
            println!("api {api_id}: {state}");
        }
        ApiCommands::Revision { api_id, description } => {
            let mut seq = Sequencer::new("api revision", 2);
            authorize(&mut seq, client).await?;
            let rev = seq
                .step("create revision", client.create_revision(&api_id, &description))
                .await?;
            seq.finish();
            println!("revision_id: {}", rev.id);
            println!("revision:    {rev}");
        }
        ApiCommands::Deploy { api_id, revision_id } => {
            let mut seq = Sequencer::new("api deploy", 2);
            authorize(&mut seq, client).await?;
            let deployments = seq
                .step(
                    &format!("deploy revision to {}", cfg.gateway_env),
                    client.deploy_revision(&api_id, &revision_id, &cfg.gateway_env, &cfg.gateway_vhost),
                )
                .await?;
            seq.finish();
            for d in deployments {
                println!(
                    "revision {revision_id} -> {} ({})",
                    d.name,
                    d.status.as_deref().unwrap_or("requested")
                );
            }
        }
        ApiCommands::List => {
            let mut seq = Sequencer::new("api list", 2);
            authorize(&mut seq, client).await?;
            let apis = seq.step("list APIs", client.list_apis()).await?;
            seq.finish();
            report::print_apis(&apis.list);
        }
        ApiCommands::Get { api_id } => {
            let mut seq = Sequencer::new("api get", 2);
            authorize(&mut seq, client).await?;
            let api = seq.step("get API", client.get_api(&api_id)).await?;
            seq.finish();
            report::print_api(&api);
        }
        ApiCommands::Status { api_id } => {
            let mut seq = Sequencer::new("api status", 2);
            authorize(&mut seq, client).await?;
            let revisions = seq
                .step("list deployed revisions", client.deployed_revisions(&api_id))
                .await?;
            seq.finish();
            report::print_deployment(&api_id, &cfg.gateway_env, revisions.deployed_to(&cfg.gateway_env));
        }
        ApiCommands::Rollout { name, version, context, backend_url } => {
            let rollout = rollout(client, cfg, &name, &version, &context, &backend_url).await?;
            report::print_api(&rollout.api);
            println!("lifecycle: {}", rollout.lifecycle_state);
            println!("revision:  {}", rollout.revision);
            report::print_deployment(&rollout.api.id, &cfg.gateway_env, Some(&rollout.deployed));
        }
    }
    Ok(())
}

/// Create, publish, revision, deploy, then confirm the gateway environment
/// reports the deployment.
pub async fn rollout(
    client: &mut Wso2Client,
    cfg: &Config,
    name: &str,
    version: &str,
    context: &str,
    backend_url: &str,
) -> Result<Rollout, StepFailure> {
    let env = cfg.gateway_env.as_str();
    let mut seq = Sequencer::new(format!("api rollout {name}"), 6);
    authorize(&mut seq, client).await?;

    let req = CreateApiRequest::http(name, version, context, backend_url, &cfg.default_tier);
    let api = seq
        .step(&format!("create API {name} {version}"), client.create_api(&req))
        .await?;
    info!(api_id = %api.id, "API created");

    let lifecycle_state = seq.step("publish API", client.publish_api(&api.id)).await?;
    let revision = seq
        .step("create revision", client.create_revision(&api.id, REVISION_DESCRIPTION))
        .await?;
    seq.step(
        &format!("deploy revision to {env}"),
        client.deploy_revision(&api.id, &revision.id, env, &cfg.gateway_vhost),
    )
    .await?;

    let deployed = seq
        .step(&format!("verify deployment on {env}"), async {
            let revisions = client.deployed_revisions(&api.id).await?;
            revisions
                .deployed_to(env)
                .cloned()
                .ok_or_else(|| Wso2Error::MissingField(format!("deploymentInfo[name={env}]")))
        })
        .await?;

    seq.finish();
    Ok(Rollout { api, lifecycle_state, revision, deployed })
}
