use anyhow::Result;
use tracing::info;

use wso2_rs::Wso2Client;
use wso2_rs::key_managers::models::{KeyManager, KeyManagerRequest};

use crate::commands::authorize;
use crate::config::Config;
use crate::report;
use crate::workflow::{Sequencer, StepFailure};

pub async fn run_health(client: &Wso2Client) -> Result<()> {
    let mut seq = Sequencer::new("health", 2);
    let is = seq.step("identity server health", client.identity_server_health()).await?;
    report::print_health(&is);
    let am = seq.step("api manager health", client.api_manager_health()).await?;
    report::print_health(&am);
    seq.finish();
    Ok(())
}

/// Health of both products, the IS key manager, then the default roles.
pub async fn run_setup(client: &mut Wso2Client, cfg: &Config, roles: &[String]) -> Result<()> {
    let mut seq = Sequencer::new("setup", 4 + roles.len());
    seq.step("identity server health", client.identity_server_health()).await?;
    seq.step("api manager health", client.api_manager_health()).await?;
    authorize(&mut seq, client).await?;
    ensure_key_manager(&mut seq, client, cfg).await?;
    for role in roles {
        let created = seq
            .step_tolerating_conflict(&format!("create role {role}"), client.create_role(role, &[]))
            .await?;
        if let Some(role) = created {
            info!(role_id = %role.id, "role {} created", role.display_name);
        }
    }
    let summary = seq.finish();
    println!("{} complete ({} warning(s))", summary.workflow, summary.warnings.len());
    Ok(())
}

/// Register the IS as key manager unless one with the configured name exists.
///
/// Returns `None` when the registration raced with another one and came back
/// as a conflict.
pub(crate) async fn ensure_key_manager(
    seq: &mut Sequencer,
    client: &Wso2Client,
    cfg: &Config,
) -> Result<Option<KeyManager>, StepFailure> {
    let name = cfg.key_manager_name.as_str();
    let req = KeyManagerRequest::identity_server(
        name,
        &cfg.key_manager_type,
        &cfg.is_internal_url,
        &cfg.admin,
    );
    let outcome = seq
        .step_tolerating_conflict(&format!("register key manager {name}"), async {
            match client.find_key_manager(name).await? {
                Some(km) => Ok((km, false)),
                None => client.create_key_manager(&req).await.map(|km| (km, true)),
            }
        })
        .await?;

    Ok(outcome.map(|(km, created)| {
        if created {
            info!(key_manager_id = %km.id, "key manager {} registered", km.name);
        } else {
            info!(key_manager_id = %km.id, "key manager {} already registered", km.name);
        }
        km
    }))
}
