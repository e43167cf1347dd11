//! User administration over SCIM2.
//!
//! Commands take usernames; each one resolves the SCIM id first so a wrong
//! name fails at the lookup step instead of with a 404 further down.

use anyhow::Result;
use tracing::info;

use wso2_rs::tokens::models::{Grant, TokenResponse};
use wso2_rs::users::models::{NewUser, ProfileUpdate, ScimUser};
use wso2_rs::Wso2Client;

use crate::cli::UserCommands;
use crate::commands::tokens::token_target;
use crate::config::Config;
use crate::report;
use crate::workflow::{Sequencer, StepFailure};

pub async fn run(command: UserCommands, client: &Wso2Client, cfg: &Config) -> Result<()> {
    match command {
        UserCommands::Register { username, password, email, given_name, family_name, phone, roles } => {
            let user = NewUser { username, password, email, given_name, family_name, phone, roles };
            let mut seq = Sequencer::new(format!("user register {}", user.username), 2 + 2 * user.roles.len());
            let registered = register(&mut seq, client, &user).await?;
            let summary = seq.finish();
            report::print_user(&registered);
            if !summary.warnings.is_empty() {
                println!("(user already existed)");
            }
        }
        UserCommands::Activate { username } => set_active(client, &username, true).await?,
        UserCommands::Deactivate { username } => set_active(client, &username, false).await?,
        UserCommands::List { count } => {
            let mut seq = Sequencer::new("user list", 1);
            let page = seq.step("list users", client.list_users(count)).await?;
            seq.finish();
            report::print_users(&page.resources, page.total_results);
        }
        UserCommands::Get { username } => {
            let mut seq = Sequencer::new("user get", 1);
            let user = seq
                .step(&format!("look up {username}"), client.require_user(&username))
                .await?;
            seq.finish();
            report::print_user(&user);
        }
        UserCommands::Delete { username } => {
            let mut seq = Sequencer::new("user delete", 2);
            let user = seq
                .step(&format!("look up {username}"), client.require_user(&username))
                .await?;
            seq.step("delete user", client.delete_user(&user.id)).await?;
            seq.finish();
            println!("deleted user {user}");
        }
        UserCommands::ResetPassword { username, new_password } => {
            let mut seq = Sequencer::new("user reset-password", 2);
            let user = seq
                .step(&format!("look up {username}"), client.require_user(&username))
                .await?;
            seq.step("replace password", client.reset_password(&user.id, &new_password))
                .await?;
            seq.finish();
            println!("password reset for {user}");
        }
        UserCommands::Update { username, email, given_name, family_name, phone } => {
            let update = ProfileUpdate { email, given_name, family_name, phone };
            let mut seq = Sequencer::new("user update", 2);
            let user = seq
                .step(&format!("look up {username}"), client.require_user(&username))
                .await?;
            let fields = seq
                .step("update profile", client.update_profile(&user.id, &update))
                .await?;
            seq.finish();
            if fields.is_empty() {
                println!("nothing to update for {user}");
            } else {
                println!("updated {} for {user}", fields.join(", "));
            }
        }
        UserCommands::Onboard { username, password, email, client_id, client_secret } => {
            let user = NewUser { username, password, email, ..Default::default() };
            let token = onboard_user(client, cfg, &user, &client_id, &client_secret).await?;
            report::print_token(&token);
        }
    }
    Ok(())
}

/// Create the user (an existing one is a warning), then add it to each role.
pub async fn register(
    seq: &mut Sequencer,
    client: &Wso2Client,
    user: &NewUser,
) -> Result<ScimUser, StepFailure> {
    let created = seq
        .step_tolerating_conflict(&format!("register {}", user.username), client.register_user(user))
        .await?;
    let scim_user = match created {
        Some(u) => {
            info!(user_id = %u.id, "user {} created", u.user_name);
            u
        }
        None => {
            seq.step(&format!("look up {}", user.username), client.require_user(&user.username))
                .await?
        }
    };

    for role in &user.roles {
        let role_id = seq
            .step(&format!("look up role {role}"), client.find_role_id(role))
            .await?;
        seq.step(
            &format!("add {} to {role}", user.username),
            client.assign_user_to_role(&role_id, &scim_user.id),
        )
        .await?;
    }
    Ok(scim_user)
}

async fn set_active(client: &Wso2Client, username: &str, active: bool) -> Result<()> {
    let verb = if active { "activate" } else { "deactivate" };
    let mut seq = Sequencer::new(format!("user {verb}"), 2);
    let user = seq
        .step(&format!("look up {username}"), client.require_user(username))
        .await?;
    seq.step(&format!("{verb} account"), client.set_user_active(&user.id, active))
        .await?;
    seq.finish();
    println!("{verb}d {user}");
    Ok(())
}

/// Register (tolerating an existing account), activate, then prove the
/// credentials with a password grant.
pub async fn onboard_user(
    client: &Wso2Client,
    cfg: &Config,
    user: &NewUser,
    client_id: &str,
    client_secret: &str,
) -> Result<TokenResponse, StepFailure> {
    let mut seq = Sequencer::new(format!("user onboard {}", user.username), 3);
    let scim_user = register(&mut seq, client, user).await?;
    seq.step("activate account", client.set_user_active(&scim_user.id, true))
        .await?;

    let grant = Grant::Password {
        username: user.username.clone(),
        password: user.password.clone(),
    };
    let token = seq
        .step(
            "password grant",
            client.issue_token(token_target(cfg), client_id, client_secret, &grant, &["openid"]),
        )
        .await?;
    seq.finish();
    Ok(token)
}
