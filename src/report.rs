// src/report.rs
//
// Operator-facing output. Identifiers and secrets go to stdout so they can be
// copied or captured by a shell; progress stays on the tracing side.
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use wso2_rs::apis::models::{Api, Revision};
use wso2_rs::applications::models::{Application, ApplicationCredentials};
use wso2_rs::health::models::HealthStatus;
use wso2_rs::key_managers::models::KeyManager;
use wso2_rs::roles::models::Role;
use wso2_rs::subscriptions::models::Subscription;
use wso2_rs::tokens::models::TokenResponse;
use wso2_rs::users::models::ScimUser;

pub fn print_health(status: &HealthStatus) {
    if status.detail.is_empty() {
        println!("{status}");
    } else {
        println!("{status} ({})", status.detail);
    }
}

pub fn print_credentials(creds: &ApplicationCredentials) {
    println!("application_id: {}", creds.application_id);
    println!("client_id:      {}", creds.client_id);
    println!("client_secret:  {}", creds.client_secret);
    if let Some(cb) = &creds.callback_url {
        println!("callback_url:   {cb}");
    }
}

pub fn print_applications(apps: &[Application]) {
    println!("Found {} application(s):", apps.len());
    for (i, app) in apps.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            i + 1,
            app,
            app.throttling_policy.as_deref().unwrap_or("-")
        );
    }
}

/// Wall-clock expiry, or `None` when the lifetime does not fit a timestamp.
/// WSO2 reports non-expiring tokens as `i64::MAX / 1000` seconds.
fn expiry_time(expires_in: u64) -> Option<DateTime<Utc>> {
    i64::try_from(expires_in)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|d| Utc::now().checked_add_signed(d))
}

pub fn print_token(token: &TokenResponse) {
    println!("access_token:  {}", token.access_token);
    if let Some(rt) = &token.refresh_token {
        println!("refresh_token: {rt}");
    }
    if let Some(scope) = &token.scope {
        println!("scope:         {scope}");
    }
    match expiry_time(token.expires_in) {
        Some(at) => println!(
            "expires_in:    {}s (at {})",
            token.expires_in,
            at.format("%Y-%m-%dT%H:%M:%SZ")
        ),
        None => println!("expires_in:    {}s (never)", token.expires_in),
    }
    match token.id_token_claims() {
        Some(Ok(claims)) => {
            println!("id_token claims:");
            print_json(&claims);
        }
        Some(Err(e)) => println!("id_token:      present, not decodable ({e})"),
        None => {}
    }
}

pub fn print_api(api: &Api) {
    println!("api_id:    {}", api.id);
    println!("name:      {} {}", api.name, api.version);
    println!("context:   {}", api.context);
    if let Some(backend) = api.backend_url() {
        println!("backend:   {backend}");
    }
    if let Some(status) = &api.lifecycle_status {
        println!("lifecycle: {status}");
    }
}

pub fn print_apis(apis: &[Api]) {
    println!("Found {} API(s):", apis.len());
    for (i, api) in apis.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            i + 1,
            api,
            api.lifecycle_status.as_deref().unwrap_or("-")
        );
    }
}

pub fn print_deployment(api_id: &str, environment: &str, revision: Option<&Revision>) {
    match revision {
        Some(rev) => println!("api {api_id}: {rev} deployed to {environment}"),
        None => println!("api {api_id}: not deployed to {environment}"),
    }
}

pub fn print_subscriptions(subs: &[Subscription]) {
    println!("Found {} subscription(s):", subs.len());
    for sub in subs {
        println!("- {sub}");
    }
}

pub fn print_user(user: &ScimUser) {
    println!("user_id:  {}", user.id);
    println!("username: {}", user.user_name);
    if let Some(email) = user.primary_email() {
        println!("email:    {email}");
    }
    if let Some(active) = user.active {
        println!("active:   {active}");
    }
    if !user.roles.is_empty() {
        let roles: Vec<&str> = user
            .roles
            .iter()
            .map(|r| r.display.as_deref().unwrap_or(r.value.as_str()))
            .collect();
        println!("roles:    {}", roles.join(", "));
    }
}

pub fn print_users(users: &[ScimUser], total: u32) {
    println!("Showing {} of {} user(s):", users.len(), total);
    for user in users {
        println!("- {user}");
    }
}

pub fn print_roles(roles: &[Role]) {
    println!("Found {} role(s):", roles.len());
    for role in roles {
        println!("- {role}");
    }
}

pub fn print_key_managers(kms: &[KeyManager]) {
    println!("Found {} key manager(s):", kms.len());
    for km in kms {
        println!("- {km}");
    }
}

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}
