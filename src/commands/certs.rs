//! Certificate trust between the products.
//!
//! Both commands work on the Java truststore named by `WSO2_TRUSTSTORE`.
//! `check` asks `keytool` whether the Identity Server certificate is in it,
//! and with `--tls` also probes each product with certificate validation
//! switched on; an HTTP answer of any status proves the handshake worked.
//! `fix` imports a PEM certificate into the same store.

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::info;

use wso2_rs::{Method, Target, Wso2Client, Wso2Error};

use crate::cli::CertCommands;
use crate::config::Config;
use crate::workflow::Sequencer;

pub async fn run(command: CertCommands, cfg: &Config) -> Result<()> {
    match command {
        CertCommands::Check { alias, keytool, tls } => check(cfg, &keytool, &alias, tls).await,
        CertCommands::Fix { pem_file, alias, keytool } => {
            import_certificate(cfg, &keytool, &pem_file, &alias).await
        }
    }
}

/// Any vendor answer means TLS is fine; only transport failures count.
fn handshake_ok<T>(result: Result<T, Wso2Error>) -> Result<(), Wso2Error> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.status().is_some() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Run keytool against the configured truststore; a non-zero exit becomes
/// an error carrying the first line keytool printed.
async fn keytool(cfg: &Config, bin: &str, args: &[&str]) -> Result<(), Wso2Error> {
    let output = Command::new(bin)
        .args(args)
        .args(["-keystore", cfg.truststore.as_str()])
        .args(["-storepass", cfg.truststore_password.as_str()])
        .output()
        .await?;
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    // keytool reports most failures on stdout
    let detail = [stderr.trim(), stdout.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .and_then(|s| s.lines().next())
        .map(str::to_string)
        .unwrap_or_else(|| format!("status {}", output.status));
    Err(Wso2Error::Other(format!("keytool failed: {detail}")))
}

async fn check(cfg: &Config, keytool_bin: &str, alias: &str, tls: bool) -> Result<()> {
    let mut seq = Sequencer::new("cert check", if tls { 4 } else { 1 });
    seq.step(&format!("find '{alias}' in {}", cfg.truststore), async {
        keytool(cfg, keytool_bin, &["-list", "-alias", alias]).await
    })
    .await?;

    if tls {
        let mut client_cfg = cfg.client_config();
        client_cfg.accept_invalid_certs = false;
        let client = Wso2Client::new_with_config(cfg.admin.clone(), client_cfg)
            .context("building verifying HTTP client")?;

        seq.step(&format!("verified TLS to {}", cfg.is_url), async {
            handshake_ok(client.identity_server_health().await)
        })
        .await?;
        seq.step(&format!("verified TLS to {}", cfg.am_url), async {
            handshake_ok(client.api_manager_health().await)
        })
        .await?;
        seq.step(&format!("verified TLS to {}", cfg.gateway_url), async {
            let credential = client.admin().basic();
            handshake_ok(
                client
                    .send::<str>(Target::Gateway, Method::GET, "/", &credential, None)
                    .await,
            )
        })
        .await?;
    }
    seq.finish();
    println!("'{alias}' is trusted by {}", cfg.truststore);
    Ok(())
}

async fn import_certificate(cfg: &Config, keytool_bin: &str, pem_file: &str, alias: &str) -> Result<()> {
    let mut seq = Sequencer::new("cert fix", 2);
    seq.step(&format!("read {pem_file}"), async {
        let pem = tokio::fs::read_to_string(pem_file).await?;
        if pem.contains("BEGIN CERTIFICATE") {
            Ok(())
        } else {
            Err(Wso2Error::Other(format!("{pem_file} is not a PEM certificate")))
        }
    })
    .await?;

    seq.step(&format!("import into {}", cfg.truststore), async {
        keytool(
            cfg,
            keytool_bin,
            &["-importcert", "-noprompt", "-trustcacerts", "-alias", alias, "-file", pem_file],
        )
        .await
    })
    .await?;

    info!(alias, truststore = %cfg.truststore, "certificate imported");
    seq.finish();
    println!("imported {pem_file} as '{alias}' into {}", cfg.truststore);
    Ok(())
}
