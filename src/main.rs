mod cli;
mod commands;
mod config;
mod report;
mod workflow;

use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use workflow::StepFailure;

// One operator command at a time; nothing runs concurrently.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logging: defaults to info, override with RUST_LOG=debug for request detail.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap prints help and version itself; those are not failures
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match commands::dispatch(cli, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // a step failure already names its cause
            if e.downcast_ref::<StepFailure>().is_some() {
                error!("{e}");
            } else {
                error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
