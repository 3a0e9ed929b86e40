mod config;
mod orchestrator;

use auth::ApiCredentials;
use config::DcaConfig;
use notifier::LineNotifier;
use orchestrator::RunError;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    common::init_logging();

    match start().await {
        Ok(report) => {
            info!(btc = ?report.btc, eth = ?report.eth, "DCA run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "DCA run failed");
            ExitCode::FAILURE
        }
    }
}

/// Resolve everything the run needs before placing any order.
async fn start() -> Result<orchestrator::RunReport, RunError> {
    let config = DcaConfig::from_env()?;
    let credentials = ApiCredentials::from_env()?;
    let mut client = client_factory::create_client(config.exchange, credentials)?;
    let notifier = LineNotifier::from_env()?;

    orchestrator::run(&config, client.as_mut(), &notifier).await
}
