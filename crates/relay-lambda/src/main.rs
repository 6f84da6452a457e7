use std::sync::Arc;

use relay_generate::GenerationClient;
use relay_lambda::config::RelayConfig;
use relay_lambda::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = RelayConfig::from_env()?;
    tracing::info!(
        endpoint = %config.generation_url,
        timeout_secs = config.timeout.as_secs(),
        "starting chat relay"
    );

    let generator =
        GenerationClient::with_timeout(config.generation_url, config.sampling, config.timeout)?;

    let state = AppState::new(Arc::new(generator));

    lambda_http::run(relay_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
