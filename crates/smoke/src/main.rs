use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attest_client::{ClientConfig, WhyApi, WhyApiError};
use attest_smoke::{run, ScenarioConfig, SmokeError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attest_smoke=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client_config = ClientConfig::from_env();
    let scenario_config = ScenarioConfig::from_env();
    tracing::info!(
        base_url = %client_config.base_url,
        user_id = scenario_config.user_id,
        "Starting WHY API smoke run"
    );

    let api = WhyApi::from_config(&client_config).expect("Failed to build HTTP client");

    match run(&api, &scenario_config).await {
        Ok(()) => {
            tracing::info!("Smoke run completed");
        }
        Err(SmokeError::Api(WhyApiError::Api { status, body })) => {
            tracing::error!(status, body = %body, "Server rejected a request");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "Smoke run aborted");
            std::process::exit(1);
        }
    }
}
