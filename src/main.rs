use survey_core::{CoreConfig, SurveyService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Surveylytic dashboard server
///
/// Serves the REST API and its Swagger UI on `SURVEY_REST_ADDR`.
///
/// # Environment Variables
/// - `SURVEY_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SURVEY_MOCK_DELAY_MS`: simulated latency of the mock data source (default: 1000)
/// - `SURVEY_PREVIEW_MODE`: accept submissions without forwarding them (default: false)
/// - `SURVEY_RESPONSES_FILE`: serve responses from a JSON file instead of the mock
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("surveylytic_run=info".parse()?)
                .add_directive("survey_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env()?;
    let service = SurveyService::new(&cfg);

    tracing::info!(
        "++ Starting Surveylytic REST on {} (source: {}, preview: {})",
        cfg.rest_addr(),
        service.source_name(),
        service.preview_mode()
    );

    let app = api_rest::router(service);
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
