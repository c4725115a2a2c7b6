use feiertage_wrapper::bootstrap;
use feiertage_wrapper::config::Config;
use feiertage_wrapper::infrastructure::http::router::build_router;
use feiertage_wrapper::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    observability::init(&config)?;
    tracing::info!("Configuration loaded");

    let state = bootstrap::build_app_state(&config)?;
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
