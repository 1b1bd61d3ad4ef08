use anyhow::Result;

use helpermatch_web::services::WorkerApiClient;
use helpermatch_web::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration; a missing WORKER_API_URL aborts here, before any
    // request can be served
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting HelperMatch profile web"
    );

    // Create worker API client
    let worker_api = WorkerApiClient::new(&settings.worker_api_url)?;

    // Create application state
    let state = app::AppState::new(settings.clone(), worker_api);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
