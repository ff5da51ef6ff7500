use assignment_service::bootstrap;
use assignment_service::config::Config;
use assignment_service::infrastructure::http::router::build_router;
use assignment_service::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    let _guard = observability::init(&config)?;
    tracing::info!(service = %config.service_name, "Configuration loaded");

    let db = bootstrap::connect_database(&config).await?;

    let state = bootstrap::build_app_state(db.clone());
    let app = build_router(state);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(bootstrap::shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
