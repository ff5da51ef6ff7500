use crate::application::services::AssignmentService;
use crate::config::Config;
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

/// Opens the pool and brings the schema up to date.
pub async fn connect_database(config: &Config) -> Result<Database, sqlx::Error> {
    let db = Database::connect(
        &config.database_url,
        config.database_max_connections,
        config.database_min_connections,
    )
    .await?;
    tracing::info!("Database connection established");

    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

pub fn build_app_state(db: Database) -> AppState {
    let assignment_repo = Arc::new(db.clone()) as Arc<dyn AssignmentRepository>;
    let assignment_service = AssignmentService::new(assignment_repo.clone());
    tracing::info!("Assignment service initialized");

    AppState {
        db,
        assignment_repo,
        assignment_service,
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
