use crate::infrastructure::http::controllers::{assignments, health};
use crate::infrastructure::http::middleware::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/assignments", get(assignments::list_assignments))
        .route("/assignments", post(assignments::create_assignment))
        .route("/assignments/:id", get(assignments::get_assignment))
        .route("/assignments/:id", put(assignments::update_assignment))
        .route("/assignments/:id", delete(assignments::delete_assignment))
        // Legacy flat lookup paths
        .route(
            "/assignmentsbycid/:consultant_id",
            get(assignments::list_assignments_by_consultant),
        )
        .route(
            "/assignmentsbycuid/:customer_id",
            get(assignments::list_assignments_by_customer),
        )
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
