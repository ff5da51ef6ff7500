pub mod error;

pub use error::*;

use crate::application::services::AssignmentService;
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

/// Process-scoped handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub assignment_repo: Arc<dyn AssignmentRepository>,
    pub assignment_service: AssignmentService,
}
