use crate::domain::entities::{Assignment, AssignmentRequest};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::infrastructure::http::middleware::ApiResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct AssignmentService {
    assignment_repo: Arc<dyn AssignmentRepository>,
}

impl AssignmentService {
    pub fn new(assignment_repo: Arc<dyn AssignmentRepository>) -> Self {
        Self { assignment_repo }
    }

    /// Stores a new assignment. The store always allocates the id.
    pub async fn create(&self, request: AssignmentRequest) -> ApiResult<Assignment> {
        let assignment = Assignment::from(request);
        let created = self.assignment_repo.save(&assignment).await?;

        tracing::debug!(id = ?created.id, "Assignment created");
        Ok(created)
    }

    /// Overwrites all non-id fields of an existing assignment.
    ///
    /// Returns `None` when no assignment has that id. Concurrent updates are
    /// last-writer-wins.
    pub async fn update(
        &self,
        id: &str,
        request: AssignmentRequest,
    ) -> ApiResult<Option<Assignment>> {
        let Some(mut existing) = self.assignment_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        existing.apply(request);
        let updated = self.assignment_repo.save(&existing).await?;

        Ok(Some(updated))
    }

    /// Deletes an assignment after checking it exists. Returns whether a
    /// record was removed.
    pub async fn delete(&self, id: &str) -> ApiResult<bool> {
        if self.assignment_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.assignment_repo.delete_by_id(id).await?;
        Ok(true)
    }
}
