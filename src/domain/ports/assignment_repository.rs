use crate::domain::entities::Assignment;
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

/// Storage for assignments, keyed by an opaque id with lookups by consultant
/// and customer. Absence is reported as `None` or an empty list, never as an error.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Inserts when the record has no id yet, otherwise overwrites the row at
    /// that id. Returns the stored record with its id filled in.
    async fn save(&self, assignment: &Assignment) -> ApiResult<Assignment>;

    async fn find_by_id(&self, id: &str) -> ApiResult<Option<Assignment>>;

    async fn find_all(&self) -> ApiResult<Vec<Assignment>>;

    /// Exact, case-sensitive match on `consultant_id`.
    async fn find_by_consultant_id(&self, consultant_id: &str) -> ApiResult<Vec<Assignment>>;

    /// Exact, case-sensitive match on `customer_id`.
    async fn find_by_customer_id(&self, customer_id: &str) -> ApiResult<Vec<Assignment>>;

    async fn delete_by_id(&self, id: &str) -> ApiResult<()>;

    async fn delete_all(&self) -> ApiResult<()>;

    async fn count(&self) -> ApiResult<i64>;
}
