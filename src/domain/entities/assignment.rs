use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consultant placed at a customer over a date range.
///
/// `id` is allocated by the persistence layer on first save and never changes
/// afterwards. No ordering is enforced between `start_date` and `end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub consultant_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn new(
        consultant_id: impl Into<String>,
        customer_id: impl Into<String>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: None,
            consultant_id: Some(consultant_id.into()),
            customer_id: Some(customer_id.into()),
            start_date,
            end_date,
        }
    }

    /// True once the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Overwrites every non-id field from the request. No partial update.
    pub fn apply(&mut self, request: AssignmentRequest) {
        self.consultant_id = request.consultant_id;
        self.customer_id = request.customer_id;
        self.start_date = request.start_date;
        self.end_date = request.end_date;
    }
}

/// Request body for create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    #[serde(default)]
    pub consultant_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl From<AssignmentRequest> for Assignment {
    fn from(request: AssignmentRequest) -> Self {
        Self {
            id: None,
            consultant_id: request.consultant_id,
            customer_id: request.customer_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}
