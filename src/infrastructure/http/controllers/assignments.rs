use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::entities::{Assignment, AssignmentRequest},
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

fn record_request(operation: &'static str) {
    metrics::counter!("assignment_requests_total", "operation" => operation).increment(1);
}

/// Deserializes the request body. An empty body is a malformed request.
fn parse_body(body: &Bytes) -> ApiResult<AssignmentRequest> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(ApiError::BadRequest("Request body is required".to_string()));
    }
    Ok(serde_json::from_slice(body)?)
}

// GET /assignments
pub async fn list_assignments(State(state): State<AppState>) -> ApiResult<Json<Vec<Assignment>>> {
    record_request("list");
    let assignments = state.assignment_repo.find_all().await?;
    tracing::info!(
        count = assignments.len(),
        "/assignments list_assignments called"
    );
    Ok(Json(assignments))
}

// GET /assignments/:id
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Assignment>> {
    record_request("get");
    tracing::info!(%id, "/assignments get_assignment called");
    let assignment = state
        .assignment_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Assignment {} not found", id)))?;
    Ok(Json(assignment))
}

// POST /assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Assignment>> {
    record_request("create");
    tracing::info!("/assignments create_assignment called");
    let request = parse_body(&body)?;
    let created = state.assignment_service.create(request).await?;
    Ok(Json(created))
}

// PUT /assignments/:id
//
// A missing id answers 400, not 404, matching the established contract for
// writes.
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Assignment>> {
    record_request("update");
    tracing::info!(%id, "/assignments update_assignment called");
    let request = parse_body(&body)?;
    let updated = state
        .assignment_service
        .update(&id, request)
        .await?
        .ok_or_else(|| ApiError::BadRequest(format!("Assignment {} does not exist", id)))?;
    Ok(Json(updated))
}

// DELETE /assignments/:id
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    record_request("delete");
    tracing::info!(%id, "/assignments delete_assignment called");
    if !state.assignment_service.delete(&id).await? {
        return Err(ApiError::BadRequest(format!(
            "Assignment {} does not exist",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

// GET /assignmentsbycid/:consultant_id
pub async fn list_assignments_by_consultant(
    State(state): State<AppState>,
    Path(consultant_id): Path<String>,
) -> ApiResult<Json<Vec<Assignment>>> {
    record_request("list_by_consultant");
    let assignments = state
        .assignment_repo
        .find_by_consultant_id(&consultant_id)
        .await?;
    tracing::info!(
        %consultant_id,
        count = assignments.len(),
        "/assignmentsbycid list_assignments_by_consultant called"
    );
    Ok(Json(assignments))
}

// GET /assignmentsbycuid/:customer_id
pub async fn list_assignments_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<Json<Vec<Assignment>>> {
    record_request("list_by_customer");
    let assignments = state
        .assignment_repo
        .find_by_customer_id(&customer_id)
        .await?;
    tracing::info!(
        %customer_id,
        count = assignments.len(),
        "/assignmentsbycuid list_assignments_by_customer called"
    );
    Ok(Json(assignments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_rejects_empty_and_blank() {
        assert!(matches!(
            parse_body(&Bytes::new()),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_body(&Bytes::from_static(b"  \n")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        assert!(matches!(
            parse_body(&Bytes::from_static(b"{not json")),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_body(&Bytes::from_static(b"null")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_body_accepts_partial_record() {
        let request = parse_body(&Bytes::from_static(br#"{"consultantId":"c1"}"#)).unwrap();
        assert_eq!(request.consultant_id.as_deref(), Some("c1"));
        assert!(request.customer_id.is_none());
    }
}
