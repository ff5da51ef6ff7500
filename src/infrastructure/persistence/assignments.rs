use crate::domain::entities::Assignment;
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row, ValueRef};

const SELECT_COLUMNS: &str = "SELECT id, consultant_id, customer_id, start_date, end_date
     FROM assignments";

fn encode_date(date: &Option<DateTime<Utc>>) -> Option<String> {
    date.as_ref().map(|d| d.to_rfc3339())
}

fn decode_date(raw: Option<String>) -> ApiResult<Option<DateTime<Utc>>> {
    raw.map(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| ApiError::Internal(format!("Stored date '{}' is invalid: {}", s, e)))
    })
    .transpose()
}

// The Any driver refuses to decode a NULL column into Option<String>, so
// check for NULL before decoding.
fn nullable_text(row: &AnyRow, column: &str) -> ApiResult<Option<String>> {
    if row.try_get_raw(column)?.is_null() {
        return Ok(None);
    }
    Ok(Some(row.try_get::<String, _>(column)?))
}

fn assignment_from_row(row: &AnyRow) -> ApiResult<Assignment> {
    Ok(Assignment {
        id: Some(row.try_get("id")?),
        consultant_id: nullable_text(row, "consultant_id")?,
        customer_id: nullable_text(row, "customer_id")?,
        start_date: decode_date(nullable_text(row, "start_date")?)?,
        end_date: decode_date(nullable_text(row, "end_date")?)?,
    })
}

fn assignments_from_rows(rows: &[AnyRow]) -> ApiResult<Vec<Assignment>> {
    rows.iter().map(assignment_from_row).collect()
}

#[async_trait]
impl AssignmentRepository for Database {
    async fn save(&self, assignment: &Assignment) -> ApiResult<Assignment> {
        let mut stored = assignment.clone();
        if !stored.is_persisted() {
            stored.id = Some(uuid::Uuid::new_v4().to_string());
        }

        sqlx::query(
            "INSERT INTO assignments (id, consultant_id, customer_id, start_date, end_date)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                consultant_id = excluded.consultant_id,
                customer_id = excluded.customer_id,
                start_date = excluded.start_date,
                end_date = excluded.end_date",
        )
        .bind(stored.id.clone())
        .bind(stored.consultant_id.clone())
        .bind(stored.customer_id.clone())
        .bind(encode_date(&stored.start_date))
        .bind(encode_date(&stored.end_date))
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> ApiResult<Option<Assignment>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(assignment_from_row).transpose()
    }

    async fn find_all(&self) -> ApiResult<Vec<Assignment>> {
        let rows = sqlx::query(SELECT_COLUMNS).fetch_all(&self.pool).await?;
        assignments_from_rows(&rows)
    }

    async fn find_by_consultant_id(&self, consultant_id: &str) -> ApiResult<Vec<Assignment>> {
        let rows = sqlx::query(&format!("{} WHERE consultant_id = ?", SELECT_COLUMNS))
            .bind(consultant_id)
            .fetch_all(&self.pool)
            .await?;

        assignments_from_rows(&rows)
    }

    async fn find_by_customer_id(&self, customer_id: &str) -> ApiResult<Vec<Assignment>> {
        let rows = sqlx::query(&format!("{} WHERE customer_id = ?", SELECT_COLUMNS))
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await?;

        assignments_from_rows(&rows)
    }

    async fn delete_by_id(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> ApiResult<()> {
        sqlx::query("DELETE FROM assignments")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM assignments")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }
}
