use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ActivityLogRow;

const COLUMNS: &str =
    "id, address_id, publisher_id, value, notes, logged_at, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub address_id: Uuid,
    pub publisher_id: Uuid,
    pub value: String,
    pub notes: Option<String>,
    /// Defaults to NOW() when absent.
    pub logged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateActivityLog {
    pub value: Option<String>,
    pub notes: Option<String>,
}

/// List log entries for an address, newest first.
pub async fn list_by_address<'e>(
    executor: impl PgExecutor<'e>,
    address_id: Uuid,
    limit: i64,
    offset: i64,
) -> SqlxResult<Vec<ActivityLogRow>> {
    sqlx::query_as::<_, ActivityLogRow>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM activity_logs
        WHERE address_id = $1
        ORDER BY logged_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(address_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count_by_address<'e>(
    executor: impl PgExecutor<'e>,
    address_id: Uuid,
) -> SqlxResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activity_logs WHERE address_id = $1")
        .bind(address_id)
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ActivityLogRow>> {
    sqlx::query_as::<_, ActivityLogRow>(&format!(
        "SELECT {COLUMNS} FROM activity_logs WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    log: NewActivityLog,
) -> SqlxResult<ActivityLogRow> {
    sqlx::query_as::<_, ActivityLogRow>(&format!(
        r#"
        INSERT INTO activity_logs (address_id, publisher_id, value, notes, logged_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
        RETURNING {COLUMNS}
        "#
    ))
    .bind(log.address_id)
    .bind(log.publisher_id)
    .bind(log.value)
    .bind(log.notes)
    .bind(log.logged_at)
    .fetch_one(executor)
    .await
}

/// Update an entry's value/notes; absent fields are left untouched.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    changes: UpdateActivityLog,
) -> SqlxResult<Option<ActivityLogRow>> {
    sqlx::query_as::<_, ActivityLogRow>(&format!(
        r#"
        UPDATE activity_logs
        SET value = COALESCE($2, value),
            notes = COALESCE($3, notes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(changes.value)
    .bind(changes.notes)
    .fetch_optional(executor)
    .await
}

/// Delete an entry; returns the removed row's id when it existed.
pub async fn remove<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<Uuid>> {
    let row: Option<(Uuid,)> = sqlx::query_as("DELETE FROM activity_logs WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(|(id,)| id))
}
