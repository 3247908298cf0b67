use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PublisherRow;
use crate::pagination::LimitOffset;

const COLUMNS: &str =
    "id, congregation_id, username, firstname, lastname, is_active, created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct PublisherFilter {
    pub congregation_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: PublisherFilter,
    page: Option<LimitOffset>,
) -> SqlxResult<Vec<PublisherRow>> {
    let page = page.unwrap_or_default();
    sqlx::query_as::<_, PublisherRow>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM publishers
        WHERE ($1::uuid IS NULL OR congregation_id = $1)
          AND ($2::bool IS NULL OR is_active = $2)
        ORDER BY lastname ASC, firstname ASC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(filter.congregation_id)
    .bind(filter.is_active)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<PublisherRow>> {
    sqlx::query_as::<_, PublisherRow>(&format!(
        "SELECT {COLUMNS} FROM publishers WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_username<'e>(
    executor: impl PgExecutor<'e>,
    username: &str,
) -> SqlxResult<Option<PublisherRow>> {
    sqlx::query_as::<_, PublisherRow>(&format!(
        "SELECT {COLUMNS} FROM publishers WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(executor)
    .await
}

/// Name lookup used by the `publisher(firstname, lastname)` root query.
/// Either component may be omitted; the first match in list order wins.
pub async fn find_by_name<'e>(
    executor: impl PgExecutor<'e>,
    firstname: Option<&str>,
    lastname: Option<&str>,
) -> SqlxResult<Option<PublisherRow>> {
    sqlx::query_as::<_, PublisherRow>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM publishers
        WHERE ($1::text IS NULL OR firstname ILIKE $1)
          AND ($2::text IS NULL OR lastname ILIKE $2)
        ORDER BY lastname ASC, firstname ASC
        LIMIT 1
        "#
    ))
    .bind(firstname)
    .bind(lastname)
    .fetch_optional(executor)
    .await
}
