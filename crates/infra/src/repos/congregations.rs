use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::CongregationRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CongregationRow>> {
    sqlx::query_as::<_, CongregationRow>(
        r#"
        SELECT id, name, language, created_at, updated_at
        FROM congregations
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<CongregationRow>> {
    sqlx::query_as::<_, CongregationRow>(
        r#"
        SELECT id, name, language, created_at, updated_at
        FROM congregations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
