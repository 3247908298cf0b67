use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::AddressRow;

const COLUMNS: &str = "id, territory_id, addr1, addr2, city, state_province, postal_code, \
                       phone, latitude, longitude, notes, created_at, updated_at";

pub async fn list_by_territory<'e>(
    executor: impl PgExecutor<'e>,
    territory_id: Uuid,
) -> SqlxResult<Vec<AddressRow>> {
    sqlx::query_as::<_, AddressRow>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM addresses
        WHERE territory_id = $1
        ORDER BY city ASC, addr1 ASC
        "#
    ))
    .bind(territory_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<AddressRow>> {
    sqlx::query_as::<_, AddressRow>(&format!("SELECT {COLUMNS} FROM addresses WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}
