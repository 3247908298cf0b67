use sqlx::{PgExecutor, Result as SqlxResult};
use thiserror::Error;
use uuid::Uuid;

use crate::models::TerritoryRow;

const COLUMNS: &str = "id, congregation_id, name, description, checked_out_to, checked_out_at, \
                       created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct TerritoryFilter {
    pub congregation_id: Option<Uuid>,
    /// `Some(true)` = only checked-out territories, `Some(false)` = only available.
    pub checked_out: Option<bool>,
}

/// Checkout state transitions that the guarded UPDATEs reject.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("territory {0} not found")]
    NotFound(Uuid),

    #[error("territory {0} is already checked out")]
    AlreadyCheckedOut(Uuid),

    #[error("territory {0} is not checked out")]
    NotCheckedOut(Uuid),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: TerritoryFilter,
) -> SqlxResult<Vec<TerritoryRow>> {
    sqlx::query_as::<_, TerritoryRow>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM territories
        WHERE ($1::uuid IS NULL OR congregation_id = $1)
          AND ($2::bool IS NULL OR (checked_out_to IS NOT NULL) = $2)
        ORDER BY name ASC
        "#
    ))
    .bind(filter.congregation_id)
    .bind(filter.checked_out)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TerritoryRow>> {
    sqlx::query_as::<_, TerritoryRow>(&format!(
        "SELECT {COLUMNS} FROM territories WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Hand a territory to a publisher. The `checked_out_to IS NULL` guard makes
/// the checked-in XOR checked-out invariant atomic: a concurrent checkout
/// loses the race and gets `AlreadyCheckedOut` instead of overwriting.
pub async fn checkout<'e>(
    executor: impl PgExecutor<'e> + Copy,
    territory_id: Uuid,
    publisher_id: Uuid,
) -> Result<TerritoryRow, CheckoutError> {
    let updated = sqlx::query_as::<_, TerritoryRow>(&format!(
        r#"
        UPDATE territories
        SET checked_out_to = $2, checked_out_at = NOW(), updated_at = NOW()
        WHERE id = $1 AND checked_out_to IS NULL
        RETURNING {COLUMNS}
        "#
    ))
    .bind(territory_id)
    .bind(publisher_id)
    .fetch_optional(executor)
    .await?;

    match updated {
        Some(row) => Ok(row),
        None => match get_by_id(executor, territory_id).await? {
            Some(_) => Err(CheckoutError::AlreadyCheckedOut(territory_id)),
            None => Err(CheckoutError::NotFound(territory_id)),
        },
    }
}

/// Return a territory to the available pool.
pub async fn checkin<'e>(
    executor: impl PgExecutor<'e> + Copy,
    territory_id: Uuid,
) -> Result<TerritoryRow, CheckoutError> {
    let updated = sqlx::query_as::<_, TerritoryRow>(&format!(
        r#"
        UPDATE territories
        SET checked_out_to = NULL, checked_out_at = NULL, updated_at = NOW()
        WHERE id = $1 AND checked_out_to IS NOT NULL
        RETURNING {COLUMNS}
        "#
    ))
    .bind(territory_id)
    .fetch_optional(executor)
    .await?;

    match updated {
        Some(row) => Ok(row),
        None => match get_by_id(executor, territory_id).await? {
            Some(_) => Err(CheckoutError::NotCheckedOut(territory_id)),
            None => Err(CheckoutError::NotFound(territory_id)),
        },
    }
}
