use async_graphql::dataloader::Loader;
use infra::db::Db;
use infra::models::{CongregationRow, PublisherRow, TerritoryRow};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

#[derive(Clone)]
pub struct CongregationLoader {
    pool: Db,
}

impl CongregationLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for CongregationLoader {
    type Value = CongregationRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<CongregationRow> = sqlx::query_as::<_, CongregationRow>(
                r#"
                SELECT id, name, language, created_at, updated_at
                FROM congregations
                WHERE id = ANY($1::uuid[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// PublisherLoader - batch load publishers by ID
#[derive(Clone)]
pub struct PublisherLoader {
    pool: Db,
}

impl PublisherLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for PublisherLoader {
    type Value = PublisherRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<PublisherRow> = sqlx::query_as::<_, PublisherRow>(
                r#"
                SELECT id, congregation_id, username, firstname, lastname,
                       is_active, created_at, updated_at
                FROM publishers
                WHERE id = ANY($1::uuid[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// TerritoryLoader - batch load territories by ID
#[derive(Clone)]
pub struct TerritoryLoader {
    pool: Db,
}

impl TerritoryLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for TerritoryLoader {
    type Value = TerritoryRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<TerritoryRow> = sqlx::query_as::<_, TerritoryRow>(
                r#"
                SELECT id, congregation_id, name, description,
                       checked_out_to, checked_out_at, created_at, updated_at
                FROM territories
                WHERE id = ANY($1::uuid[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
