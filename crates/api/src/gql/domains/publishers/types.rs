use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::congregations::types::Congregation;
use crate::gql::error::ResultExt;
use crate::gql::loaders::CongregationLoader;
use infra::models::PublisherRow;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Publisher {
    pub id: ID,
    pub congregation_id: ID,
    pub username: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PublisherRow> for Publisher {
    fn from(row: PublisherRow) -> Self {
        Self {
            id: row.id.into(),
            congregation_id: row.congregation_id.into(),
            username: row.username,
            firstname: row.firstname,
            lastname: row.lastname,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Publisher {
    /// The congregation this publisher belongs to.
    async fn congregation(&self, ctx: &Context<'_>) -> Result<Congregation> {
        let loader = ctx.data::<DataLoader<CongregationLoader>>()?;
        let congregation_id = uuid::Uuid::parse_str(self.congregation_id.as_str())
            .gql_err("Invalid congregation ID")?;

        match loader
            .load_one(congregation_id)
            .await
            .gql_err("Loading congregation failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Congregation not found")),
        }
    }
}
