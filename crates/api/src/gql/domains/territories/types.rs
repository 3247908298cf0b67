use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::addresses::types::Address;
use crate::gql::domains::congregations::types::Congregation;
use crate::gql::domains::publishers::types::Publisher;
use crate::gql::error::ResultExt;
use crate::gql::loaders::{CongregationLoader, PublisherLoader};
use crate::state::AppState;
use infra::models::TerritoryRow;
use infra::repos::addresses;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum TerritoryStatus {
    Available,
    CheckedOut,
}

impl From<&TerritoryRow> for TerritoryStatus {
    fn from(row: &TerritoryRow) -> Self {
        if row.is_checked_out() {
            TerritoryStatus::CheckedOut
        } else {
            TerritoryStatus::Available
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Territory {
    pub id: ID,
    pub congregation_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub status: TerritoryStatus, // Derived from the checkout columns, never stored
    pub checked_out_at: Option<DateTime<Utc>>,
    #[graphql(skip)]
    pub checked_out_to: Option<ID>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TerritoryRow> for Territory {
    fn from(row: TerritoryRow) -> Self {
        let status = TerritoryStatus::from(&row);
        Self {
            id: row.id.into(),
            congregation_id: row.congregation_id.into(),
            name: row.name,
            description: row.description,
            status,
            checked_out_at: row.checked_out_at,
            checked_out_to: row.checked_out_to.map(|id| id.into()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Territory {
    /// Addresses inside this territory.
    async fn addresses(&self, ctx: &Context<'_>) -> Result<Vec<Address>> {
        let state = ctx.data::<AppState>()?;
        let territory_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid territory ID")?;

        let rows = addresses::list_by_territory(&state.db, territory_id).await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }

    /// The publisher currently holding this territory, if checked out.
    async fn publisher(&self, ctx: &Context<'_>) -> Result<Option<Publisher>> {
        let Some(holder_id) = &self.checked_out_to else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<PublisherLoader>>()?;
        let publisher_id =
            uuid::Uuid::parse_str(holder_id.as_str()).gql_err("Invalid publisher ID")?;

        let row = loader
            .load_one(publisher_id)
            .await
            .gql_err("Loading publisher failed")?;
        Ok(row.map(Publisher::from))
    }

    /// The congregation that owns this territory.
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
