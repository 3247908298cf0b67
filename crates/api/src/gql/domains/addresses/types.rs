use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::common::types::PaginationInput;
use crate::gql::domains::activity_logs::types::ActivityLog;
use crate::gql::domains::territories::types::Territory;
use crate::gql::error::ResultExt;
use crate::gql::loaders::TerritoryLoader;
use crate::state::AppState;
use infra::models::AddressRow;
use infra::repos::activity_logs;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Address {
    pub id: ID,
    pub territory_id: ID,
    pub addr1: String,
    pub addr2: Option<String>,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id.into(),
            territory_id: row.territory_id.into(),
            addr1: row.addr1,
            addr2: row.addr2,
            city: row.city,
            state_province: row.state_province,
            postal_code: row.postal_code,
            phone: row.phone,
            latitude: row.latitude,
            longitude: row.longitude,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Address {
    /// The territory this address belongs to.
    async fn territory(&self, ctx: &Context<'_>) -> Result<Territory> {
        let loader = ctx.data::<DataLoader<TerritoryLoader>>()?;
        let territory_id =
            uuid::Uuid::parse_str(self.territory_id.as_str()).gql_err("Invalid territory ID")?;

        match loader
            .load_one(territory_id)
            .await
            .gql_err("Loading territory failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Territory not found")),
        }
    }

    /// Visit history for this address, newest first.
    async fn activity_logs(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Vec<ActivityLog>> {
        let state = ctx.data::<AppState>()?;
        let address_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid address ID")?;

        let page = pagination.unwrap_or_default().to_limit_offset();
        let rows =
            activity_logs::list_by_address(&state.db, address_id, page.limit, page.offset).await?;
        Ok(rows.into_iter().map(ActivityLog::from).collect())
    }
}
