use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::publishers::types::Publisher;
use crate::gql::domains::territories::types::{Territory, TerritoryStatus};
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::models::CongregationRow;
use infra::repos::{publishers, territories, PublisherFilter, TerritoryFilter};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Congregation {
    pub id: ID,
    pub name: String,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CongregationRow> for Congregation {
    fn from(row: CongregationRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            language: row.language,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Congregation {
    /// Territories owned by this congregation, optionally filtered by status.
    async fn territories(
        &self,
        ctx: &Context<'_>,
        status: Option<TerritoryStatus>,
    ) -> Result<Vec<Territory>> {
        let state = ctx.data::<AppState>()?;
        let congregation_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid congregation ID")?;

        let filter = TerritoryFilter {
            congregation_id: Some(congregation_id),
            checked_out: status.map(|s| s == TerritoryStatus::CheckedOut),
        };
        let rows = territories::list(&state.db, filter).await?;
        Ok(rows.into_iter().map(Territory::from).collect())
    }

    /// Publishers belonging to this congregation.
    async fn publishers(&self, ctx: &Context<'_>) -> Result<Vec<Publisher>> {
        let state = ctx.data::<AppState>()?;
        let congregation_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid congregation ID")?;

        let filter = PublisherFilter {
            congregation_id: Some(congregation_id),
            is_active: None,
        };
        let rows = publishers::list(&state.db, filter, None).await?;
        Ok(rows.into_iter().map(Publisher::from).collect())
    }
}
