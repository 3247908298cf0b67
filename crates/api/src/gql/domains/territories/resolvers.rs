use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::territories::types::{Territory, TerritoryStatus};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{publishers, territories, CheckoutError, TerritoryFilter};

#[derive(Default)]
pub struct TerritoryQuery;

#[Object]
impl TerritoryQuery {
    async fn territory(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Territory>> {
        let state = ctx.data::<AppState>()?;
        let row = territories::get_by_id(&state.db, id).await?;
        Ok(row.map(Territory::from))
    }

    async fn territories(
        &self,
        ctx: &Context<'_>,
        congregation_id: Option<Uuid>,
        status: Option<TerritoryStatus>,
    ) -> Result<Vec<Territory>> {
        let state = ctx.data::<AppState>()?;
        let filter = TerritoryFilter {
            congregation_id,
            checked_out: status.map(|s| s == TerritoryStatus::CheckedOut),
        };
        let rows = territories::list(&state.db, filter).await?;
        Ok(rows.into_iter().map(Territory::from).collect())
    }
}

/// Mutations owned by this module. Not merged into the root directly;
/// `MutationRoot` enumerates and delegates to them.
pub struct TerritoryMutation;

#[Object]
impl TerritoryMutation {
    pub async fn checkout_territory(
        &self,
        ctx: &Context<'_>,
        territory_id: Uuid,
        publisher_id: Uuid,
    ) -> Result<Territory> {
        let state = ctx.data::<AppState>()?;

        if publishers::get_by_id(&state.db, publisher_id).await?.is_none() {
            return Err(async_graphql::Error::new("Publisher not found"));
        }

        match territories::checkout(&state.db, territory_id, publisher_id).await {
            Ok(row) => {
                tracing::info!(%territory_id, %publisher_id, "territory checked out");
                Ok(row.into())
            }
            Err(CheckoutError::Db(e)) => Err(GqlError::from(e).into()),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }

    pub async fn checkin_territory(
        &self,
        ctx: &Context<'_>,
        territory_id: Uuid,
    ) -> Result<Territory> {
        let state = ctx.data::<AppState>()?;

        match territories::checkin(&state.db, territory_id).await {
            Ok(row) => {
                tracing::info!(%territory_id, "territory checked in");
                Ok(row.into())
            }
            Err(CheckoutError::Db(e)) => Err(GqlError::from(e).into()),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
