use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::addresses::types::Address;
use crate::state::AppState;
use infra::repos::addresses;

#[derive(Default)]
pub struct AddressQuery;

#[Object]
impl AddressQuery {
    async fn address(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Address>> {
        let state = ctx.data::<AppState>()?;
        let row = addresses::get_by_id(&state.db, id).await?;
        Ok(row.map(Address::from))
    }

    async fn addresses(&self, ctx: &Context<'_>, territory_id: Uuid) -> Result<Vec<Address>> {
        let state = ctx.data::<AppState>()?;
        let rows = addresses::list_by_territory(&state.db, territory_id).await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }
}
