use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::congregations::types::Congregation;
use crate::state::AppState;
use infra::repos::congregations;

#[derive(Default)]
pub struct CongregationQuery;

#[Object]
impl CongregationQuery {
    async fn congregation(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Congregation>> {
        let state = ctx.data::<AppState>()?;
        let row = congregations::get_by_id(&state.db, id).await?;
        Ok(row.map(Congregation::from))
    }

    async fn congregations(&self, ctx: &Context<'_>) -> Result<Vec<Congregation>> {
        let state = ctx.data::<AppState>()?;
        let rows = congregations::list(&state.db).await?;
        Ok(rows.into_iter().map(Congregation::from).collect())
    }
}
