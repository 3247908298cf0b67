use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::publishers::types::Publisher;
use crate::state::AppState;
use infra::pagination::LimitOffset;
use infra::repos::{publishers, PublisherFilter};

#[derive(Default)]
pub struct PublisherQuery;

#[Object]
impl PublisherQuery {
    /// Look up a publisher by login name.
    async fn user(&self, ctx: &Context<'_>, username: Option<String>) -> Result<Option<Publisher>> {
        let Some(username) = username else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;
        let row = publishers::get_by_username(&state.db, &username).await?;
        Ok(row.map(Publisher::from))
    }

    /// Look up a publisher by name; either component may be omitted.
    async fn publisher(
        &self,
        ctx: &Context<'_>,
        firstname: Option<String>,
        lastname: Option<String>,
    ) -> Result<Option<Publisher>> {
        if firstname.is_none() && lastname.is_none() {
            return Ok(None);
        }
        let state = ctx.data::<AppState>()?;
        let row =
            publishers::find_by_name(&state.db, firstname.as_deref(), lastname.as_deref()).await?;
        Ok(row.map(Publisher::from))
    }

    async fn publishers(
        &self,
        ctx: &Context<'_>,
        congregation_id: Option<Uuid>,
        is_active: Option<bool>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Publisher>> {
        let state = ctx.data::<AppState>()?;
        let filter = PublisherFilter {
            congregation_id,
            is_active,
        };
        let page = Some(LimitOffset {
            limit: limit.unwrap_or(50).clamp(1, 200),
            offset: offset.unwrap_or(0).max(0),
        });
        let rows = publishers::list(&state.db, filter, page).await?;
        Ok(rows.into_iter().map(Publisher::from).collect())
    }
}
