use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::common::types::PaginationInput;
use crate::gql::domains::activity_logs::types::{
    ActivityLog, ActivityLogInput, ActivityLogPage, UpdateActivityLogInput,
};
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{activity_logs, addresses, publishers, NewActivityLog, UpdateActivityLog};

#[derive(Default)]
pub struct ActivityLogQuery;

#[Object]
impl ActivityLogQuery {
    async fn activity_log(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<ActivityLog>> {
        let state = ctx.data::<AppState>()?;
        let row = activity_logs::get_by_id(&state.db, id).await?;
        Ok(row.map(ActivityLog::from))
    }

    /// Visit history for an address, newest first, with pagination.
    async fn activity_logs(
        &self,
        ctx: &Context<'_>,
        address_id: Uuid,
        pagination: Option<PaginationInput>,
    ) -> Result<ActivityLogPage> {
        let state = ctx.data::<AppState>()?;
        let page = pagination.unwrap_or_default().to_limit_offset();

        let (rows, total_count) = tokio::try_join!(
            activity_logs::list_by_address(&state.db, address_id, page.limit, page.offset),
            activity_logs::count_by_address(&state.db, address_id)
        )
        .gql_err("Database operation failed")?;

        let items: Vec<ActivityLog> = rows.into_iter().map(ActivityLog::from).collect();
        let page_size = items.len() as i32;
        let offset = page.offset as i32;
        let has_next_page = (offset + page_size) < total_count as i32;

        Ok(ActivityLogPage {
            items,
            total_count: total_count as i32,
            page_size,
            offset,
            has_next_page,
        })
    }
}

/// Mutations owned by this module; `MutationRoot` enumerates and delegates.
pub struct ActivityLogMutation;

#[Object]
impl ActivityLogMutation {
    pub async fn add_log(&self, ctx: &Context<'_>, input: ActivityLogInput) -> Result<ActivityLog> {
        let state = ctx.data::<AppState>()?;

        let address_id =
            Uuid::parse_str(input.address_id.as_str()).gql_err("Invalid address ID")?;
        let publisher_id =
            Uuid::parse_str(input.publisher_id.as_str()).gql_err("Invalid publisher ID")?;

        if addresses::get_by_id(&state.db, address_id).await?.is_none() {
            return Err(async_graphql::Error::new("Address not found"));
        }
        if publishers::get_by_id(&state.db, publisher_id).await?.is_none() {
            return Err(async_graphql::Error::new("Publisher not found"));
        }

        let row = activity_logs::create(
            &state.db,
            NewActivityLog {
                address_id,
                publisher_id,
                value: input.value,
                notes: input.notes,
                logged_at: input.timestamp,
            },
        )
        .await?;

        Ok(ActivityLog::from(row))
    }

    pub async fn update_log(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateActivityLogInput,
    ) -> Result<ActivityLog> {
        let state = ctx.data::<AppState>()?;
        let log_id = Uuid::parse_str(id.as_str()).gql_err("Invalid log ID")?;

        let row = activity_logs::update(
            &state.db,
            log_id,
            UpdateActivityLog {
                value: input.value,
                notes: input.notes,
            },
        )
        .await?
        .ok_or_else(|| async_graphql::Error::new("Activity log not found"))?;

        Ok(ActivityLog::from(row))
    }

    pub async fn remove_log(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let state = ctx.data::<AppState>()?;
        let log_id = Uuid::parse_str(id.as_str()).gql_err("Invalid log ID")?;

        let removed = activity_logs::remove(&state.db, log_id)
            .await?
            .ok_or_else(|| async_graphql::Error::new("Activity log not found"))?;

        Ok(removed.into())
    }
}
