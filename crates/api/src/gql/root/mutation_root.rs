use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::domains::activity_logs::resolvers::ActivityLogMutation;
use crate::gql::domains::activity_logs::types::{
    ActivityLog, ActivityLogInput, UpdateActivityLogInput,
};
use crate::gql::domains::territories::resolvers::TerritoryMutation;
use crate::gql::domains::territories::types::Territory;

/// Root mutation object.
///
/// Unlike the query root this is not a merged object: every exposed mutation
/// is enumerated here and bound to exactly one domain module, so a module
/// cannot grow the mutation surface by accident. The enumeration must match
/// `compose::MUTATION_SURFACE`, which `build_schema` verifies against the
/// domain manifests.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Check a territory out to a publisher.
    async fn checkout_territory(
        &self,
        ctx: &Context<'_>,
        territory_id: Uuid,
        publisher_id: Uuid,
    ) -> Result<Territory> {
        TerritoryMutation
            .checkout_territory(ctx, territory_id, publisher_id)
            .await
    }

    /// Return a checked-out territory to the available pool.
    async fn checkin_territory(&self, ctx: &Context<'_>, territory_id: Uuid) -> Result<Territory> {
        TerritoryMutation.checkin_territory(ctx, territory_id).await
    }

    /// Record a visit attempt at an address.
    async fn add_log(&self, ctx: &Context<'_>, input: ActivityLogInput) -> Result<ActivityLog> {
        ActivityLogMutation.add_log(ctx, input).await
    }

    /// Amend an existing activity log entry.
    async fn update_log(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateActivityLogInput,
    ) -> Result<ActivityLog> {
        ActivityLogMutation.update_log(ctx, id, input).await
    }

    /// Delete an activity log entry; returns the removed entry's id.
    async fn remove_log(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        ActivityLogMutation.remove_log(ctx, id).await
    }
}
