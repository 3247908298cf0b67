use std::env;

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::compose::{self, ComposeError};
use super::domains;
use super::loaders::{CongregationLoader, PublisherLoader, TerritoryLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the GraphQL schema and inject shared state (AppState) into the context.
///
/// The domain manifests are validated first: a root-field collision or a
/// mutation surface mismatch returns a `ComposeError` and the process must
/// not come up. Composition runs once; the returned schema is immutable and
/// safe for unlimited concurrent use.
pub fn build_schema(state: AppState) -> Result<AppSchema, ComposeError> {
    compose::validate(&domains::manifests())?;

    let congregation_loader =
        DataLoader::new(CongregationLoader::new(state.db.clone()), tokio::spawn);
    let publisher_loader = DataLoader::new(PublisherLoader::new(state.db.clone()), tokio::spawn);
    let territory_loader = DataLoader::new(TerritoryLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v == "true")
        .unwrap_or(false);

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(congregation_loader)
    .data(publisher_loader)
    .data(territory_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    Ok(builder.finish())
}
