pub mod resolvers;
pub mod types;

pub use resolvers::{TerritoryMutation, TerritoryQuery};

use crate::gql::compose::ModuleManifest;

pub const MANIFEST: ModuleManifest = ModuleManifest {
    module: "territories",
    query_fields: &["territory", "territories"],
    mutation_fields: &["checkoutTerritory", "checkinTerritory"],
};
