pub mod resolvers;
pub mod types;

pub use resolvers::AddressQuery;

use crate::gql::compose::ModuleManifest;

pub const MANIFEST: ModuleManifest = ModuleManifest {
    module: "addresses",
    query_fields: &["address", "addresses"],
    mutation_fields: &[],
};
