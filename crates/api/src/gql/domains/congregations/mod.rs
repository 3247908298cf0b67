pub mod resolvers;
pub mod types;

pub use resolvers::CongregationQuery;

use crate::gql::compose::ModuleManifest;

pub const MANIFEST: ModuleManifest = ModuleManifest {
    module: "congregations",
    query_fields: &["congregation", "congregations"],
    mutation_fields: &[],
};
