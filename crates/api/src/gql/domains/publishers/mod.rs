pub mod resolvers;
pub mod types;

pub use resolvers::PublisherQuery;

use crate::gql::compose::ModuleManifest;

pub const MANIFEST: ModuleManifest = ModuleManifest {
    module: "publishers",
    query_fields: &["user", "publisher", "publishers"],
    mutation_fields: &[],
};
