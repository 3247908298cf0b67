pub mod resolvers;
pub mod types;

pub use resolvers::{ActivityLogMutation, ActivityLogQuery};

use crate::gql::compose::ModuleManifest;

pub const MANIFEST: ModuleManifest = ModuleManifest {
    module: "activity_logs",
    query_fields: &["activityLog", "activityLogs"],
    mutation_fields: &["addLog", "updateLog", "removeLog"],
};
