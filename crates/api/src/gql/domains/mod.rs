// One module per entity: mod.rs (manifest), resolvers.rs, types.rs.
// Only the composer correlates modules, by root field name.

pub mod activity_logs;
pub mod addresses;
pub mod congregations;
pub mod publishers;
pub mod territories;

use crate::gql::compose::ModuleManifest;

/// Manifests of every registered domain module, in composition order.
pub fn manifests() -> [ModuleManifest; 5] {
    [
        publishers::MANIFEST,
        congregations::MANIFEST,
        territories::MANIFEST,
        addresses::MANIFEST,
        activity_logs::MANIFEST,
    ]
}
