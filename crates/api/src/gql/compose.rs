//! Schema composition checks.
//!
//! Every domain module under [`crate::gql::domains`] declares a manifest of
//! the root fields it contributes. Before the executable schema is built,
//! the manifests are merged with an explicit collision check: two modules
//! claiming the same root-query field is a configuration error that aborts
//! startup, never a silent overwrite. The mutation surface is stricter
//! still — an allowlist of exactly the fields [`crate::gql::MutationRoot`]
//! enumerates, each claimed by exactly one module.

use std::collections::HashMap;

use thiserror::Error;

/// Root fields a domain module contributes to the composed schema.
/// Field names are the exposed (camelCase) GraphQL names.
#[derive(Debug, Clone, Copy)]
pub struct ModuleManifest {
    pub module: &'static str,
    pub query_fields: &'static [&'static str],
    pub mutation_fields: &'static [&'static str],
}

/// The complete mutation surface. `MutationRoot` enumerates these and
/// nothing else; `verify_mutation_surface` keeps the manifests honest.
pub const MUTATION_SURFACE: [&str; 5] = [
    "checkoutTerritory",
    "checkinTerritory",
    "addLog",
    "updateLog",
    "removeLog",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("root query field `{field}` is declared by both `{first}` and `{second}`")]
    QueryFieldCollision {
        field: String,
        first: String,
        second: String,
    },

    #[error("mutation `{field}` is claimed by both `{first}` and `{second}`")]
    MutationCollision {
        field: String,
        first: String,
        second: String,
    },

    #[error("module `{module}` declares mutation `{field}`, which is not part of the exposed mutation surface")]
    UndeclaredMutation { module: String, field: String },

    #[error("mutation `{field}` is exposed but no module claims it")]
    UnboundMutation { field: String },
}

/// Merge the root-query fields of all modules into one table, failing on the
/// first duplicate. Returns field -> owning module.
pub fn merge_query_fields(
    manifests: &[ModuleManifest],
) -> Result<HashMap<&'static str, &'static str>, ComposeError> {
    let mut merged: HashMap<&'static str, &'static str> = HashMap::new();
    for manifest in manifests {
        for &field in manifest.query_fields {
            if let Some(&first) = merged.get(field) {
                return Err(ComposeError::QueryFieldCollision {
                    field: field.to_string(),
                    first: first.to_string(),
                    second: manifest.module.to_string(),
                });
            }
            merged.insert(field, manifest.module);
        }
    }
    Ok(merged)
}

/// Check that the union of declared mutation fields is exactly
/// [`MUTATION_SURFACE`], each field claimed by one module.
pub fn verify_mutation_surface(manifests: &[ModuleManifest]) -> Result<(), ComposeError> {
    let mut claimed: HashMap<&'static str, &'static str> = HashMap::new();
    for manifest in manifests {
        for &field in manifest.mutation_fields {
            if !MUTATION_SURFACE.contains(&field) {
                return Err(ComposeError::UndeclaredMutation {
                    module: manifest.module.to_string(),
                    field: field.to_string(),
                });
            }
            if let Some(&first) = claimed.get(field) {
                return Err(ComposeError::MutationCollision {
                    field: field.to_string(),
                    first: first.to_string(),
                    second: manifest.module.to_string(),
                });
            }
            claimed.insert(field, manifest.module);
        }
    }

    for &field in &MUTATION_SURFACE {
        if !claimed.contains_key(field) {
            return Err(ComposeError::UnboundMutation {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/// Run every composition check. Called by `build_schema` before the
/// executable schema is constructed.
pub fn validate(manifests: &[ModuleManifest]) -> Result<(), ComposeError> {
    merge_query_fields(manifests)?;
    verify_mutation_surface(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(
        name: &'static str,
        queries: &'static [&'static str],
        mutations: &'static [&'static str],
    ) -> ModuleManifest {
        ModuleManifest {
            module: name,
            query_fields: queries,
            mutation_fields: mutations,
        }
    }

    #[test]
    fn disjoint_modules_merge_to_the_union() {
        let manifests = [
            module("a", &["publisher", "congregation"], &[]),
            module("b", &["territory", "address"], &[]),
        ];
        let merged = merge_query_fields(&manifests).unwrap();
        assert_eq!(merged.len(), 4);
        assert_eq!(merged["publisher"], "a");
        assert_eq!(merged["territory"], "b");
    }

    #[test]
    fn duplicate_query_field_fails_with_both_modules_named() {
        let manifests = [
            module("first", &["territories"], &[]),
            module("second", &["territories"], &[]),
        ];
        let err = merge_query_fields(&manifests).unwrap_err();
        assert_eq!(
            err,
            ComposeError::QueryFieldCollision {
                field: "territories".into(),
                first: "first".into(),
                second: "second".into(),
            }
        );
    }

    #[test]
    fn mutation_outside_the_allowlist_is_rejected() {
        let manifests = [module("rogue", &[], &["dropAllTerritories"])];
        let err = verify_mutation_surface(&manifests).unwrap_err();
        assert_eq!(
            err,
            ComposeError::UndeclaredMutation {
                module: "rogue".into(),
                field: "dropAllTerritories".into(),
            }
        );
    }

    #[test]
    fn mutation_claimed_twice_is_rejected() {
        let manifests = [
            module("territories", &[], &["checkoutTerritory", "checkinTerritory"]),
            module("imposter", &[], &["checkoutTerritory"]),
            module("activity_logs", &[], &["addLog", "updateLog", "removeLog"]),
        ];
        let err = verify_mutation_surface(&manifests).unwrap_err();
        assert_eq!(
            err,
            ComposeError::MutationCollision {
                field: "checkoutTerritory".into(),
                first: "territories".into(),
                second: "imposter".into(),
            }
        );
    }

    #[test]
    fn unclaimed_mutation_is_rejected() {
        let manifests = [
            module("territories", &[], &["checkoutTerritory", "checkinTerritory"]),
            module("activity_logs", &[], &["addLog", "updateLog"]),
        ];
        let err = verify_mutation_surface(&manifests).unwrap_err();
        assert_eq!(
            err,
            ComposeError::UnboundMutation {
                field: "removeLog".into(),
            }
        );
    }

    #[test]
    fn registered_domain_manifests_validate() {
        validate(&crate::gql::domains::manifests()).unwrap();
    }

    #[test]
    fn validation_is_deterministic() {
        let manifests = crate::gql::domains::manifests();
        let first = merge_query_fields(&manifests).unwrap();
        let second = merge_query_fields(&manifests).unwrap();
        assert_eq!(first, second);
    }
}
