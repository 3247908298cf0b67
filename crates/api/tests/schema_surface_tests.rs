mod common;

use api::gql::build_schema;

/// Pull the field names out of one object type in the exported SDL,
/// skipping description blocks.
fn type_fields(sdl: &str, type_name: &str) -> Vec<String> {
    let header = format!("type {type_name} {{");
    let start = sdl
        .find(&header)
        .unwrap_or_else(|| panic!("type {type_name} missing from SDL"));
    let body = &sdl[start + header.len()..];
    let end = body.find('}').expect("unterminated type block");

    let mut fields = Vec::new();
    let mut in_description = false;
    for line in body[..end].lines() {
        let line = line.trim();
        if line.starts_with("\"\"\"") {
            let rest = &line[3..];
            if !(rest.len() >= 3 && rest.ends_with("\"\"\"")) {
                in_description = !in_description;
            }
            continue;
        }
        if in_description || line.is_empty() {
            continue;
        }
        if let Some(idx) = line.find(['(', ':']) {
            fields.push(line[..idx].trim().to_string());
        }
    }
    fields
}

#[tokio::test]
async fn root_query_exposes_the_union_of_all_module_fields() {
    let schema = build_schema(common::lazy_state()).expect("schema should compose");
    let sdl = schema.sdl();

    let mut fields = type_fields(&sdl, "QueryRoot");
    fields.sort();

    let mut expected = vec![
        "user",
        "publisher",
        "publishers",
        "congregation",
        "congregations",
        "territory",
        "territories",
        "address",
        "addresses",
        "activityLog",
        "activityLogs",
    ];
    expected.sort_unstable();

    assert_eq!(fields, expected);
}

#[tokio::test]
async fn mutation_surface_is_exactly_the_five_published_fields() {
    let schema = build_schema(common::lazy_state()).expect("schema should compose");
    let sdl = schema.sdl();

    let mut fields = type_fields(&sdl, "MutationRoot");
    fields.sort();

    let mut expected = vec![
        "checkoutTerritory",
        "checkinTerritory",
        "addLog",
        "updateLog",
        "removeLog",
    ];
    expected.sort_unstable();

    assert_eq!(
        fields, expected,
        "mutation type drifted from the published surface"
    );
}

#[tokio::test]
async fn congregation_links_to_its_territories_and_publishers() {
    let schema = build_schema(common::lazy_state()).expect("schema should compose");
    let sdl = schema.sdl();

    let fields = type_fields(&sdl, "Congregation");
    assert!(fields.contains(&"territories".to_string()));
    assert!(fields.contains(&"publishers".to_string()));
}

#[tokio::test]
async fn address_links_to_its_territory_and_logs() {
    let schema = build_schema(common::lazy_state()).expect("schema should compose");
    let sdl = schema.sdl();

    let fields = type_fields(&sdl, "Address");
    assert!(fields.contains(&"territory".to_string()));
    assert!(fields.contains(&"activityLogs".to_string()));
}

#[tokio::test]
async fn territory_exposes_derived_status_but_not_raw_holder_column() {
    let schema = build_schema(common::lazy_state()).expect("schema should compose");
    let sdl = schema.sdl();

    let fields = type_fields(&sdl, "Territory");
    assert!(fields.contains(&"status".to_string()));
    assert!(fields.contains(&"publisher".to_string()));
    assert!(!fields.contains(&"checkedOutTo".to_string()));
}

#[tokio::test]
async fn composition_is_deterministic_across_rebuilds() {
    let first = build_schema(common::lazy_state())
        .expect("schema should compose")
        .sdl();
    let second = build_schema(common::lazy_state())
        .expect("schema should compose")
        .sdl();

    assert_eq!(first, second);
}
