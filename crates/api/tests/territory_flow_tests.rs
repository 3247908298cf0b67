//! End-to-end mutation flows against a live database.
//!
//! Run with `cargo test -- --ignored` once TEST_DATABASE_URL points at a
//! disposable Postgres instance.

mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use serde_json::json;

#[tokio::test]
#[ignore]
async fn checkout_is_exclusive_until_checkin() {
    let state = common::setup_test_db().await;
    let schema = build_schema(state.clone()).expect("schema should compose");

    let congregation_id = common::create_test_congregation(&state, "Test Congregation").await;
    let alice = common::create_test_publisher(&state, congregation_id, "Alice", "Martin").await;
    let bob = common::create_test_publisher(&state, congregation_id, "Bob", "Dubois").await;
    let territory_id = common::create_test_territory(&state, congregation_id, "T-101").await;

    let checkout = r#"
        mutation Checkout($territoryId: UUID!, $publisherId: UUID!) {
            checkoutTerritory(territoryId: $territoryId, publisherId: $publisherId) {
                id
                status
            }
        }
    "#;

    let response = common::execute_graphql(
        &schema,
        checkout,
        Some(Variables::from_json(json!({
            "territoryId": territory_id.to_string(),
            "publisherId": alice.to_string(),
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "first checkout failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["checkoutTerritory"]["status"], "CHECKED_OUT");

    // Second publisher must be refused while the territory is held.
    let response = common::execute_graphql(
        &schema,
        checkout,
        Some(Variables::from_json(json!({
            "territoryId": territory_id.to_string(),
            "publisherId": bob.to_string(),
        }))),
    )
    .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("already checked out"));

    let checkin = r#"
        mutation Checkin($territoryId: UUID!) {
            checkinTerritory(territoryId: $territoryId) {
                id
                status
                publisher { id }
            }
        }
    "#;

    let response = common::execute_graphql(
        &schema,
        checkin,
        Some(Variables::from_json(json!({
            "territoryId": territory_id.to_string(),
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "checkin failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["checkinTerritory"]["status"], "AVAILABLE");
    assert!(data["checkinTerritory"]["publisher"].is_null());

    // After checkin the other publisher can take it.
    let response = common::execute_graphql(
        &schema,
        checkout,
        Some(Variables::from_json(json!({
            "territoryId": territory_id.to_string(),
            "publisherId": bob.to_string(),
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "re-checkout failed: {:?}", response.errors);
}

#[tokio::test]
#[ignore]
async fn checkin_of_an_available_territory_is_rejected() {
    let state = common::setup_test_db().await;
    let schema = build_schema(state.clone()).expect("schema should compose");

    let congregation_id = common::create_test_congregation(&state, "Idle Congregation").await;
    let territory_id = common::create_test_territory(&state, congregation_id, "T-204").await;

    let response = common::execute_graphql(
        &schema,
        r#"
            mutation Checkin($territoryId: UUID!) {
                checkinTerritory(territoryId: $territoryId) { id }
            }
        "#,
        Some(Variables::from_json(json!({
            "territoryId": territory_id.to_string(),
        }))),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("not checked out"));
}

#[tokio::test]
#[ignore]
async fn activity_log_lifecycle() {
    let state = common::setup_test_db().await;
    let schema = build_schema(state.clone()).expect("schema should compose");

    let congregation_id = common::create_test_congregation(&state, "Log Congregation").await;
    let publisher_id =
        common::create_test_publisher(&state, congregation_id, "Carol", "Lambert").await;
    let territory_id = common::create_test_territory(&state, congregation_id, "T-305").await;
    let address_id = common::create_test_address(&state, territory_id, "12 Rue Haute").await;

    // Create
    let response = common::execute_graphql(
        &schema,
        r#"
            mutation AddLog($input: ActivityLogInput!) {
                addLog(input: $input) {
                    id
                    value
                    notes
                }
            }
        "#,
        Some(Variables::from_json(json!({
            "input": {
                "addressId": address_id.to_string(),
                "publisherId": publisher_id.to_string(),
                "value": "NH",
                "notes": "Nobody home",
            }
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "addLog failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["addLog"]["value"], "NH");
    let log_id = data["addLog"]["id"].as_str().expect("log id").to_string();

    // Partial update: value changes, notes survive.
    let response = common::execute_graphql(
        &schema,
        r#"
            mutation UpdateLog($id: ID!, $input: UpdateActivityLogInput!) {
                updateLog(id: $id, input: $input) {
                    value
                    notes
                }
            }
        "#,
        Some(Variables::from_json(json!({
            "id": log_id,
            "input": { "value": "H" }
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "updateLog failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["updateLog"]["value"], "H");
    assert_eq!(data["updateLog"]["notes"], "Nobody home");

    // The page query reflects the entry.
    let response = common::execute_graphql(
        &schema,
        r#"
            query Logs($addressId: UUID!) {
                activityLogs(addressId: $addressId) {
                    totalCount
                    items { id value }
                }
            }
        "#,
        Some(Variables::from_json(json!({
            "addressId": address_id.to_string(),
        }))),
    )
    .await;
    assert!(response.errors.is_empty(), "activityLogs failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["activityLogs"]["totalCount"], 1);

    // Remove returns the deleted ID, and a second remove is an error.
    let remove = r#"
        mutation RemoveLog($id: ID!) {
            removeLog(id: $id)
        }
    "#;

    let response = common::execute_graphql(
        &schema,
        remove,
        Some(Variables::from_json(json!({ "id": log_id }))),
    )
    .await;
    assert!(response.errors.is_empty(), "removeLog failed: {:?}", response.errors);

    let data = response.data.into_json().expect("response data");
    assert_eq!(data["removeLog"].as_str(), Some(log_id.as_str()));

    let response = common::execute_graphql(
        &schema,
        remove,
        Some(Variables::from_json(json!({ "id": log_id }))),
    )
    .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("not found"));
}

#[tokio::test]
#[ignore]
async fn referencing_a_missing_address_fails_loudly() {
    let state = common::setup_test_db().await;
    let schema = build_schema(state.clone()).expect("schema should compose");

    let congregation_id = common::create_test_congregation(&state, "Strict Congregation").await;
    let publisher_id =
        common::create_test_publisher(&state, congregation_id, "Dave", "Peeters").await;

    let response = common::execute_graphql(
        &schema,
        r#"
            mutation AddLog($input: ActivityLogInput!) {
                addLog(input: $input) { id }
            }
        "#,
        Some(Variables::from_json(json!({
            "input": {
                "addressId": uuid::Uuid::new_v4().to_string(),
                "publisherId": publisher_id.to_string(),
                "value": "NH",
            }
        }))),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("Address not found"));
}
