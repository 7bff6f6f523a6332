mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{register_customer, test_server};

async fn create_address(server: &axum_test::TestServer, customer_id: i32, line1: &str) -> i32 {
    let response = server
        .post(&format!("/api/customers/{customer_id}/addresses"))
        .json(&json!({ "line1": line1, "city": "Mombasa" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap() as i32
}

#[tokio::test]
async fn test_address_crud_roundtrip() {
    let server = test_server().await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;

    let address_id = create_address(&server, customer_id, "12 Harbour Rd").await;

    let response = server
        .get(&format!("/api/customers/{customer_id}/addresses"))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>().len(), 1);

    let response = server
        .get(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .await;
    response.assert_status(StatusCode::OK);
    let address = response.json::<Value>();
    assert_eq!(address["line1"], "12 Harbour Rd");
    assert_eq!(address["city"], "Mombasa");
    assert_eq!(address["is_default"], false);

    let response = server
        .put(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .json(&json!({ "line2": "Unit 4", "postal_code": "80100" }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["line1"], "12 Harbour Rd");
    assert_eq!(updated["line2"], "Unit 4");
    assert_eq!(updated["postal_code"], "80100");

    let response = server
        .delete(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// An explicit `null` in a patch clears a nullable field; an absent
/// field leaves it untouched.
#[tokio::test]
async fn test_update_null_clears_field_and_absent_keeps_it() {
    let server = test_server().await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;
    let address_id = create_address(&server, customer_id, "12 Harbour Rd").await;

    let response = server
        .put(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .json(&json!({ "line2": "Unit 4", "region": "Coast" }))
        .await;
    response.assert_status(StatusCode::OK);

    // Clear line2 with an explicit null; region is absent and must survive
    let response = server
        .put(&format!(
            "/api/customers/{customer_id}/addresses/{address_id}"
        ))
        .json(&json!({ "line2": null }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["line2"], Value::Null);
    assert_eq!(updated["region"], "Coast");
}

#[tokio::test]
async fn test_create_address_validates_input() {
    let server = test_server().await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;

    let response = server
        .post(&format!("/api/customers/{customer_id}/addresses"))
        .json(&json!({ "line1": "", "city": "Mombasa" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/customers/9999/addresses")
        .json(&json!({ "line1": "12 Harbour Rd", "city": "Mombasa" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Another customer's address is indistinguishable from a missing one.
#[tokio::test]
async fn test_addresses_are_scoped_to_their_owner() {
    let server = test_server().await;
    let alice = register_customer(&server, "Alice", "+254700000001").await;
    let bob = register_customer(&server, "Bob", "+254700000002").await;

    let address_id = create_address(&server, alice, "12 Harbour Rd").await;

    let response = server
        .get(&format!("/api/customers/{bob}/addresses/{address_id}"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/api/customers/{bob}/addresses/{address_id}"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Still owned, still readable by Alice
    let response = server
        .get(&format!("/api/customers/{alice}/addresses/{address_id}"))
        .await;
    response.assert_status(StatusCode::OK);
}

/// SetDefault(A) then SetDefault(B) leaves exactly one default: B.
#[tokio::test]
async fn test_set_default_clears_previous_default() {
    let server = test_server().await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;

    let a = create_address(&server, customer_id, "12 Harbour Rd").await;
    let b = create_address(&server, customer_id, "7 Quay St").await;

    for address_id in [a, b] {
        let response = server
            .post(&format!(
                "/api/customers/{customer_id}/addresses/{address_id}/default"
            ))
            .await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>()["is_default"], true);
    }

    let response = server
        .get(&format!("/api/customers/{customer_id}/addresses"))
        .await;
    response.assert_status(StatusCode::OK);
    let addresses = response.json::<Vec<Value>>();
    let defaults: Vec<i64> = addresses
        .iter()
        .filter(|addr| addr["is_default"] == true)
        .map(|addr| addr["id"].as_i64().unwrap())
        .collect();
    assert_eq!(defaults, vec![b as i64]);
}

#[tokio::test]
async fn test_default_flag_on_create_replaces_existing_default() {
    let server = test_server().await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;

    let response = server
        .post(&format!("/api/customers/{customer_id}/addresses"))
        .json(&json!({ "line1": "12 Harbour Rd", "city": "Mombasa", "is_default": true }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .post(&format!("/api/customers/{customer_id}/addresses"))
        .json(&json!({ "line1": "7 Quay St", "city": "Mombasa", "is_default": true }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let second = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/api/customers/{customer_id}/addresses"))
        .await;
    let addresses = response.json::<Vec<Value>>();
    let defaults: Vec<i64> = addresses
        .iter()
        .filter(|addr| addr["is_default"] == true)
        .map(|addr| addr["id"].as_i64().unwrap())
        .collect();
    assert_eq!(defaults, vec![second]);
}
