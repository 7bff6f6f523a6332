mod common;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use crate::common::{create_fish, register_customer, test_server};

#[tokio::test]
async fn test_fish_crud_roundtrip() {
    let server = test_server().await;

    let fish_id = create_fish(&server, "Salmon", dec!(10.00), dec!(5.0)).await;

    let response = server.get("/api/fish").await;
    response.assert_status(StatusCode::OK);
    let fishes = response.json::<Vec<Value>>();
    assert_eq!(fishes.len(), 1);
    assert_eq!(fishes[0]["name"], "Salmon");

    let response = server
        .put(&format!("/api/fish/{fish_id}"))
        .json(&json!({ "price_per_kg": dec!(12.50) }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["name"], "Salmon");
    let price: Decimal = serde_json::from_value(updated["price_per_kg"].clone()).unwrap();
    assert_eq!(price, dec!(12.50));

    let response = server.delete(&format!("/api/fish/{fish_id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/api/fish").await;
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_fish_validation_and_missing_ids() {
    let server = test_server().await;

    let response = server
        .post("/api/fish")
        .json(&json!({ "name": "  ", "price_per_kg": dec!(1.00), "total_kg": dec!(1.0) }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/fish")
        .json(&json!({ "name": "Salmon", "price_per_kg": dec!(-1.00), "total_kg": dec!(1.0) }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put("/api/fish/9999")
        .json(&json!({ "name": "Ghost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.delete("/api/fish/9999").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary_counts_orders_stock_and_customers() {
    let server = test_server().await;

    let salmon = create_fish(&server, "Salmon", dec!(10.00), dec!(5.0)).await;
    create_fish(&server, "Tuna", dec!(20.00), dec!(3.5)).await;
    let customer_id = register_customer(&server, "Asha Nair", "+254712345678").await;

    let response = server
        .post("/api/orders")
        .json(&json!({ "customer_id": customer_id, "fish_id": salmon, "quantity": dec!(1.0) }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server.get("/api/summary").await;
    response.assert_status(StatusCode::OK);
    let summary = response.json::<Value>();

    assert_eq!(summary["orders"].as_u64(), Some(1));
    assert_eq!(summary["customers"].as_u64(), Some(1));
    // 5.0 - 1.0 ordered + 3.5 = 7.5 kg on hand
    let total_kg: Decimal = serde_json::from_value(summary["total_kg"].clone()).unwrap();
    assert_eq!(total_kg, dec!(7.5));
}
