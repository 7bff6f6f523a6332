use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use serde_json::json;
use std::env;

use harbour_backend::services::identity::TokenService;
use harbour_backend::{app, AppState};
use migration::MigratorTrait;

/// Set up a migrated test database.
///
/// Uses `TEST_DATABASE_URL` if set; otherwise an in-memory SQLite
/// database, so the suite runs without external services. A single
/// pooled connection keeps the in-memory database shared.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let mut options = ConnectOptions::new(database_url);
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await?;
    migration::Migrator::fresh(&db).await?;
    Ok(db)
}

/// Build a test server over a fresh database.
pub async fn test_server() -> TestServer {
    let db = setup_test_db().await.expect("Failed to set up test DB");
    let state = AppState {
        db,
        tokens: TokenService::default(),
    };
    TestServer::new(app(state)).expect("Failed to start test server")
}

/// Create a fish listing through the API, returning its id.
#[allow(dead_code)]
pub async fn create_fish(server: &TestServer, name: &str, price: Decimal, kg: Decimal) -> i32 {
    let response = server
        .post("/api/fish")
        .json(&json!({ "name": name, "price_per_kg": price, "total_kg": kg }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("fish id") as i32
}

/// Register a customer through the API, returning their id.
#[allow(dead_code)]
pub async fn register_customer(server: &TestServer, name: &str, phone: &str) -> i32 {
    let response = server
        .post("/api/customers/register")
        .json(&json!({ "full_name": name, "phone": phone, "password": "correct-horse" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<serde_json::Value>()["customer"]["id"]
        .as_i64()
        .expect("customer id") as i32
}
