// src/lib.rs

use axum::routing::{get, post, put};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use services::identity::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
}

pub mod entities {
    pub mod prelude;

    pub mod addresses;
    pub mod customers;
    pub mod fish;
    pub mod orders;
}

pub mod services {
    pub mod addresses;
    pub mod fish;
    pub mod identity;
    pub mod orders;
}

pub mod models {
    pub mod address;
    pub mod customer;
    pub mod fish;
    pub mod order;
}

pub mod handlers {
    pub mod addresses;
    pub mod customers;
    pub mod fish;
    pub mod orders;
}

pub mod error;

/// Build the full API router.
pub fn app(state: AppState) -> Router {
    use handlers::{addresses, customers, fish, orders};

    Router::new()
        .route("/api/summary", get(fish::summary))
        .route("/api/fish", get(fish::list_fish).post(fish::create_fish))
        .route(
            "/api/fish/{id}",
            put(fish::update_fish).delete(fish::delete_fish),
        )
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::place_order),
        )
        .route("/api/customers", get(customers::list_customers))
        .route("/api/customers/register", post(customers::register))
        .route("/api/customers/login", post(customers::login))
        .route(
            "/api/customers/{customer_id}/orders",
            get(orders::customer_orders),
        )
        .route(
            "/api/customers/{customer_id}/addresses",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/api/customers/{customer_id}/addresses/{address_id}",
            get(addresses::get_address)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
        .route(
            "/api/customers/{customer_id}/addresses/{address_id}/default",
            post(addresses::set_default_address),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
