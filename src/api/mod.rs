//! API handlers for Libris REST endpoints

pub mod favorites;
pub mod form;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod reservations;
pub mod reviews;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Loans
        .route("/create-loan/", post(loans::create_loan))
        .route(
            "/return-loan/",
            put(loans::return_loan).patch(loans::return_loan),
        )
        // Reservations, reviews, favorites
        .route("/create-reservation/", post(reservations::create_reservation))
        .route("/create-review/", post(reviews::create_review))
        .route("/create-favorite/", post(favorites::create_favorite))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
