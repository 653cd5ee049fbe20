//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{favorites, health, loans, reservations, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library circulation API. Writes are delegated to stored procedures."
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Loans
        loans::create_loan,
        loans::return_loan,
        // Reservations
        reservations::create_reservation,
        // Reviews
        reviews::create_review,
        // Favorites
        favorites::create_favorite,
    ),
    components(
        schemas(
            // Forms and responses
            loans::CreateLoanForm,
            loans::ReturnLoanForm,
            loans::LoanResponse,
            reservations::CreateReservationForm,
            reservations::ReservationResponse,
            reviews::CreateReviewForm,
            reviews::ReviewResponse,
            favorites::CreateFavoriteForm,
            favorites::FavoriteResponse,
            // Schema
            crate::models::Author,
            crate::models::AuthorBook,
            crate::models::Book,
            crate::models::BookCategory,
            crate::models::Category,
            crate::models::Favorite,
            crate::models::Loan,
            crate::models::Member,
            crate::models::Reservation,
            crate::models::Review,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "loans", description = "Loan creation and return"),
        (name = "reservations", description = "Reservations"),
        (name = "reviews", description = "Book reviews"),
        (name = "favorites", description = "Member favorites")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
