//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod books;
pub mod borrowers;
pub mod dashboard;
pub mod genres;
pub mod health;
pub mod instances;
pub mod languages;
pub mod openapi;

use axum::{
    routing::{delete, get},
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
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Home page
        .route("/dashboard", get(dashboard::get_dashboard))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book).delete(books::delete_book))
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route("/authors/:id", get(authors::get_author).delete(authors::delete_author))
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route("/genres/:id", delete(genres::delete_genre))
        // Languages
        .route("/languages", get(languages::list_languages).post(languages::create_language))
        .route("/languages/:id", get(languages::get_language).delete(languages::delete_language))
        // Book copies
        .route("/instances", get(instances::list_instances).post(instances::create_instance))
        .route(
            "/instances/:id",
            get(instances::get_instance)
                .put(instances::update_instance)
                .delete(instances::delete_instance),
        )
        // Borrowers
        .route("/borrowers", get(borrowers::list_borrowers).post(borrowers::create_borrower))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
