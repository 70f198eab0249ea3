//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrowers, dashboard, genres, health, instances, languages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Local library catalog: books, authors, genres, languages and copies"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Dashboard
        dashboard::get_dashboard,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::delete_author,
        // Genres
        genres::list_genres,
        genres::create_genre,
        genres::delete_genre,
        // Languages
        languages::list_languages,
        languages::get_language,
        languages::create_language,
        languages::delete_language,
        // Copies
        instances::list_instances,
        instances::get_instance,
        instances::create_instance,
        instances::update_instance,
        instances::delete_instance,
        // Borrowers
        borrowers::list_borrowers,
        borrowers::create_borrower,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::BookDetail,
            crate::models::book::CreateBook,
            crate::models::author::Author,
            crate::models::author::AuthorDetail,
            crate::models::author::CreateAuthor,
            crate::models::genre::Genre,
            crate::models::genre::CreateGenre,
            crate::models::language::Language,
            crate::models::language::LanguageDetail,
            crate::models::language::CreateLanguage,
            crate::models::book_instance::LoanStatus,
            crate::models::book_instance::BookInstance,
            crate::models::book_instance::InstanceView,
            crate::models::book_instance::CreateBookInstance,
            crate::models::book_instance::UpdateBookInstance,
            crate::models::borrower::Borrower,
            crate::models::borrower::CreateBorrower,
            crate::services::pagination::BookPage,
            crate::services::pagination::AuthorPage,
            crate::services::dashboard::DashboardCounts,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Home page counters"),
        (name = "books", description = "Book titles"),
        (name = "authors", description = "Authors"),
        (name = "genres", description = "Genres"),
        (name = "languages", description = "Text languages"),
        (name = "instances", description = "Physical copies and loan status"),
        (name = "borrowers", description = "Borrower accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
