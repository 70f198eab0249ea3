//! Borrower endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::borrower::{Borrower, CreateBorrower},
    AppState,
};

#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "Borrower list", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(State(state): State<AppState>) -> AppResult<Json<Vec<Borrower>>> {
    let borrowers = state.services.catalog.list_borrowers().await?;
    Ok(Json(borrowers))
}

#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = CreateBorrower,
    responses(
        (status = 201, description = "Borrower created", body = Borrower),
        (status = 409, description = "Username taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrower(
    State(state): State<AppState>,
    Json(data): Json<CreateBorrower>,
) -> AppResult<(StatusCode, Json<Borrower>)> {
    let borrower = state.services.catalog.create_borrower(&data).await?;
    Ok((StatusCode::CREATED, Json(borrower)))
}
