//! Book copy endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book_instance::{CreateBookInstance, InstanceQuery, InstanceView, UpdateBookInstance},
    AppState,
};

/// List copies by due date
#[utoipa::path(
    get,
    path = "/instances",
    tag = "instances",
    params(InstanceQuery),
    responses(
        (status = 200, description = "Copy list", body = Vec<InstanceView>)
    )
)]
pub async fn list_instances(
    State(state): State<AppState>,
    Query(filter): Query<InstanceQuery>,
) -> AppResult<Json<Vec<InstanceView>>> {
    let instances = state.services.instances.list(&filter).await?;
    Ok(Json(instances))
}

/// Get a copy by ID
#[utoipa::path(
    get,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    responses(
        (status = 200, description = "Copy details", body = InstanceView),
        (status = 404, description = "Copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InstanceView>> {
    let instance = state.services.instances.get(id).await?;
    Ok(Json(instance))
}

/// Register a new copy of a book
#[utoipa::path(
    post,
    path = "/instances",
    tag = "instances",
    request_body = CreateBookInstance,
    responses(
        (status = 201, description = "Copy created", body = InstanceView),
        (status = 400, description = "Unknown book or borrower", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid copy data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_instance(
    State(state): State<AppState>,
    Json(data): Json<CreateBookInstance>,
) -> AppResult<(StatusCode, Json<InstanceView>)> {
    let instance = state.services.instances.create(&data).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// Update status, due date, borrower or imprint of a copy
#[utoipa::path(
    put,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    request_body = UpdateBookInstance,
    responses(
        (status = 200, description = "Copy updated", body = InstanceView),
        (status = 404, description = "Copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateBookInstance>,
) -> AppResult<Json<InstanceView>> {
    let instance = state.services.instances.update(id, &data).await?;
    Ok(Json(instance))
}

/// Delete a copy
#[utoipa::path(
    delete,
    path = "/instances/{id}",
    tag = "instances",
    params(("id" = Uuid, Path, description = "Copy ID")),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 404, description = "Copy not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_instance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.instances.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
