//! Home page endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, services::dashboard::DashboardCounts, AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Title substring to count instead of the configured one
    pub keyword: Option<String>,
}

/// Aggregate catalog counts for the home page
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Catalog counts", body = DashboardCounts)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardCounts>> {
    let counts = state.services.dashboard.counts(query.keyword.as_deref()).await?;
    Ok(Json(counts))
}
