//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub equipment: EquipmentStats,
    pub requests: RequestStats,
}

#[derive(Serialize, ToSchema)]
pub struct EquipmentStats {
    /// Total number of registered equipment
    pub total: i64,
    /// Equipment flagged as scrapped
    pub scrapped: i64,
    pub by_category: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct RequestStats {
    pub total: i64,
    /// Open requests (NEW or IN_PROGRESS) scheduled before today
    pub overdue: i64,
    pub by_status: Vec<StatEntry>,
    pub by_type: Vec<StatEntry>,
    pub by_team: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
