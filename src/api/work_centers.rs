//! Work center endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::work_center::{CreateWorkCenter, UpdateWorkCenter, WorkCenter},
};

use super::{ApiPath, ValidatedJson};

/// List work centers
#[utoipa::path(
    get,
    path = "/work-centers",
    tag = "work_centers",
    responses(
        (status = 200, description = "Work centers ordered by code", body = Vec<WorkCenter>)
    )
)]
pub async fn list_work_centers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<WorkCenter>>> {
    let centers = state.services.work_centers.list().await?;
    Ok(Json(centers))
}

/// Get a work center
#[utoipa::path(
    get,
    path = "/work-centers/{id}",
    tag = "work_centers",
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 200, description = "Work center details", body = WorkCenter),
        (status = 404, description = "Work center not found", body = ErrorResponse)
    )
)]
pub async fn get_work_center(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<WorkCenter>> {
    let center = state.services.work_centers.get_by_id(id).await?;
    Ok(Json(center))
}

/// Create a work center
#[utoipa::path(
    post,
    path = "/work-centers",
    tag = "work_centers",
    request_body = CreateWorkCenter,
    responses(
        (status = 201, description = "Work center created", body = WorkCenter),
        (status = 409, description = "Code already used", body = ErrorResponse)
    )
)]
pub async fn create_work_center(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateWorkCenter>,
) -> AppResult<(StatusCode, Json<WorkCenter>)> {
    let center = state.services.work_centers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(center)))
}

/// Update a work center
#[utoipa::path(
    put,
    path = "/work-centers/{id}",
    tag = "work_centers",
    params(("id" = i32, Path, description = "Work center ID")),
    request_body = UpdateWorkCenter,
    responses(
        (status = 200, description = "Work center updated", body = WorkCenter),
        (status = 404, description = "Work center not found", body = ErrorResponse)
    )
)]
pub async fn update_work_center(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateWorkCenter>,
) -> AppResult<Json<WorkCenter>> {
    let center = state.services.work_centers.update(id, &data).await?;
    Ok(Json(center))
}

/// Delete a work center
#[utoipa::path(
    delete,
    path = "/work-centers/{id}",
    tag = "work_centers",
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 204, description = "Work center deleted"),
        (status = 404, description = "Work center not found", body = ErrorResponse)
    )
)]
pub async fn delete_work_center(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.work_centers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
