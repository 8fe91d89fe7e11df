//! Equipment API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

use super::{ApiPath, ValidatedJson};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Register equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Serial number already registered", body = ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = ErrorResponse),
        (status = 409, description = "Equipment still has maintenance requests", body = ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
