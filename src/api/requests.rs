//! Maintenance request endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::request::{
        AssignTechnician, CreateRequest, MaintenanceRequest, PreventiveQuery, RequestQuery,
        UpdateRequestStatus,
    },
};

use super::{ApiPath, ApiQuery, ValidatedJson};

/// Created request response
#[derive(Serialize, ToSchema)]
pub struct CreatedRequestResponse {
    pub request_id: i32,
    pub request: MaintenanceRequest,
}

/// Response of a lifecycle update (assignment or status change)
#[derive(Serialize, ToSchema)]
pub struct RequestUpdateResponse {
    pub message: String,
    pub request: MaintenanceRequest,
}

/// List maintenance requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "Matching requests ordered by ID", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<RequestQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.list(&query).await?;
    Ok(Json(requests))
}

/// Get a maintenance request
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// Raise a maintenance request against a piece of equipment
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created in status NEW", body = CreatedRequestResponse),
        (status = 400, description = "Equipment is scrapped or body invalid", body = ErrorResponse),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateRequest>,
) -> AppResult<(StatusCode, Json<CreatedRequestResponse>)> {
    let request = state.services.requests.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedRequestResponse {
            request_id: request.id,
            request,
        }),
    ))
}

/// Assign a technician from the request's maintenance team
#[utoipa::path(
    patch,
    path = "/requests/{id}/assign",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = AssignTechnician,
    responses(
        (status = 200, description = "Technician assigned", body = RequestUpdateResponse),
        (status = 403, description = "Technician does not belong to this maintenance team", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn assign_technician(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<AssignTechnician>,
) -> AppResult<Json<RequestUpdateResponse>> {
    let request = state
        .services
        .requests
        .assign(id, data.technician_id)
        .await?;
    Ok(Json(RequestUpdateResponse {
        message: "Technician assigned".to_string(),
        request,
    }))
}

/// Move a request to its next status
#[utoipa::path(
    patch,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Status updated", body = RequestUpdateResponse),
        (status = 400, description = "Invalid status transition", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn update_request_status(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateRequestStatus>,
) -> AppResult<Json<RequestUpdateResponse>> {
    let request = state.services.requests.update_status(id, &data).await?;
    Ok(Json(RequestUpdateResponse {
        message: format!("Request status updated to {}", request.status),
        request,
    }))
}

/// List the maintenance requests of one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/requests",
    tag = "requests",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Requests ordered by ID (possibly empty)", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_equipment_requests(
    State(state): State<crate::AppState>,
    ApiPath(equipment_id): ApiPath<i32>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state
        .services
        .requests
        .list_for_equipment(equipment_id)
        .await?;
    Ok(Json(requests))
}

/// Preventive maintenance calendar
#[utoipa::path(
    get,
    path = "/requests/preventive",
    tag = "requests",
    params(PreventiveQuery),
    responses(
        (status = 200, description = "Preventive requests scheduled in [from, to]", body = Vec<MaintenanceRequest>),
        (status = 400, description = "Missing or malformed dates", body = ErrorResponse)
    )
)]
pub async fn list_preventive_requests(
    State(state): State<crate::AppState>,
    ApiQuery(range): ApiQuery<PreventiveQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.list_preventive(range).await?;
    Ok(Json(requests))
}
