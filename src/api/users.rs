//! User directory endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        enums::UserRole,
        user::{CreateUser, User},
    },
};

use super::{ApiPath, ApiQuery, ValidatedJson};

/// User list filters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(deny_unknown_fields)]
pub struct UserQuery {
    pub role: Option<UserRole>,
}

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Users ordered by name", body = Vec<User>)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list(query.role).await?;
    Ok(Json(users))
}

/// Get a user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.services.users.create(&data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
