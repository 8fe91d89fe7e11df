//! Maintenance team endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        team::{AddTeamMember, CreateTeam, Team, UpdateTeam},
        user::User,
    },
};

use super::{ApiPath, ValidatedJson};

/// List teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Teams with member counts", body = Vec<Team>)
    )
)]
pub async fn list_teams(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// Get a team
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = Team),
        (status = 404, description = "Team not found", body = ErrorResponse)
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Team>> {
    let team = state.services.teams.get_by_id(id).await?;
    Ok(Json(team))
}

/// Create a team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 409, description = "Team name already used", body = ErrorResponse)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    let team = state.services.teams.create(&data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Update a team
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 404, description = "Team not found", body = ErrorResponse)
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateTeam>,
) -> AppResult<Json<Team>> {
    let team = state.services.teams.update(id, &data).await?;
    Ok(Json(team))
}

/// Delete a team
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found", body = ErrorResponse)
    )
)]
pub async fn delete_team(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List team members
#[utoipa::path(
    get,
    path = "/teams/{id}/members",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team members", body = Vec<User>),
        (status = 404, description = "Team not found", body = ErrorResponse)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Vec<User>>> {
    let members = state.services.teams.list_members(id).await?;
    Ok(Json(members))
}

/// Add a user to a team
#[utoipa::path(
    post,
    path = "/teams/{id}/members",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    request_body = AddTeamMember,
    responses(
        (status = 201, description = "Member added; returns all members", body = Vec<User>),
        (status = 404, description = "Team or user not found", body = ErrorResponse)
    )
)]
pub async fn add_member(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<AddTeamMember>,
) -> AppResult<(StatusCode, Json<Vec<User>>)> {
    let members = state.services.teams.add_member(id, data.user_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

/// Remove a user from a team
#[utoipa::path(
    delete,
    path = "/teams/{id}/members/{user_id}",
    tag = "teams",
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 404, description = "Membership not found", body = ErrorResponse)
    )
)]
pub async fn remove_member(
    State(state): State<crate::AppState>,
    ApiPath((id, user_id)): ApiPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.teams.remove_member(id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
