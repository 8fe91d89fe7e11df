//! Maintenance teams service

use crate::{
    error::AppResult,
    models::{
        team::{CreateTeam, Team, UpdateTeam},
        user::User,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Team>> {
        self.repository.teams_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Team> {
        self.repository.teams_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        self.repository.teams_create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTeam) -> AppResult<Team> {
        self.repository.teams_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.teams_delete(id).await
    }

    pub async fn list_members(&self, team_id: i32) -> AppResult<Vec<User>> {
        self.repository.teams_get_by_id(team_id).await?;
        self.repository.teams_list_members(team_id).await
    }

    /// Add a user to a team; both must exist
    pub async fn add_member(&self, team_id: i32, user_id: i32) -> AppResult<Vec<User>> {
        self.repository.teams_get_by_id(team_id).await?;
        self.repository.users_get_by_id(user_id).await?;
        self.repository.teams_add_member(team_id, user_id).await?;
        tracing::info!(team_id, user_id, "Team member added");
        self.repository.teams_list_members(team_id).await
    }

    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> AppResult<()> {
        self.repository.teams_remove_member(team_id, user_id).await?;
        tracing::info!(team_id, user_id, "Team member removed");
        Ok(())
    }
}
