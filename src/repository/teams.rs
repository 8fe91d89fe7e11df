//! Teams and team membership domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        team::{CreateTeam, Team, UpdateTeam},
        user::User,
    },
};

const TEAM_COLUMNS: &str = r#"
    t.id, t.name, t.description, t.crea_date,
    (SELECT COUNT(*) FROM team_members tm WHERE tm.team_id = t.id) AS member_count
"#;

impl Repository {
    /// List all teams with their member counts
    pub async fn teams_list(&self) -> AppResult<Vec<Team>> {
        let query = format!("SELECT {} FROM teams t ORDER BY t.name", TEAM_COLUMNS);
        let rows = sqlx::query_as::<_, Team>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a team by ID
    pub async fn teams_get_by_id(&self, id: i32) -> AppResult<Team> {
        let query = format!("SELECT {} FROM teams t WHERE t.id = $1", TEAM_COLUMNS);
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Create a team
    pub async fn teams_create(&self, data: &CreateTeam) -> AppResult<Team> {
        let row = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a team
    pub async fn teams_update(&self, id: i32, data: &UpdateTeam) -> AppResult<Team> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = COALESCE($1, name), description = COALESCE($2, description)
            WHERE id = $3
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        self.teams_get_by_id(id).await
    }

    /// Delete a team (memberships cascade; equipment and requests keep a NULL team)
    pub async fn teams_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }

    // ---- Members ----

    /// List the users belonging to a team
    pub async fn teams_list_members(&self, team_id: i32) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM users u
            JOIN team_members tm ON tm.user_id = u.id
            WHERE tm.team_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Add a user to a team. Adding an existing member is a no-op.
    pub async fn teams_add_member(&self, team_id: i32, user_id: i32) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove a user from a team
    pub async fn teams_remove_member(&self, team_id: i32, user_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND user_id = $2")
            .bind(team_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of team {}",
                user_id, team_id
            )));
        }
        Ok(())
    }
}
