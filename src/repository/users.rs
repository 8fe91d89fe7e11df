//! Users domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::UserRole,
        user::{CreateUser, User},
    },
};

impl Repository {
    /// List users, optionally restricted to one role
    pub async fn users_list(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE ($1::text IS NULL OR role = $1) ORDER BY name",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a user by ID
    pub async fn users_get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Create a user
    pub async fn users_create(&self, data: &CreateUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.role.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
