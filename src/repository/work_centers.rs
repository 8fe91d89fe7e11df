//! Work centers domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::work_center::{CreateWorkCenter, UpdateWorkCenter, WorkCenter},
};

impl Repository {
    pub async fn work_centers_list(&self) -> AppResult<Vec<WorkCenter>> {
        let rows = sqlx::query_as::<_, WorkCenter>("SELECT * FROM work_centers ORDER BY code")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn work_centers_get_by_id(&self, id: i32) -> AppResult<WorkCenter> {
        sqlx::query_as::<_, WorkCenter>("SELECT * FROM work_centers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    pub async fn work_centers_create(&self, data: &CreateWorkCenter) -> AppResult<WorkCenter> {
        let row = sqlx::query_as::<_, WorkCenter>(
            r#"
            INSERT INTO work_centers (name, code, location, capacity, cost_per_hour, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.location)
        .bind(data.capacity)
        .bind(data.cost_per_hour)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn work_centers_update(
        &self,
        id: i32,
        data: &UpdateWorkCenter,
    ) -> AppResult<WorkCenter> {
        sqlx::query_as::<_, WorkCenter>(
            r#"
            UPDATE work_centers
            SET name = COALESCE($1, name),
                code = COALESCE($2, code),
                location = COALESCE($3, location),
                capacity = COALESCE($4, capacity),
                cost_per_hour = COALESCE($5, cost_per_hour),
                notes = COALESCE($6, notes),
                modif_date = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.location)
        .bind(data.capacity)
        .bind(data.cost_per_hour)
        .bind(&data.notes)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    pub async fn work_centers_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM work_centers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Work center {} not found", id)));
        }
        Ok(())
    }
}
