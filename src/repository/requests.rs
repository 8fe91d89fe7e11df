//! Maintenance request domain methods on Repository

use chrono::{NaiveDate, Utc};

use super::Repository;
use crate::{
    error::AppResult,
    models::request::{
        MaintenanceRequest, NewRequest, RequestQuery, RequestStatus, RequestType,
    },
};

impl Repository {
    /// List requests, optionally filtered (kanban board source)
    pub async fn requests_list(&self, query: &RequestQuery) -> AppResult<Vec<MaintenanceRequest>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut idx = 1;

        macro_rules! add_filter {
            ($field:expr, $column:expr) => {
                if $field.is_some() {
                    conditions.push(format!("{} = ${}", $column, idx));
                    idx += 1;
                }
            };
        }

        add_filter!(query.status, "status");
        add_filter!(query.team_id, "maintenance_team_id");
        add_filter!(query.technician_id, "assigned_technician_id");
        add_filter!(query.equipment_id, "equipment_id");

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT * FROM maintenance_requests {} ORDER BY id",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, MaintenanceRequest>(&sql);
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(team_id) = query.team_id {
            builder = builder.bind(team_id);
        }
        if let Some(technician_id) = query.technician_id {
            builder = builder.bind(technician_id);
        }
        if let Some(equipment_id) = query.equipment_id {
            builder = builder.bind(equipment_id);
        }

        Ok(builder.fetch_all(&self.pool).await?)
    }

    /// Find a request by ID
    pub async fn requests_find(&self, id: i32) -> AppResult<Option<MaintenanceRequest>> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a request in status NEW, copying the equipment's team.
    ///
    /// The scrap check and the insert are one statement; `None` means the
    /// equipment was missing or scrapped and no row was written.
    pub async fn requests_create(&self, data: &NewRequest) -> AppResult<Option<MaintenanceRequest>> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                subject, description, request_type, equipment_id, maintenance_team_id,
                scheduled_date, status, created_by
            )
            SELECT $1, $2, $3, e.id, e.maintenance_team_id, $5, $6, $7
            FROM equipment e
            WHERE e.id = $4 AND NOT e.is_scrapped
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.request_type)
        .bind(data.equipment_id)
        .bind(data.scheduled_date)
        .bind(RequestStatus::New)
        .bind(data.created_by)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Whether the technician is a member of the team the request belongs to
    pub async fn requests_is_technician_in_team(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<bool> {
        let is_member: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM team_members tm
                JOIN maintenance_requests r ON r.maintenance_team_id = tm.team_id
                WHERE r.id = $1 AND tm.user_id = $2
            )
            "#,
        )
        .bind(request_id)
        .bind(technician_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(is_member)
    }

    /// Set the assigned technician
    pub async fn requests_assign_technician(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<Option<MaintenanceRequest>> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET assigned_technician_id = $1, modif_date = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(technician_id)
        .bind(Utc::now())
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Move a request from `from` to `to` in one transaction.
    ///
    /// The update only applies while the row is still in `from`; `None` means
    /// it was not (missing row or concurrent transition) and nothing was
    /// written. Moving to SCRAP also flags the owning equipment as scrapped.
    pub async fn requests_apply_transition(
        &self,
        request_id: i32,
        from: RequestStatus,
        to: RequestStatus,
        duration_hours: Option<f64>,
    ) -> AppResult<Option<MaintenanceRequest>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET status = $1,
                duration_hours = COALESCE($2, duration_hours),
                modif_date = $3
            WHERE id = $4 AND status = $5
            RETURNING *
            "#,
        )
        .bind(to)
        .bind(duration_hours)
        .bind(Utc::now())
        .bind(request_id)
        .bind(from)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(request) = updated else {
            tx.rollback().await?;
            return Ok(None);
        };

        if to == RequestStatus::Scrap {
            sqlx::query("UPDATE equipment SET is_scrapped = TRUE, modif_date = $1 WHERE id = $2")
                .bind(Utc::now())
                .bind(request.equipment_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(request))
    }

    /// All requests raised against a piece of equipment
    pub async fn requests_list_by_equipment(
        &self,
        equipment_id: i32,
    ) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE equipment_id = $1 ORDER BY id",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Preventive requests scheduled within [from, to]
    pub async fn requests_list_preventive(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT * FROM maintenance_requests
            WHERE request_type = $1 AND scheduled_date BETWEEN $2 AND $3
            ORDER BY scheduled_date, id
            "#,
        )
        .bind(RequestType::Preventive)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
