//! Dashboard statistics service

use sqlx::Row;

use crate::{
    api::stats::{EquipmentStats, RequestStats, StatEntry, StatsResponse},
    error::AppResult,
    models::request::RequestStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Equipment and request counters for the dashboard
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let pool = &self.repository.pool;

        let total_equipment: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(pool)
            .await?;

        let scrapped_equipment: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE is_scrapped")
                .fetch_one(pool)
                .await?;

        let equipment_by_category = Self::entries(
            sqlx::query(
                r#"
                SELECT COALESCE(category, 'Uncategorized') AS label, COUNT(*) AS value
                FROM equipment
                GROUP BY 1
                ORDER BY 2 DESC, 1
                "#,
            )
            .fetch_all(pool)
            .await?,
        );

        let total_requests: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests")
            .fetch_one(pool)
            .await?;

        let requests_by_status = Self::entries(
            sqlx::query(
                r#"
                SELECT status AS label, COUNT(*) AS value
                FROM maintenance_requests
                GROUP BY status
                ORDER BY status
                "#,
            )
            .fetch_all(pool)
            .await?,
        );

        let requests_by_type = Self::entries(
            sqlx::query(
                r#"
                SELECT request_type AS label, COUNT(*) AS value
                FROM maintenance_requests
                GROUP BY request_type
                ORDER BY request_type
                "#,
            )
            .fetch_all(pool)
            .await?,
        );

        let requests_by_team = Self::entries(
            sqlx::query(
                r#"
                SELECT COALESCE(t.name, 'Unassigned') AS label, COUNT(*) AS value
                FROM maintenance_requests r
                LEFT JOIN teams t ON t.id = r.maintenance_team_id
                GROUP BY 1
                ORDER BY 2 DESC, 1
                "#,
            )
            .fetch_all(pool)
            .await?,
        );

        // Open requests whose scheduled day has passed
        let overdue: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE scheduled_date < CURRENT_DATE AND status IN ($1, $2)
            "#,
        )
        .bind(RequestStatus::New)
        .bind(RequestStatus::InProgress)
        .fetch_one(pool)
        .await?;

        Ok(StatsResponse {
            equipment: EquipmentStats {
                total: total_equipment,
                scrapped: scrapped_equipment,
                by_category: equipment_by_category,
            },
            requests: RequestStats {
                total: total_requests,
                overdue,
                by_status: requests_by_status,
                by_type: requests_by_type,
                by_team: requests_by_team,
            },
        })
    }

    fn entries(rows: Vec<sqlx::postgres::PgRow>) -> Vec<StatEntry> {
        rows.into_iter()
            .map(|row| StatEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect()
    }
}
