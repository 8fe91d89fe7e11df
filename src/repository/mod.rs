//! Repository layer for database operations

pub mod equipment;
pub mod requests;
pub mod store;
pub mod teams;
pub mod users;
pub mod work_centers;

use sqlx::{Pool, Postgres};

pub use store::RequestStore;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
