//! Work center model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A production location where equipment is operated
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkCenter {
    pub id: i32,
    pub name: String,
    /// Short unique code
    pub code: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub cost_per_hour: Option<f64>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateWorkCenter {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 32, message = "Code is required"))]
    pub code: String,
    pub location: Option<String>,
    #[validate(range(min = 0))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub cost_per_hour: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateWorkCenter {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub cost_per_hour: Option<f64>,
    pub notes: Option<String>,
}
