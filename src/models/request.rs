//! Maintenance request model and lifecycle state machine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::impl_text_column;

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a maintenance request.
///
/// `NEW` is initial; `REPAIRED` and `SCRAP` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "NEW",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Repaired => "REPAIRED",
            RequestStatus::Scrap => "SCRAP",
        }
    }

    /// Statuses reachable in one step from `self`
    pub fn allowed_next(&self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::New => &[RequestStatus::InProgress],
            RequestStatus::InProgress => &[RequestStatus::Repaired, RequestStatus::Scrap],
            RequestStatus::Repaired | RequestStatus::Scrap => &[],
        }
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(RequestStatus::New),
            "IN_PROGRESS" => Ok(RequestStatus::InProgress),
            "REPAIRED" => Ok(RequestStatus::Repaired),
            "SCRAP" => Ok(RequestStatus::Scrap),
            _ => Err(format!("Invalid request status: {}", s)),
        }
    }
}

impl_text_column!(RequestStatus);

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Kind of maintenance work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Corrective => "CORRECTIVE",
            RequestType::Preventive => "PREVENTIVE",
        }
    }
}

impl std::str::FromStr for RequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CORRECTIVE" => Ok(RequestType::Corrective),
            "PREVENTIVE" => Ok(RequestType::Preventive),
            _ => Err(format!("Invalid request type: {}", s)),
        }
    }
}

impl_text_column!(RequestType);

// ---------------------------------------------------------------------------
// MaintenanceRequest
// ---------------------------------------------------------------------------

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub equipment_id: i32,
    /// Copied from the equipment when the request is created
    pub maintenance_team_id: Option<i32>,
    pub scheduled_date: NaiveDate,
    pub status: RequestStatus,
    pub assigned_technician_id: Option<i32>,
    /// Hours spent, recorded when the work is completed
    pub duration_hours: Option<f64>,
    pub created_by: i32,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create maintenance request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255, message = "Subject is required"))]
    pub subject: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub equipment_id: i32,
    /// Scheduled date (YYYY-MM-DD)
    pub scheduled_date: NaiveDate,
    /// ID of the user raising the request
    pub created_by: i32,
    pub description: Option<String>,
}

/// Row to insert. The maintenance team is taken from the equipment at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub subject: String,
    pub description: Option<String>,
    pub request_type: RequestType,
    pub equipment_id: i32,
    pub scheduled_date: NaiveDate,
    pub created_by: i32,
}

/// Assign technician body
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AssignTechnician {
    pub technician_id: i32,
}

/// Status transition body
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
    #[validate(range(min = 0.0, message = "Duration cannot be negative"))]
    pub duration_hours: Option<f64>,
}

/// Filters for listing requests (kanban board)
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(deny_unknown_fields)]
pub struct RequestQuery {
    pub status: Option<RequestStatus>,
    pub team_id: Option<i32>,
    pub technician_id: Option<i32>,
    pub equipment_id: Option<i32>,
}

/// Inclusive date range for the preventive maintenance calendar
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(deny_unknown_fields)]
pub struct PreventiveQuery {
    /// First day (YYYY-MM-DD), inclusive
    pub from: NaiveDate,
    /// Last day (YYYY-MM-DD), inclusive
    pub to: NaiveDate,
}
