//! Error types for the maintenance server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::request::RequestStatus;

/// Stable, machine-readable error classification returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EquipmentNotFound,
    EquipmentScrapped,
    RequestNotFound,
    TechnicianNotInTeam,
    InvalidTransition,
    NotFound,
    Validation,
    Conflict,
    Internal,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Equipment not found")]
    EquipmentNotFound(i32),

    #[error("Equipment is scrapped")]
    EquipmentScrapped(i32),

    #[error("Request not found")]
    RequestNotFound(i32),

    #[error("Technician does not belong to this maintenance team")]
    TechnicianNotInTeam { request_id: i32, technician_id: i32 },

    #[error("Invalid status transition")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::EquipmentNotFound(_) => ErrorKind::EquipmentNotFound,
            AppError::EquipmentScrapped(_) => ErrorKind::EquipmentScrapped,
            AppError::RequestNotFound(_) => ErrorKind::RequestNotFound,
            AppError::TechnicianNotInTeam { .. } => ErrorKind::TechnicianNotInTeam,
            AppError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Database(e) if is_constraint_violation(e) => ErrorKind::Conflict,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::EquipmentNotFound | ErrorKind::RequestNotFound | ErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorKind::EquipmentScrapped
            | ErrorKind::InvalidTransition
            | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::TechnicianNotInTeam => StatusCode::FORBIDDEN,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_constraint_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation() || db.is_foreign_key_violation())
        .unwrap_or(false)
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error_kind: ErrorKind,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Database(e) if is_constraint_violation(e) => {
                tracing::warn!("Constraint violation: {}", e);
                "Conflicting or referenced record".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error_kind: self.kind(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_errors_map_to_http_status() {
        assert_eq!(AppError::EquipmentNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EquipmentScrapped(1).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::RequestNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::TechnicianNotInTeam { request_id: 1, technician_id: 2 }.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InvalidTransition {
                from: RequestStatus::New,
                to: RequestStatus::Repaired,
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(AppError::EquipmentNotFound(3).to_string(), "Equipment not found");
        assert_eq!(AppError::EquipmentScrapped(3).to_string(), "Equipment is scrapped");
        assert_eq!(AppError::RequestNotFound(3).to_string(), "Request not found");
        assert_eq!(
            AppError::TechnicianNotInTeam { request_id: 1, technician_id: 2 }.to_string(),
            "Technician does not belong to this maintenance team"
        );
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let err = AppError::Internal("connection reset by peer at 10.0.0.3".to_string());
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_kind_wire_names() {
        let json = serde_json::to_string(&ErrorKind::TechnicianNotInTeam).unwrap();
        assert_eq!(json, "\"technician_not_in_team\"");
        let json = serde_json::to_string(&ErrorKind::InvalidTransition).unwrap();
        assert_eq!(json, "\"invalid_transition\"");
    }
}
