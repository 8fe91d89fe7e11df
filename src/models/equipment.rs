//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentStatus;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    /// Manufacturer serial number (unique)
    pub serial_number: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: EquipmentStatus,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub specifications: Option<String>,
    /// Set once, when a maintenance request on this equipment is scrapped
    pub is_scrapped: bool,
    /// Team responsible for maintaining this equipment
    pub maintenance_team_id: Option<i32>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 128, message = "Serial number is required"))]
    pub serial_number: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub specifications: Option<String>,
    pub maintenance_team_id: Option<i32>,
}

/// Update equipment request. The scrap flag is not writable here.
///
/// Omitted and `null` fields are both left unchanged, so a nullable column
/// (team, category, dates) cannot be cleared through this body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub specifications: Option<String>,
    pub maintenance_team_id: Option<i32>,
}

/// The slice of an equipment row the request lifecycle needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct EquipmentRef {
    pub id: i32,
    pub maintenance_team_id: Option<i32>,
    pub is_scrapped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rejects_scrap_flag() {
        let body = r#"{"name": "Lathe", "is_scrapped": false}"#;
        assert!(serde_json::from_str::<UpdateEquipment>(body).is_err());
    }

    #[test]
    fn test_update_null_means_unchanged() {
        let explicit: UpdateEquipment =
            serde_json::from_str(r#"{"maintenance_team_id": null, "category": null}"#).unwrap();
        let omitted: UpdateEquipment = serde_json::from_str("{}").unwrap();
        assert_eq!(explicit.maintenance_team_id, omitted.maintenance_team_id);
        assert_eq!(explicit.category, None);
    }

    #[test]
    fn test_create_requires_serial_number() {
        let body = r#"{"name": "Lathe", "serial_number": ""}"#;
        let data: CreateEquipment = serde_json::from_str(body).unwrap();
        assert!(data.validate().is_err());
    }
}
