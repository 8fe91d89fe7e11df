//! Shared domain enums stored as TEXT columns

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Implements the sqlx TEXT mapping for an enum exposing `as_str()` and
/// `FromStr<Err = String>`.
macro_rules! impl_text_column {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = sqlx::Decode::<sqlx::Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> sqlx::encode::IsNull {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

pub(crate) use impl_text_column;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Operational status of a piece of equipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Retired => "Retired",
        }
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EquipmentStatus::Active),
            "Maintenance" => Ok(EquipmentStatus::Maintenance),
            "Retired" => Ok(EquipmentStatus::Retired),
            _ => Err(format!("Invalid equipment status: {}", s)),
        }
    }
}

impl_text_column!(EquipmentStatus);

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Role of a user in the maintenance organisation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Technician,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Technician => "technician",
            UserRole::User => "user",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "technician" => Ok(UserRole::Technician),
            "user" => Ok(UserRole::User),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl_text_column!(UserRole);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_status_round_trips_through_text() {
        for status in [
            EquipmentStatus::Active,
            EquipmentStatus::Maintenance,
            EquipmentStatus::Retired,
        ] {
            assert_eq!(status.as_str().parse::<EquipmentStatus>(), Ok(status));
        }
        assert!("retired".parse::<EquipmentStatus>().is_err());
    }

    #[test]
    fn test_user_role_parse_is_case_insensitive() {
        assert_eq!("Technician".parse::<UserRole>(), Ok(UserRole::Technician));
        assert!("janitor".parse::<UserRole>().is_err());
    }
}
