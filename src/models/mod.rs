//! Data models

pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;
pub mod user;
pub mod work_center;

// Re-export commonly used types
pub use enums::{EquipmentStatus, UserRole};
pub use equipment::Equipment;
pub use request::{MaintenanceRequest, RequestStatus, RequestType};
pub use team::Team;
pub use user::User;
pub use work_center::WorkCenter;
