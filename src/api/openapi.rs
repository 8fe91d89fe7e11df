//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, requests, stats, teams, users, work_centers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Maintenance API",
        version = "0.1.0",
        description = "Equipment, maintenance team and maintenance request management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::assign_technician,
        requests::update_request_status,
        requests::list_equipment_requests,
        requests::list_preventive_requests,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::delete_team,
        teams::list_members,
        teams::add_member,
        teams::remove_member,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        // Work centers
        work_centers::list_work_centers,
        work_centers::get_work_center,
        work_centers::create_work_center,
        work_centers::update_work_center,
        work_centers::delete_work_center,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::enums::EquipmentStatus,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::AssignTechnician,
            crate::models::request::UpdateRequestStatus,
            crate::models::request::RequestStatus,
            crate::models::request::RequestType,
            requests::CreatedRequestResponse,
            requests::RequestUpdateResponse,
            // Teams
            crate::models::team::Team,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            crate::models::team::AddTeamMember,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::enums::UserRole,
            // Work centers
            crate::models::work_center::WorkCenter,
            crate::models::work_center::CreateWorkCenter,
            crate::models::work_center::UpdateWorkCenter,
            // Stats
            stats::StatsResponse,
            stats::EquipmentStats,
            stats::RequestStats,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ErrorKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "teams", description = "Maintenance teams and membership"),
        (name = "users", description = "User directory"),
        (name = "work_centers", description = "Work centers"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_paths_are_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/requests",
            "/requests/{id}/assign",
            "/requests/{id}/status",
            "/requests/preventive",
            "/equipment/{id}/requests",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
