//! API handlers for the maintenance REST endpoints

pub mod equipment;
pub mod extractors;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod users;
pub mod work_centers;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use extractors::{ApiPath, ApiQuery, ValidatedJson};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/requests", get(requests::list_equipment_requests))
        // Maintenance requests
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/requests/preventive", get(requests::list_preventive_requests))
        .route("/requests/:id", get(requests::get_request))
        .route("/requests/:id/assign", patch(requests::assign_technician))
        .route("/requests/:id/status", patch(requests::update_request_status))
        // Teams
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route(
            "/teams/:id/members",
            get(teams::list_members).post(teams::add_member),
        )
        .route(
            "/teams/:id/members/:user_id",
            axum::routing::delete(teams::remove_member),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
        // Work centers
        .route(
            "/work-centers",
            get(work_centers::list_work_centers).post(work_centers::create_work_center),
        )
        .route(
            "/work-centers/:id",
            get(work_centers::get_work_center)
                .put(work_centers::update_work_center)
                .delete(work_centers::delete_work_center),
        )
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
