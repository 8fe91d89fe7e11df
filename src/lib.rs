//! Maintenance Management Server
//!
//! REST JSON API for tracking equipment, maintenance teams, work centers and
//! maintenance requests, including the request lifecycle
//! (`NEW → IN_PROGRESS → REPAIRED | SCRAP`) and technician assignment rules.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;


pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
