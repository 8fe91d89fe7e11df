//! Business logic services

pub mod equipment;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod users;
pub mod work_centers;

use std::sync::Arc;

use crate::repository::{RequestStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub teams: teams::TeamsService,
    pub users: users::UsersService,
    pub work_centers: work_centers::WorkCentersService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let store: Arc<dyn RequestStore> = Arc::new(repository.clone());
        Self::with_request_store(repository, store)
    }

    /// Create all services, routing the request lifecycle through `store`
    pub fn with_request_store(repository: Repository, store: Arc<dyn RequestStore>) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone(), store),
            teams: teams::TeamsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            work_centers: work_centers::WorkCentersService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        }
    }
}
