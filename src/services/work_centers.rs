//! Work centers service

use crate::{
    error::AppResult,
    models::work_center::{CreateWorkCenter, UpdateWorkCenter, WorkCenter},
    repository::Repository,
};

#[derive(Clone)]
pub struct WorkCentersService {
    repository: Repository,
}

impl WorkCentersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<WorkCenter>> {
        self.repository.work_centers_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<WorkCenter> {
        self.repository.work_centers_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateWorkCenter) -> AppResult<WorkCenter> {
        self.repository.work_centers_create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateWorkCenter) -> AppResult<WorkCenter> {
        self.repository.work_centers_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.work_centers_delete(id).await
    }
}
