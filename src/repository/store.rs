//! Storage seam for the request lifecycle

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Repository;
use crate::{
    error::AppResult,
    models::{
        equipment::EquipmentRef,
        request::{MaintenanceRequest, NewRequest, RequestStatus},
    },
};

/// Reads and writes the request lifecycle needs.
///
/// Implementations must make `apply_transition` atomic: the status update and
/// (for SCRAP) the equipment scrap flag are written together or not at all.
/// `insert_request` must check the equipment and insert in one step, so a
/// concurrent SCRAP can never leave a NEW request on scrapped equipment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn find_equipment(&self, equipment_id: i32) -> AppResult<Option<EquipmentRef>>;

    /// `None` when the equipment is missing or scrapped; nothing is written
    async fn insert_request(&self, data: &NewRequest) -> AppResult<Option<MaintenanceRequest>>;

    async fn find_request(&self, request_id: i32) -> AppResult<Option<MaintenanceRequest>>;

    async fn is_technician_in_team(&self, request_id: i32, technician_id: i32)
        -> AppResult<bool>;

    async fn assign_technician(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<Option<MaintenanceRequest>>;

    /// `None` when the request is no longer in `from`
    async fn apply_transition(
        &self,
        request_id: i32,
        from: RequestStatus,
        to: RequestStatus,
        duration_hours: Option<f64>,
    ) -> AppResult<Option<MaintenanceRequest>>;

    async fn list_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>>;

    async fn list_preventive(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<MaintenanceRequest>>;
}

#[async_trait]
impl RequestStore for Repository {
    async fn find_equipment(&self, equipment_id: i32) -> AppResult<Option<EquipmentRef>> {
        self.equipment_find_ref(equipment_id).await
    }

    async fn insert_request(&self, data: &NewRequest) -> AppResult<Option<MaintenanceRequest>> {
        self.requests_create(data).await
    }

    async fn find_request(&self, request_id: i32) -> AppResult<Option<MaintenanceRequest>> {
        self.requests_find(request_id).await
    }

    async fn is_technician_in_team(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<bool> {
        self.requests_is_technician_in_team(request_id, technician_id).await
    }

    async fn assign_technician(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<Option<MaintenanceRequest>> {
        self.requests_assign_technician(request_id, technician_id).await
    }

    async fn apply_transition(
        &self,
        request_id: i32,
        from: RequestStatus,
        to: RequestStatus,
        duration_hours: Option<f64>,
    ) -> AppResult<Option<MaintenanceRequest>> {
        self.requests_apply_transition(request_id, from, to, duration_hours)
            .await
    }

    async fn list_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list_by_equipment(equipment_id).await
    }

    async fn list_preventive(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list_preventive(from, to).await
    }
}
