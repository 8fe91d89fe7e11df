//! Maintenance request lifecycle service
//!
//! Creation against equipment, technician assignment restricted to the
//! request's maintenance team, and the status state machine
//! (`NEW → IN_PROGRESS → REPAIRED | SCRAP`). Every operation checks its
//! preconditions before writing anything.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::request::{
        CreateRequest, MaintenanceRequest, NewRequest, PreventiveQuery, RequestQuery,
        RequestStatus, UpdateRequestStatus,
    },
    repository::{RequestStore, Repository},
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
    store: Arc<dyn RequestStore>,
}

impl RequestsService {
    pub fn new(repository: Repository, store: Arc<dyn RequestStore>) -> Self {
        Self { repository, store }
    }

    /// List requests with optional filters
    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests_list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceRequest> {
        self.store
            .find_request(id)
            .await?
            .ok_or(AppError::RequestNotFound(id))
    }

    /// Create a request in status NEW against non-scrapped equipment.
    ///
    /// The maintenance team is copied from the equipment.
    pub async fn create(&self, data: CreateRequest) -> AppResult<MaintenanceRequest> {
        let equipment = self
            .store
            .find_equipment(data.equipment_id)
            .await?
            .ok_or(AppError::EquipmentNotFound(data.equipment_id))?;

        if equipment.is_scrapped {
            tracing::warn!(
                equipment_id = equipment.id,
                "Rejected request creation: equipment is scrapped"
            );
            return Err(AppError::EquipmentScrapped(equipment.id));
        }

        let new_request = NewRequest {
            subject: data.subject,
            description: data.description,
            request_type: data.request_type,
            equipment_id: equipment.id,
            scheduled_date: data.scheduled_date,
            created_by: data.created_by,
        };

        let Some(request) = self.store.insert_request(&new_request).await? else {
            // Equipment was scrapped or deleted after the check above
            return match self.store.find_equipment(equipment.id).await? {
                Some(latest) if !latest.is_scrapped => Err(AppError::Internal(format!(
                    "request insert for equipment {} wrote no row",
                    equipment.id
                ))),
                Some(_) => {
                    tracing::warn!(
                        equipment_id = equipment.id,
                        "Rejected request creation: equipment scrapped concurrently"
                    );
                    Err(AppError::EquipmentScrapped(equipment.id))
                }
                None => Err(AppError::EquipmentNotFound(equipment.id)),
            };
        };
        tracing::info!(
            request_id = request.id,
            equipment_id = request.equipment_id,
            team_id = ?request.maintenance_team_id,
            "Maintenance request created"
        );
        Ok(request)
    }

    /// Assign a technician, who must belong to the request's maintenance team
    pub async fn assign(
        &self,
        request_id: i32,
        technician_id: i32,
    ) -> AppResult<MaintenanceRequest> {
        self.store
            .find_request(request_id)
            .await?
            .ok_or(AppError::RequestNotFound(request_id))?;

        if !self
            .store
            .is_technician_in_team(request_id, technician_id)
            .await?
        {
            tracing::warn!(
                request_id,
                technician_id,
                "Rejected assignment: technician is not in the request's team"
            );
            return Err(AppError::TechnicianNotInTeam {
                request_id,
                technician_id,
            });
        }

        let request = self
            .store
            .assign_technician(request_id, technician_id)
            .await?
            .ok_or(AppError::RequestNotFound(request_id))?;

        tracing::info!(request_id, technician_id, "Technician assigned");
        Ok(request)
    }

    /// Move a request to a new status following the transition table.
    ///
    /// SCRAP also marks the equipment as scrapped, in the same transaction.
    pub async fn update_status(
        &self,
        request_id: i32,
        data: &UpdateRequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        let current = self
            .store
            .find_request(request_id)
            .await?
            .ok_or(AppError::RequestNotFound(request_id))?;

        let from = current.status;
        let to = data.status;

        if !from.can_transition_to(to) {
            tracing::warn!(request_id, %from, %to, "Rejected invalid status transition");
            return Err(AppError::InvalidTransition { from, to });
        }

        let updated = self
            .store
            .apply_transition(request_id, from, to, data.duration_hours)
            .await?;

        let Some(request) = updated else {
            // Lost a race: the row moved or vanished between read and write
            return match self.store.find_request(request_id).await? {
                Some(latest) => Err(AppError::InvalidTransition {
                    from: latest.status,
                    to,
                }),
                None => Err(AppError::RequestNotFound(request_id)),
            };
        };

        tracing::info!(request_id, %from, %to, "Request status changed");
        if to == RequestStatus::Scrap {
            tracing::info!(equipment_id = request.equipment_id, "Equipment scrapped");
        }
        Ok(request)
    }

    /// All requests for one piece of equipment
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.store.list_by_equipment(equipment_id).await
    }

    /// Preventive requests scheduled inside the inclusive date range
    pub async fn list_preventive(&self, range: PreventiveQuery) -> AppResult<Vec<MaintenanceRequest>> {
        self.store.list_preventive(range.from, range.to).await
    }
}
