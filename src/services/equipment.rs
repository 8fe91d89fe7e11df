//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        if let Some(team_id) = data.maintenance_team_id {
            self.repository.teams_get_by_id(team_id).await?;
        }
        let equipment = self.repository.equipment_create(data).await?;
        tracing::info!(equipment_id = equipment.id, serial = %equipment.serial_number, "Equipment registered");
        Ok(equipment)
    }

    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        if let Some(team_id) = data.maintenance_team_id {
            self.repository.teams_get_by_id(team_id).await?;
        }
        self.repository.equipment_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment_delete(id).await
    }
}
