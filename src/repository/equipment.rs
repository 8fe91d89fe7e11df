//! Equipment domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentRef, UpdateEquipment},
};

impl Repository {
    /// List all equipment
    pub async fn equipment_list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn equipment_get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::EquipmentNotFound(id))
    }

    /// Team and scrap state of a piece of equipment, if it exists
    pub async fn equipment_find_ref(&self, id: i32) -> AppResult<Option<EquipmentRef>> {
        let row = sqlx::query_as::<_, EquipmentRef>(
            "SELECT id, maintenance_team_id, is_scrapped FROM equipment WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create equipment
    pub async fn equipment_create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (
                name, serial_number, category, location, status, manufacturer, model,
                acquisition_date, warranty_expiry_date, description, specifications,
                maintenance_team_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.location)
        .bind(data.status.unwrap_or_default())
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(data.acquisition_date)
        .bind(data.warranty_expiry_date)
        .bind(&data.description)
        .bind(&data.specifications)
        .bind(data.maintenance_team_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment (only the provided fields)
    pub async fn equipment_update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.serial_number, "serial_number");
        add_field!(data.category, "category");
        add_field!(data.location, "location");
        add_field!(data.status, "status");
        add_field!(data.manufacturer, "manufacturer");
        add_field!(data.model, "model");
        add_field!(data.acquisition_date, "acquisition_date");
        add_field!(data.warranty_expiry_date, "warranty_expiry_date");
        add_field!(data.description, "description");
        add_field!(data.specifications, "specifications");
        add_field!(data.maintenance_team_id, "maintenance_team_id");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.serial_number);
        bind_field!(data.category);
        bind_field!(data.location);
        bind_field!(data.status);
        bind_field!(data.manufacturer);
        bind_field!(data.model);
        bind_field!(data.acquisition_date);
        bind_field!(data.warranty_expiry_date);
        bind_field!(data.description);
        bind_field!(data.specifications);
        bind_field!(data.maintenance_team_id);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::EquipmentNotFound(id))
    }

    /// Delete equipment. Fails with a foreign-key violation while requests reference it.
    pub async fn equipment_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::EquipmentNotFound(id));
        }
        Ok(())
    }
}
