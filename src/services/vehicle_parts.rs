use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{part, vehicle, vehicle_part};

#[derive(Debug, Deserialize, ToSchema)]
pub struct VehiclePartInput {
    pub vehicle_id: Option<String>,
    pub part_id: Option<String>,
    pub quantity: Option<i32>,
    pub installed_date: Option<NaiveDate>,
}

/// Service for part installations on vehicles
#[derive(Clone)]
pub struct VehiclePartService {
    db: Arc<DbPool>,
}

impl VehiclePartService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        input: VehiclePartInput,
    ) -> Result<vehicle_part::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let part_id = require(input.part_id, "part_id")?;
        let quantity = require(input.quantity, "quantity")?;

        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;
        part::Entity::find_by_id(part_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Part not found".into()))?;

        let created = vehicle_part::ActiveModel {
            vehicle_id: Set(vehicle_id),
            part_id: Set(part_id),
            quantity: Set(quantity),
            installed_date: Set(input.installed_date),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(
            id = created.id,
            vehicle_id = %created.vehicle_id,
            part_id = %created.part_id,
            "part installed on vehicle"
        );
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<vehicle_part::Model, ServiceError> {
        vehicle_part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle part not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<vehicle_part::Model>, ServiceError> {
        Ok(vehicle_part::Entity::find()
            .order_by_asc(vehicle_part::Column::Id)
            .all(&*self.db)
            .await?)
    }

    /// All installations on one vehicle.
    pub async fn list_for_vehicle(
        &self,
        vehicle_id: &str,
    ) -> Result<Vec<vehicle_part::Model>, ServiceError> {
        Ok(vehicle_part::Entity::find()
            .filter(vehicle_part::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(vehicle_part::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        input: VehiclePartInput,
    ) -> Result<vehicle_part::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: vehicle_part::ActiveModel = existing.into();
        active.vehicle_id = Set(require(input.vehicle_id, "vehicle_id")?);
        active.part_id = Set(require(input.part_id, "part_id")?);
        active.quantity = Set(require(input.quantity, "quantity")?);
        active.installed_date = Set(input.installed_date);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(id = updated.id, "vehicle part updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<vehicle_part::Model, ServiceError> {
        let existing = self.get(id).await?;
        vehicle_part::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        info!(id = id, "vehicle part removed");
        Ok(existing)
    }
}
