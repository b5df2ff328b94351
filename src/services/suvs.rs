use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{suv, vehicle};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SuvInput {
    pub vehicle_id: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub engine_size: Option<Decimal>,
    pub seating_capacity: Option<i32>,
    pub cargo_capacity: Option<Decimal>,
    pub ground_clearance: Option<Decimal>,
    pub awd_4wd: Option<bool>,
}

/// Service for SUV-category detail rows
#[derive(Clone)]
pub struct SuvService {
    db: Arc<DbPool>,
}

impl SuvService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: SuvInput) -> Result<suv::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let body_type = require(input.body_type, "body_type")?;
        let fuel_type = require(input.fuel_type, "fuel_type")?;
        let transmission = require(input.transmission, "transmission")?;
        let mileage = require(input.mileage, "mileage")?;
        let engine_size = require(input.engine_size, "engine_size")?;
        let seating_capacity = require(input.seating_capacity, "seating_capacity")?;
        let cargo_capacity = require(input.cargo_capacity, "cargo_capacity")?;
        let ground_clearance = require(input.ground_clearance, "ground_clearance")?;
        let awd_4wd = require(input.awd_4wd, "awd_4wd")?;

        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;

        let created = suv::ActiveModel {
            vehicle_id: Set(vehicle_id),
            body_type: Set(body_type),
            fuel_type: Set(fuel_type),
            transmission: Set(transmission),
            mileage: Set(mileage),
            engine_size: Set(engine_size),
            seating_capacity: Set(seating_capacity),
            cargo_capacity: Set(cargo_capacity),
            ground_clearance: Set(ground_clearance),
            awd_4wd: Set(awd_4wd),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(id = created.id, vehicle_id = %created.vehicle_id, "suv detail added");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<suv::Model, ServiceError> {
        suv::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("SUV not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<suv::Model>, ServiceError> {
        Ok(suv::Entity::find()
            .order_by_asc(suv::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn update(&self, id: i32, input: SuvInput) -> Result<suv::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: suv::ActiveModel = existing.into();
        active.vehicle_id = Set(require(input.vehicle_id, "vehicle_id")?);
        active.body_type = Set(require(input.body_type, "body_type")?);
        active.fuel_type = Set(require(input.fuel_type, "fuel_type")?);
        active.transmission = Set(require(input.transmission, "transmission")?);
        active.mileage = Set(require(input.mileage, "mileage")?);
        active.engine_size = Set(require(input.engine_size, "engine_size")?);
        active.seating_capacity = Set(require(input.seating_capacity, "seating_capacity")?);
        active.cargo_capacity = Set(require(input.cargo_capacity, "cargo_capacity")?);
        active.ground_clearance = Set(require(input.ground_clearance, "ground_clearance")?);
        active.awd_4wd = Set(require(input.awd_4wd, "awd_4wd")?);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(id = updated.id, "suv detail updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<suv::Model, ServiceError> {
        let existing = self.get(id).await?;
        suv::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(id = id, "suv detail deleted");
        Ok(existing)
    }
}
