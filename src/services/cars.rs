use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{car, vehicle};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CarInput {
    pub vehicle_id: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub engine_size: Option<Decimal>,
}

/// Service for car-category detail rows
#[derive(Clone)]
pub struct CarService {
    db: Arc<DbPool>,
}

impl CarService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CarInput) -> Result<car::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let body_type = require(input.body_type, "body_type")?;
        let fuel_type = require(input.fuel_type, "fuel_type")?;
        let transmission = require(input.transmission, "transmission")?;
        let mileage = require(input.mileage, "mileage")?;
        let engine_size = require(input.engine_size, "engine_size")?;

        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;

        let created = car::ActiveModel {
            vehicle_id: Set(vehicle_id),
            body_type: Set(body_type),
            fuel_type: Set(fuel_type),
            transmission: Set(transmission),
            mileage: Set(mileage),
            engine_size: Set(engine_size),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(id = created.id, vehicle_id = %created.vehicle_id, "car detail added");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<car::Model, ServiceError> {
        car::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Car not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<car::Model>, ServiceError> {
        Ok(car::Entity::find()
            .order_by_asc(car::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn update(&self, id: i32, input: CarInput) -> Result<car::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: car::ActiveModel = existing.into();
        active.vehicle_id = Set(require(input.vehicle_id, "vehicle_id")?);
        active.body_type = Set(require(input.body_type, "body_type")?);
        active.fuel_type = Set(require(input.fuel_type, "fuel_type")?);
        active.transmission = Set(require(input.transmission, "transmission")?);
        active.mileage = Set(require(input.mileage, "mileage")?);
        active.engine_size = Set(require(input.engine_size, "engine_size")?);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(id = updated.id, "car detail updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<car::Model, ServiceError> {
        let existing = self.get(id).await?;
        car::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(id = id, "car detail deleted");
        Ok(existing)
    }
}
