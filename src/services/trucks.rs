use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{truck, vehicle};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TruckInput {
    pub vehicle_id: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub engine_size: Option<Decimal>,
    pub bed_length: Option<Decimal>,
    pub towing_capacity: Option<i32>,
    pub payload_capacity: Option<i32>,
    pub cab_type: Option<String>,
}

/// Service for truck-category detail rows
#[derive(Clone)]
pub struct TruckService {
    db: Arc<DbPool>,
}

impl TruckService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: TruckInput) -> Result<truck::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let body_type = require(input.body_type, "body_type")?;
        let fuel_type = require(input.fuel_type, "fuel_type")?;
        let transmission = require(input.transmission, "transmission")?;
        let mileage = require(input.mileage, "mileage")?;
        let engine_size = require(input.engine_size, "engine_size")?;
        let bed_length = require(input.bed_length, "bed_length")?;
        let towing_capacity = require(input.towing_capacity, "towing_capacity")?;
        let payload_capacity = require(input.payload_capacity, "payload_capacity")?;
        let cab_type = require(input.cab_type, "cab_type")?;

        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;

        let created = truck::ActiveModel {
            vehicle_id: Set(vehicle_id),
            body_type: Set(body_type),
            fuel_type: Set(fuel_type),
            transmission: Set(transmission),
            mileage: Set(mileage),
            engine_size: Set(engine_size),
            bed_length: Set(bed_length),
            towing_capacity: Set(towing_capacity),
            payload_capacity: Set(payload_capacity),
            cab_type: Set(cab_type),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(id = created.id, vehicle_id = %created.vehicle_id, "truck detail added");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<truck::Model, ServiceError> {
        truck::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Truck not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<truck::Model>, ServiceError> {
        Ok(truck::Entity::find()
            .order_by_asc(truck::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn update(&self, id: i32, input: TruckInput) -> Result<truck::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: truck::ActiveModel = existing.into();
        active.vehicle_id = Set(require(input.vehicle_id, "vehicle_id")?);
        active.body_type = Set(require(input.body_type, "body_type")?);
        active.fuel_type = Set(require(input.fuel_type, "fuel_type")?);
        active.transmission = Set(require(input.transmission, "transmission")?);
        active.mileage = Set(require(input.mileage, "mileage")?);
        active.engine_size = Set(require(input.engine_size, "engine_size")?);
        active.bed_length = Set(require(input.bed_length, "bed_length")?);
        active.towing_capacity = Set(require(input.towing_capacity, "towing_capacity")?);
        active.payload_capacity = Set(require(input.payload_capacity, "payload_capacity")?);
        active.cab_type = Set(require(input.cab_type, "cab_type")?);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(id = updated.id, "truck detail updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<truck::Model, ServiceError> {
        let existing = self.get(id).await?;
        truck::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(id = id, "truck detail deleted");
        Ok(existing)
    }
}
