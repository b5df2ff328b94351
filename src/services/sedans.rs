use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{sedan, vehicle};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SedanInput {
    pub vehicle_id: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub engine_size: Option<Decimal>,
    pub luxury_level: Option<String>,
}

/// Service for sedan-category detail rows
#[derive(Clone)]
pub struct SedanService {
    db: Arc<DbPool>,
}

impl SedanService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: SedanInput) -> Result<sedan::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let body_type = require(input.body_type, "body_type")?;
        let fuel_type = require(input.fuel_type, "fuel_type")?;
        let transmission = require(input.transmission, "transmission")?;
        let mileage = require(input.mileage, "mileage")?;
        let engine_size = require(input.engine_size, "engine_size")?;
        let luxury_level = require(input.luxury_level, "luxury_level")?;

        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;

        let created = sedan::ActiveModel {
            vehicle_id: Set(vehicle_id),
            body_type: Set(body_type),
            fuel_type: Set(fuel_type),
            transmission: Set(transmission),
            mileage: Set(mileage),
            engine_size: Set(engine_size),
            luxury_level: Set(luxury_level),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(id = created.id, vehicle_id = %created.vehicle_id, "sedan detail added");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<sedan::Model, ServiceError> {
        sedan::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Sedan not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<sedan::Model>, ServiceError> {
        Ok(sedan::Entity::find()
            .order_by_asc(sedan::Column::Id)
            .all(&*self.db)
            .await?)
    }

    pub async fn update(&self, id: i32, input: SedanInput) -> Result<sedan::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: sedan::ActiveModel = existing.into();
        active.vehicle_id = Set(require(input.vehicle_id, "vehicle_id")?);
        active.body_type = Set(require(input.body_type, "body_type")?);
        active.fuel_type = Set(require(input.fuel_type, "fuel_type")?);
        active.transmission = Set(require(input.transmission, "transmission")?);
        active.mileage = Set(require(input.mileage, "mileage")?);
        active.engine_size = Set(require(input.engine_size, "engine_size")?);
        active.luxury_level = Set(require(input.luxury_level, "luxury_level")?);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(id = updated.id, "sedan detail updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<sedan::Model, ServiceError> {
        let existing = self.get(id).await?;
        sedan::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(id = id, "sedan detail deleted");
        Ok(existing)
    }
}
