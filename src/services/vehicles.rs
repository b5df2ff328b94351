use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{vehicle, VehicleStatus};
use crate::sequencer::{self, EntityClass};

/// Submitted vehicle fields. Updates are full overwrites, so the same shape
/// serves create and edit; create fills in a default status.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VehicleInput {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub price: Option<Decimal>,
    pub date_acquired: Option<NaiveDate>,
    pub status: Option<VehicleStatus>,
}

/// Service for managing vehicles
#[derive(Clone)]
pub struct VehicleService {
    db: Arc<DbPool>,
}

impl VehicleService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Creates a vehicle with a sequencer-assigned identifier. Status
    /// defaults to in_stock when not submitted.
    pub async fn create(&self, input: VehicleInput) -> Result<vehicle::Model, ServiceError> {
        let make = require(input.make, "make")?;
        let model = require(input.model, "model")?;
        let year = require(input.year, "year")?;
        let vin = require(input.vin, "vin")?;
        let purchase_price = require(input.purchase_price, "purchase_price")?;
        let price = require(input.price, "price")?;
        let date_acquired = require(input.date_acquired, "date_acquired")?;

        let txn = self.db.begin().await?;
        let vehicle_id = sequencer::next_id(&txn, EntityClass::Vehicle).await?;
        let now = Utc::now();

        let created = vehicle::ActiveModel {
            vehicle_id: Set(vehicle_id),
            make: Set(make),
            model: Set(model),
            year: Set(year),
            vin: Set(vin),
            purchase_price: Set(purchase_price),
            price: Set(price),
            date_acquired: Set(date_acquired),
            status: Set(input.status.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(ServiceError::from_write)?;
        txn.commit().await?;

        info!(vehicle_id = %created.vehicle_id, "vehicle added");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<vehicle::Model, ServiceError> {
        vehicle::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))
    }

    /// Lists vehicles, optionally restricted to one status. `None` means the
    /// caller passed the `All` sentinel (or nothing).
    pub async fn list(
        &self,
        status: Option<VehicleStatus>,
    ) -> Result<Vec<vehicle::Model>, ServiceError> {
        let mut query = vehicle::Entity::find();
        if let Some(status) = status {
            query = query.filter(vehicle::Column::Status.eq(status));
        }
        Ok(query
            .order_by_asc(vehicle::Column::VehicleId)
            .all(&*self.db)
            .await?)
    }

    /// Full-overwrite update; the client resubmits the complete record.
    pub async fn update(
        &self,
        id: &str,
        input: VehicleInput,
    ) -> Result<vehicle::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: vehicle::ActiveModel = existing.into();
        active.make = Set(require(input.make, "make")?);
        active.model = Set(require(input.model, "model")?);
        active.year = Set(require(input.year, "year")?);
        active.vin = Set(require(input.vin, "vin")?);
        active.purchase_price = Set(require(input.purchase_price, "purchase_price")?);
        active.price = Set(require(input.price, "price")?);
        active.date_acquired = Set(require(input.date_acquired, "date_acquired")?);
        active.status = Set(require(input.status, "status")?);
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(vehicle_id = %updated.vehicle_id, "vehicle updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = vehicle::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Vehicle not found".into()));
        }
        info!(vehicle_id = %id, "vehicle deleted");
        Ok(())
    }
}
