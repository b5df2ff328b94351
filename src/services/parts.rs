use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::part;

/// Submitted part fields. The identifier comes from the supplier catalog,
/// so it is part of the payload rather than sequencer-assigned.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PartInput {
    pub part_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub part_number: Option<String>,
    pub price: Option<Decimal>,
    pub quantity_in_stock: Option<i32>,
    pub reorder_threshold: Option<i32>,
    pub reorder_quantity: Option<i32>,
    pub supplier_id: Option<String>,
}

/// Service for managing parts inventory
#[derive(Clone)]
pub struct PartService {
    db: Arc<DbPool>,
}

impl PartService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: PartInput) -> Result<part::Model, ServiceError> {
        let part_id = require(input.part_id, "part_id")?;
        let name = require(input.name, "name")?;
        let category = require(input.category, "category")?;
        let part_number = require(input.part_number, "part_number")?;
        let price = require(input.price, "price")?;
        let quantity_in_stock = require(input.quantity_in_stock, "quantity_in_stock")?;
        let reorder_threshold = require(input.reorder_threshold, "reorder_threshold")?;
        let reorder_quantity = require(input.reorder_quantity, "reorder_quantity")?;

        let now = Utc::now();
        let created = part::ActiveModel {
            part_id: Set(part_id),
            name: Set(name),
            description: Set(input.description),
            category: Set(category),
            part_number: Set(part_number),
            price: Set(price),
            quantity_in_stock: Set(quantity_in_stock),
            reorder_threshold: Set(reorder_threshold),
            reorder_quantity: Set(reorder_quantity),
            supplier_id: Set(input.supplier_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(ServiceError::from_write)?;

        info!(part_id = %created.part_id, "part added");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<part::Model, ServiceError> {
        part::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Part not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<part::Model>, ServiceError> {
        Ok(part::Entity::find()
            .order_by_asc(part::Column::PartId)
            .all(&*self.db)
            .await?)
    }

    /// Full-overwrite update; the stored identifier is not reassignable.
    pub async fn update(&self, id: &str, input: PartInput) -> Result<part::Model, ServiceError> {
        let existing = self.get(id).await?;

        let mut active: part::ActiveModel = existing.into();
        active.name = Set(require(input.name, "name")?);
        active.description = Set(input.description);
        active.category = Set(require(input.category, "category")?);
        active.part_number = Set(require(input.part_number, "part_number")?);
        active.price = Set(require(input.price, "price")?);
        active.quantity_in_stock = Set(require(input.quantity_in_stock, "quantity_in_stock")?);
        active.reorder_threshold = Set(require(input.reorder_threshold, "reorder_threshold")?);
        active.reorder_quantity = Set(require(input.reorder_quantity, "reorder_quantity")?);
        active.supplier_id = Set(input.supplier_id);
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(part_id = %updated.part_id, "part updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = part::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("Part not found".into()));
        }
        info!(part_id = %id, "part deleted");
        Ok(())
    }
}
