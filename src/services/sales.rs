use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use super::require;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{customer, sale, vehicle, PaymentMethod};
use crate::sequencer::{self, EntityClass};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaleInput {
    pub vehicle_id: Option<String>,
    pub customer_id: Option<String>,
    pub sale_date: Option<NaiveDate>,
    pub sale_price: Option<Decimal>,
    /// One of `cash`, `credit`, `finance`
    pub payment_method: Option<String>,
    pub finance_term: Option<i32>,
    pub notes: Option<String>,
}

/// Service for recording and listing sales. Sales are immutable once
/// written; there is no update or delete surface.
#[derive(Clone)]
pub struct SaleService {
    db: Arc<DbPool>,
}

impl SaleService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Records a sale with a sequencer-assigned identifier.
    ///
    /// Recording a sale does not touch the vehicle's status; moving a
    /// vehicle to `sold` is a separate explicit vehicle update.
    pub async fn create(&self, input: SaleInput) -> Result<sale::Model, ServiceError> {
        let vehicle_id = require(input.vehicle_id, "vehicle_id")?;
        let customer_id = require(input.customer_id, "customer_id")?;
        let sale_date = require(input.sale_date, "sale_date")?;
        let sale_price = require(input.sale_price, "sale_price")?;
        let method_raw = require(input.payment_method, "payment_method")?;

        let payment_method = PaymentMethod::from_str(&method_raw).map_err(|_| {
            ServiceError::ValidationError(
                "payment_method must be one of cash, credit, finance".into(),
            )
        })?;

        if payment_method == PaymentMethod::Finance && input.finance_term.is_none() {
            return Err(ServiceError::ValidationError(
                "finance_term is required for financed sales".into(),
            ));
        }

        // Resolve the references up front so a dangling id reads as a 404
        // instead of a foreign-key failure.
        vehicle::Entity::find_by_id(vehicle_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Vehicle not found".into()))?;
        customer::Entity::find_by_id(customer_id.as_str())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;

        let txn = self.db.begin().await?;
        let sale_id = sequencer::next_id(&txn, EntityClass::Sale).await?;

        let created = sale::ActiveModel {
            sale_id: Set(sale_id),
            vehicle_id: Set(vehicle_id),
            customer_id: Set(customer_id),
            sale_date: Set(sale_date),
            sale_price: Set(sale_price),
            payment_method: Set(payment_method),
            finance_term: Set(input.finance_term),
            notes: Set(input.notes),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await
        .map_err(ServiceError::from_write)?;
        txn.commit().await?;

        info!(sale_id = %created.sale_id, vehicle_id = %created.vehicle_id, "sale recorded");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<sale::Model, ServiceError> {
        sale::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Sale not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<sale::Model>, ServiceError> {
        Ok(sale::Entity::find()
            .order_by_asc(sale::Column::SaleId)
            .all(&*self.db)
            .await?)
    }
}
