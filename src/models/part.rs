use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An inventory part. Part numbers come from the supplier catalog, so the
/// identifier is client-supplied rather than sequencer-assigned.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Part)]
#[sea_orm(table_name = "parts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub part_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub part_number: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub quantity_in_stock: i32,
    pub reorder_threshold: i32,
    pub reorder_quantity: i32,
    pub supplier_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_part::Entity")]
    VehicleParts,
}

impl Related<super::vehicle_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
