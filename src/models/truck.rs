use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Truck-category detail row for a vehicle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Truck)]
#[sea_orm(table_name = "trucks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_id: String,
    pub body_type: String,
    pub fuel_type: String,
    pub transmission: String,
    pub mileage: i32,
    #[sea_orm(column_type = "Decimal(Some((4, 1)))")]
    pub engine_size: Decimal,
    #[sea_orm(column_type = "Decimal(Some((4, 1)))")]
    pub bed_length: Decimal,
    pub towing_capacity: i32,
    pub payload_capacity: i32,
    pub cab_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::VehicleId"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
