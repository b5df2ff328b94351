use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// SUV-category detail row for a vehicle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Suv)]
#[sea_orm(table_name = "suvs")]
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
    pub seating_capacity: i32,
    #[sea_orm(column_type = "Decimal(Some((6, 1)))")]
    pub cargo_capacity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((4, 1)))")]
    pub ground_clearance: Decimal,
    pub awd_4wd: bool,
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
