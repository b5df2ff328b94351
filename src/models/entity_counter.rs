use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Monotonic counter backing sequential identifier assignment, one row per
/// entity class. Incremented inside the same transaction as the insert that
/// consumes the number.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entity_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_class: String,
    pub last_value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
