//! Sequential identifier assignment for vehicles, customers, and sales.
//!
//! Identifiers are a one-letter class prefix followed by a base-10 integer
//! (`V12`, `C1050`, `S3`). Numbers are handed out by a per-class counter row
//! that is bumped atomically inside the caller's transaction, so two
//! concurrent creates serialize on the row lock instead of both computing
//! the same "next" value from a table scan. The first assignment for a class
//! seeds the counter from whatever identifiers already exist.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::ServiceError;
use crate::models::{customer, entity_counter, sale, vehicle};

/// Entity classes with sequencer-assigned identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    Vehicle,
    Customer,
    Sale,
}

impl EntityClass {
    pub fn prefix(self) -> char {
        match self {
            Self::Vehicle => 'V',
            Self::Customer => 'C',
            Self::Sale => 'S',
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Customer => "customer",
            Self::Sale => "sale",
        }
    }
}

/// Produce the next identifier for `class`.
///
/// Must be called on the same transaction as the insert that consumes the
/// identifier: the counter bump and the insert then commit or roll back
/// together, and the counter row lock is held until commit.
pub async fn next_id<C: ConnectionTrait>(
    conn: &C,
    class: EntityClass,
) -> Result<String, ServiceError> {
    let bumped = entity_counter::Entity::update_many()
        .col_expr(
            entity_counter::Column::LastValue,
            Expr::col(entity_counter::Column::LastValue).add(1),
        )
        .filter(entity_counter::Column::EntityClass.eq(class.key()))
        .exec(conn)
        .await?;

    let value = if bumped.rows_affected == 0 {
        // First assignment for this class: seed from existing data. If two
        // transactions race here, the counter's primary key makes the later
        // insert fail with a conflict instead of double-assigning.
        let next = last_assigned(conn, class).await? + 1;
        entity_counter::ActiveModel {
            entity_class: Set(class.key().to_owned()),
            last_value: Set(next),
        }
        .insert(conn)
        .await
        .map_err(ServiceError::from_write)?;
        next
    } else {
        entity_counter::Entity::find_by_id(class.key())
            .one(conn)
            .await?
            .ok_or_else(|| {
                ServiceError::DataError(format!(
                    "counter row for {} disappeared mid-transaction",
                    class.key()
                ))
            })?
            .last_value
    };

    Ok(format!("{}{}", class.prefix(), value))
}

/// Numeric value of the most recent identifier of `class`, or 0 when the
/// table is empty.
async fn last_assigned<C: ConnectionTrait>(
    conn: &C,
    class: EntityClass,
) -> Result<i64, ServiceError> {
    let last = match class {
        EntityClass::Vehicle => vehicle::Entity::find()
            .order_by_desc(vehicle::Column::VehicleId)
            .one(conn)
            .await?
            .map(|m| m.vehicle_id),
        EntityClass::Customer => customer::Entity::find()
            .order_by_desc(customer::Column::CustomerId)
            .one(conn)
            .await?
            .map(|m| m.customer_id),
        EntityClass::Sale => sale::Entity::find()
            .order_by_desc(sale::Column::SaleId)
            .one(conn)
            .await?
            .map(|m| m.sale_id),
    };

    match last {
        None => Ok(0),
        Some(id) => parse_numeric_suffix(class.prefix(), &id),
    }
}

/// Parse the numeric suffix of a stored identifier, refusing anything that
/// does not match `<prefix><digits>`. Malformed legacy data must fail loudly
/// rather than seed the sequence with garbage.
pub fn parse_numeric_suffix(prefix: char, id: &str) -> Result<i64, ServiceError> {
    let suffix = id.strip_prefix(prefix).ok_or_else(|| {
        ServiceError::DataError(format!(
            "stored identifier {id:?} does not carry the {prefix:?} prefix"
        ))
    })?;

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::DataError(format!(
            "stored identifier {id:?} has a non-numeric suffix"
        )));
    }

    suffix.parse::<i64>().map_err(|_| {
        ServiceError::DataError(format!("stored identifier {id:?} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleStatus;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn test_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await.expect("sqlite test database");
        crate::db::ensure_schema(&db).await.expect("schema");
        db
    }

    async fn insert_vehicle(db: &DatabaseConnection, vehicle_id: &str) {
        let now = Utc::now();
        vehicle::ActiveModel {
            vehicle_id: Set(vehicle_id.to_owned()),
            make: Set("Toyota".to_owned()),
            model: Set("Corolla".to_owned()),
            year: Set(2021),
            vin: Set(format!("VIN-{vehicle_id}")),
            purchase_price: Set(Decimal::new(18_000_00, 2)),
            price: Set(Decimal::new(20_000_00, 2)),
            date_acquired: Set(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            status: Set(VehicleStatus::InStock),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("insert vehicle");
    }

    #[test]
    fn suffix_parsing_accepts_plain_numbers() {
        assert_eq!(parse_numeric_suffix('V', "V1").unwrap(), 1);
        assert_eq!(parse_numeric_suffix('C', "C1050").unwrap(), 1050);
    }

    #[test]
    fn suffix_parsing_rejects_malformed_identifiers() {
        assert!(matches!(
            parse_numeric_suffix('V', "VX9"),
            Err(ServiceError::DataError(_))
        ));
        assert!(matches!(
            parse_numeric_suffix('V', "V"),
            Err(ServiceError::DataError(_))
        ));
        assert!(matches!(
            parse_numeric_suffix('V', "12"),
            Err(ServiceError::DataError(_))
        ));
        assert!(matches!(
            parse_numeric_suffix('V', "V12b"),
            Err(ServiceError::DataError(_))
        ));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let db = test_db().await;
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V1");
    }

    #[tokio::test]
    async fn seeds_from_existing_identifiers() {
        let db = test_db().await;
        insert_vehicle(&db, "V7").await;
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V8");
    }

    #[tokio::test]
    async fn counter_advances_once_seeded() {
        let db = test_db().await;
        assert_eq!(next_id(&db, EntityClass::Sale).await.unwrap(), "S1");
        assert_eq!(next_id(&db, EntityClass::Sale).await.unwrap(), "S2");
        assert_eq!(next_id(&db, EntityClass::Sale).await.unwrap(), "S3");
    }

    #[tokio::test]
    async fn classes_count_independently() {
        let db = test_db().await;
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V1");
        assert_eq!(next_id(&db, EntityClass::Customer).await.unwrap(), "C1");
        assert_eq!(next_id(&db, EntityClass::Customer).await.unwrap(), "C2");
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V2");
    }

    #[tokio::test]
    async fn retired_numbers_are_not_reused() {
        let db = test_db().await;
        insert_vehicle(&db, "V1").await;
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V2");
        insert_vehicle(&db, "V2").await;
        vehicle::Entity::delete_by_id("V2")
            .exec(&db)
            .await
            .expect("delete vehicle");
        // The counter only moves forward; deleting the latest row must not
        // hand its number back out.
        assert_eq!(next_id(&db, EntityClass::Vehicle).await.unwrap(), "V3");
    }

    #[tokio::test]
    async fn malformed_legacy_identifier_is_a_data_error() {
        let db = test_db().await;
        insert_vehicle(&db, "VEH-BAD").await;
        assert!(matches!(
            next_id(&db, EntityClass::Vehicle).await,
            Err(ServiceError::DataError(_))
        ));
    }
}
