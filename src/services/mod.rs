pub mod cars;
pub mod customers;
pub mod parts;
pub mod sales;
pub mod sedans;
pub mod suvs;
pub mod trucks;
pub mod vehicle_parts;
pub mod vehicles;

use crate::errors::ServiceError;

/// Unwrap a submitted field, rejecting absence with a 400 naming the field.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::ValidationError(format!("Missing required field: {field}")))
}
