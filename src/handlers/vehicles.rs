use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use crate::auth::AdminUser;
use crate::errors::ServiceError;
use crate::models::{vehicle, VehicleStatus};
use crate::services::vehicles::VehicleInput;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct VehicleListQuery {
    /// One of the vehicle statuses, or `All` for no filter
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VehicleResponse {
    pub message: String,
    pub vehicle: vehicle::Model,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_status_filter(raw: Option<String>) -> Result<Option<VehicleStatus>, ServiceError> {
    match raw.as_deref() {
        None | Some("") | Some("All") => Ok(None),
        Some(value) => VehicleStatus::from_str(value).map(Some).map_err(|_| {
            ServiceError::ValidationError(format!(
                "status must be one of in_stock, sold, maintenance, All (got {value:?})"
            ))
        }),
    }
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let status = parse_status_filter(query.status)?;
    let vehicles = state.services.vehicles.list(status).await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let vehicle = state.services.vehicles.get(&id).await?;
    Ok(Json(vehicle))
}

async fn add_vehicle(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<VehicleInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let vehicle = state.services.vehicles.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(VehicleResponse {
            message: "Vehicle added successfully".into(),
            vehicle,
        }),
    ))
}

async fn edit_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _admin: AdminUser,
    Json(input): Json<VehicleInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let vehicle = state.services.vehicles.update(&id, input).await?;
    Ok(Json(VehicleResponse {
        message: "Vehicle updated successfully".into(),
        vehicle,
    }))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.vehicles.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Vehicle deleted successfully".into(),
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/add", post(add_vehicle))
        .route("/edit/:id", put(edit_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/delete/:id", delete(delete_vehicle))
}
