use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::AdminUser;
use crate::errors::ServiceError;
use crate::models::vehicle_part;
use crate::services::vehicle_parts::VehiclePartInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct VehiclePartRemovedResponse {
    pub message: String,
    pub vehicle_part: vehicle_part::Model,
}

async fn list_vehicle_parts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state.services.vehicle_parts.list().await?;
    Ok(Json(rows))
}

async fn list_for_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state
        .services
        .vehicle_parts
        .list_for_vehicle(&vehicle_id)
        .await?;
    Ok(Json(rows))
}

async fn get_vehicle_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.vehicle_parts.get(id).await?;
    Ok(Json(row))
}

async fn add_vehicle_part(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<VehiclePartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.vehicle_parts.create(input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn edit_vehicle_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
    Json(input): Json<VehiclePartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.vehicle_parts.update(id, input).await?;
    Ok(Json(row))
}

async fn delete_vehicle_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.vehicle_parts.delete(id).await?;
    Ok(Json(VehiclePartRemovedResponse {
        message: "Vehicle part removed successfully".into(),
        vehicle_part: row,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicle_parts))
        .route("/add", post(add_vehicle_part))
        .route("/vehicle/:vehicle_id", get(list_for_vehicle))
        .route("/edit/:id", put(edit_vehicle_part))
        .route("/:id", get(get_vehicle_part))
        .route("/delete/:id", delete(delete_vehicle_part))
}
