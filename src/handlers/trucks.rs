use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::AdminUser;
use crate::errors::ServiceError;
use crate::models::truck;
use crate::services::trucks::TruckInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct TruckDeletedResponse {
    pub message: String,
    pub truck: truck::Model,
}

async fn list_trucks(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let trucks = state.services.trucks.list().await?;
    Ok(Json(trucks))
}

async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let truck = state.services.trucks.get(id).await?;
    Ok(Json(truck))
}

async fn add_truck(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<TruckInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let truck = state.services.trucks.create(input).await?;
    Ok((StatusCode::CREATED, Json(truck)))
}

async fn edit_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
    Json(input): Json<TruckInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let truck = state.services.trucks.update(id, input).await?;
    Ok(Json(truck))
}

async fn delete_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let truck = state.services.trucks.delete(id).await?;
    Ok(Json(TruckDeletedResponse {
        message: "Truck deleted successfully".into(),
        truck,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trucks).post(add_truck))
        .route("/edit/:id", put(edit_truck))
        .route("/:id", get(get_truck))
        .route("/delete/:id", delete(delete_truck))
}
