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
use crate::models::car;
use crate::services::cars::CarInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CarDeletedResponse {
    pub message: String,
    pub car: car::Model,
}

async fn list_cars(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let cars = state.services.cars.list().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let car = state.services.cars.get(id).await?;
    Ok(Json(car))
}

async fn add_car(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<CarInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let car = state.services.cars.create(input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn edit_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
    Json(input): Json<CarInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let car = state.services.cars.update(id, input).await?;
    Ok(Json(car))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let car = state.services.cars.delete(id).await?;
    Ok(Json(CarDeletedResponse {
        message: "Car deleted successfully".into(),
        car,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/add", post(add_car))
        .route("/edit/:id", put(edit_car))
        .route("/:id", get(get_car))
        .route("/delete/:id", delete(delete_car))
}
