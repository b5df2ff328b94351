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
use crate::models::sedan;
use crate::services::sedans::SedanInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SedanDeletedResponse {
    pub message: String,
    pub sedan: sedan::Model,
}

async fn list_sedans(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let sedans = state.services.sedans.list().await?;
    Ok(Json(sedans))
}

async fn get_sedan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let sedan = state.services.sedans.get(id).await?;
    Ok(Json(sedan))
}

async fn add_sedan(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<SedanInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let sedan = state.services.sedans.create(input).await?;
    Ok((StatusCode::CREATED, Json(sedan)))
}

async fn edit_sedan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
    Json(input): Json<SedanInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let sedan = state.services.sedans.update(id, input).await?;
    Ok(Json(sedan))
}

async fn delete_sedan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let sedan = state.services.sedans.delete(id).await?;
    Ok(Json(SedanDeletedResponse {
        message: "Sedan deleted successfully".into(),
        sedan,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sedans).post(add_sedan))
        .route("/edit/:id", put(edit_sedan))
        .route("/:id", get(get_sedan))
        .route("/delete/:id", delete(delete_sedan))
}
