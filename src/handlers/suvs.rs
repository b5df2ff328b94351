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
use crate::models::suv;
use crate::services::suvs::SuvInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SuvDeletedResponse {
    pub message: String,
    pub suv: suv::Model,
}

async fn list_suvs(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let suvs = state.services.suvs.list().await?;
    Ok(Json(suvs))
}

async fn get_suv(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let suv = state.services.suvs.get(id).await?;
    Ok(Json(suv))
}

async fn add_suv(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<SuvInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let suv = state.services.suvs.create(input).await?;
    Ok((StatusCode::CREATED, Json(suv)))
}

async fn edit_suv(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
    Json(input): Json<SuvInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let suv = state.services.suvs.update(id, input).await?;
    Ok(Json(suv))
}

async fn delete_suv(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let suv = state.services.suvs.delete(id).await?;
    Ok(Json(SuvDeletedResponse {
        message: "SUV deleted successfully".into(),
        suv,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suvs).post(add_suv))
        .route("/edit/:id", put(edit_suv))
        .route("/:id", get(get_suv))
        .route("/delete/:id", delete(delete_suv))
}
