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
use crate::services::parts::PartInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

async fn list_parts(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let parts = state.services.parts.list().await?;
    Ok(Json(parts))
}

async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let part = state.services.parts.get(&id).await?;
    Ok(Json(part))
}

async fn add_part(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(input): Json<PartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let part = state.services.parts.create(input).await?;
    Ok((StatusCode::CREATED, Json(part)))
}

async fn edit_part(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _admin: AdminUser,
    Json(input): Json<PartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let part = state.services.parts.update(&id, input).await?;
    Ok(Json(part))
}

async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.parts.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Part deleted successfully".into(),
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parts))
        .route("/add", post(add_part))
        .route("/edit/:id", put(edit_part))
        .route("/:id", get(get_part))
        .route("/delete/:id", delete(delete_part))
}
