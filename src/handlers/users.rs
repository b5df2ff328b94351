use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AuthenticatedUser;
use crate::errors::ServiceError;
use crate::models::customer;
use crate::services::customers::{CustomerUpdateInput, RegisterInput};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[schema(write_only)]
    pub password: Option<String>,
}

/// Identity subset echoed back after registration.
#[derive(Serialize, ToSchema)]
pub struct UserSummary {
    pub customer_id: String,
    pub username: String,
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub user: customer::Model,
}

async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = state.services.customers.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".into(),
            user: UserSummary {
                customer_id: created.customer_id,
                username: created.username,
                email: created.email,
            },
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let email = input
        .email
        .ok_or_else(|| ServiceError::ValidationError("Missing required field: email".into()))?;
    let password = input
        .password
        .ok_or_else(|| ServiceError::ValidationError("Missing required field: password".into()))?;

    let outcome = state.services.customers.login(&email, &password).await?;
    Ok(Json(LoginResponse {
        message: outcome.message.into(),
        token: outcome.token,
    }))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<impl IntoResponse, ServiceError> {
    if !claims.can_access_customer(&id) {
        return Err(ServiceError::Forbidden(
            "You can only view your own profile".into(),
        ));
    }
    let user = state.services.customers.get(&id).await?;
    Ok(Json(user))
}

async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<CustomerUpdateInput>,
) -> Result<impl IntoResponse, ServiceError> {
    if !claims.can_access_customer(&id) {
        return Err(ServiceError::Forbidden(
            "You can only edit your own profile".into(),
        ));
    }
    let user = state.services.customers.update(&id, input).await?;
    Ok(Json(UserUpdatedResponse {
        message: "User updated successfully".into(),
        user,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/:id", get(get_user))
        .route("/edit/:id", put(edit_user))
}
