use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{AdminUser, AuthenticatedUser};
use crate::errors::ServiceError;
use crate::models::sale;
use crate::services::sales::SaleInput;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SaleRecordedResponse {
    pub message: String,
    pub sale: sale::Model,
}

async fn add_sale(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<SaleInput>,
) -> Result<impl IntoResponse, ServiceError> {
    // Customers may only record purchases for themselves; field presence is
    // the service's concern.
    if !claims.is_admin() {
        if let Some(buyer) = input.customer_id.as_deref() {
            if !claims.can_access_customer(buyer) {
                return Err(ServiceError::Forbidden(
                    "You can only record sales for your own account".into(),
                ));
            }
        }
    }

    let sale = state.services.sales.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(SaleRecordedResponse {
            message: "Sale recorded".into(),
            sale,
        }),
    ))
}

async fn list_sales(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ServiceError> {
    let sales = state.services.sales.list().await?;
    Ok(Json(sales))
}

async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<impl IntoResponse, ServiceError> {
    let sale = state.services.sales.get(&id).await?;
    if !claims.can_access_customer(&sale.customer_id) {
        return Err(ServiceError::Forbidden(
            "You can only view your own sales".into(),
        ));
    }
    Ok(Json(sale))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sales))
        .route("/add", post(add_sale))
        .route("/:id", get(get_sale))
}
