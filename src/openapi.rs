use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::ErrorResponse;
use crate::handlers;
use crate::models;
use crate::services;

/// OpenAPI document for the HTTP surface. Served by the Swagger UI mounted
/// in `main`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dealership-api",
        description = "Dealership inventory and sales management API"
    ),
    components(schemas(
        ErrorResponse,
        models::vehicle::Model,
        models::VehicleStatus,
        models::customer::Model,
        models::sale::Model,
        models::PaymentMethod,
        models::car::Model,
        models::sedan::Model,
        models::suv::Model,
        models::truck::Model,
        models::part::Model,
        models::vehicle_part::Model,
        services::vehicles::VehicleInput,
        services::customers::RegisterInput,
        services::customers::CustomerUpdateInput,
        services::sales::SaleInput,
        services::cars::CarInput,
        services::sedans::SedanInput,
        services::suvs::SuvInput,
        services::trucks::TruckInput,
        services::parts::PartInput,
        services::vehicle_parts::VehiclePartInput,
        handlers::users::LoginRequest,
        handlers::users::LoginResponse,
        handlers::users::RegisterResponse,
        handlers::users::UserSummary,
        handlers::users::UserUpdatedResponse,
        handlers::vehicles::VehicleResponse,
        handlers::vehicles::MessageResponse,
        handlers::sales::SaleRecordedResponse,
    )),
    tags(
        (name = "vehicles", description = "Vehicle inventory"),
        (name = "subtypes", description = "Car, sedan, SUV and truck detail records"),
        (name = "parts", description = "Parts inventory and installations"),
        (name = "users", description = "Registration, login and profiles"),
        (name = "sales", description = "Recorded sales")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
