use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use dealership_api::{auth, config::AppConfig, db, AppState};

pub const ADMIN_EMAIL: &str = "admin@dealership.test";
pub const ADMIN_PASSWORD: &str = "admin-test-password";

/// Helper harness spinning up the real router against a throwaway SQLite
/// database file.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
    db_path: PathBuf,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_path =
            std::env::temp_dir().join(format!("dealership_test_{}.db", Uuid::new_v4()));
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let admin_hash = auth::hash_password(ADMIN_PASSWORD).expect("hash admin password");
        let cfg = AppConfig::new(
            database_url,
            "test_secret_key_for_testing_purposes_only".into(),
            3600,
            ADMIN_EMAIL.into(),
            admin_hash,
            "127.0.0.1".into(),
            18_080,
            "test".into(),
        );

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::ensure_schema(&pool).await.expect("failed to create schema");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = Router::new()
            .route("/health", get(dealership_api::health::health_check))
            .nest("/api", dealership_api::api_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            db_path,
        }
    }

    /// Send a request against the router with an optional bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header("authorization", format!("Bearer {}", tok));
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Log in as the configured administrator and return the bearer token.
    pub async fn admin_token(&self) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/user/login",
                Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
                None,
            )
            .await;
        assert_eq!(response.status(), 200, "admin login should succeed");
        let body = read_json(response).await;
        body["token"].as_str().expect("token in response").to_owned()
    }

    /// Register a customer and return its assigned id plus a login token.
    pub async fn register_customer(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                Method::POST,
                "/api/user/register",
                Some(json!({
                    "username": email.split('@').next().unwrap(),
                    "first_name": "Test",
                    "last_name": "Customer",
                    "email": email,
                    "phone": "555-0100",
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status(), 201, "registration should succeed");
        let body = read_json(response).await;
        let customer_id = body["user"]["customer_id"]
            .as_str()
            .expect("customer_id in response")
            .to_owned();

        let response = self
            .request(
                Method::POST,
                "/api/user/login",
                Some(json!({"email": email, "password": password})),
                None,
            )
            .await;
        assert_eq!(response.status(), 200, "customer login should succeed");
        let body = read_json(response).await;
        let token = body["token"].as_str().expect("token in response").to_owned();

        (customer_id, token)
    }

    /// Create a vehicle as admin and return its assigned id.
    #[allow(dead_code)]
    pub async fn seed_vehicle(&self, admin_token: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/vehicles/add",
                Some(json!({
                    "make": "Toyota",
                    "model": "Corolla",
                    "year": 2021,
                    "vin": format!("JTD{}", Uuid::new_v4().simple()),
                    "purchase_price": "18000.00",
                    "price": "20000.00",
                    "date_acquired": "2024-03-01",
                })),
                Some(admin_token),
            )
            .await;
        assert_eq!(response.status(), 201, "vehicle creation should succeed");
        let body = read_json(response).await;
        body["vehicle"]["vehicle_id"]
            .as_str()
            .expect("vehicle_id in response")
            .to_owned()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Decode a response body as JSON.
pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Read a decimal field numerically. SQLite round-trips decimals through
/// floating point, so trailing zeros are not stable enough to compare as
/// strings.
#[allow(dead_code)]
pub fn decimal(value: &Value) -> f64 {
    match value {
        Value::String(s) => s.parse().expect("decimal string should parse"),
        Value::Number(n) => n.as_f64().expect("decimal number should fit in f64"),
        other => panic!("expected a decimal value, got {other:?}"),
    }
}
