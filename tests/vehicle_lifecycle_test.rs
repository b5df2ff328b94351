mod common;

use axum::http::Method;
use common::{decimal, read_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_assigns_id_and_defaults_status_to_in_stock() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            Method::POST,
            "/api/vehicles/add",
            Some(json!({
                "make": "Honda",
                "model": "Civic",
                "year": 2022,
                "vin": "2HGFE2F59NH000001",
                "purchase_price": "19500.00",
                "price": "22000.00",
                "date_acquired": "2024-05-10",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Vehicle added successfully");
    assert_eq!(body["vehicle"]["vehicle_id"], "V1");
    assert_eq!(body["vehicle"]["status"], "in_stock");

    // Round-trip: every submitted field comes back on get.
    let response = app.request(Method::GET, "/api/vehicles/V1", None, None).await;
    assert_eq!(response.status(), 200);
    let fetched = read_json(response).await;
    assert_eq!(fetched["make"], "Honda");
    assert_eq!(fetched["model"], "Civic");
    assert_eq!(fetched["year"], 2022);
    assert_eq!(fetched["vin"], "2HGFE2F59NH000001");
    assert_eq!(decimal(&fetched["purchase_price"]), 19500.0);
    assert_eq!(decimal(&fetched["price"]), 22000.0);
    assert_eq!(fetched["date_acquired"], "2024-05-10");
    assert_eq!(fetched["status"], "in_stock");
}

#[tokio::test]
async fn identifiers_increase_and_survive_deletion() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let first = app.seed_vehicle(&admin).await;
    let second = app.seed_vehicle(&admin).await;
    assert_eq!(first, "V1");
    assert_eq!(second, "V2");

    let response = app
        .request(Method::DELETE, "/api/vehicles/delete/V2", None, Some(&admin))
        .await;
    assert_eq!(response.status(), 200);

    // The retired number is not reused.
    let third = app.seed_vehicle(&admin).await;
    assert_eq!(third, "V3");
}

#[tokio::test]
async fn mutations_require_an_admin_credential() {
    let app = TestApp::new().await;
    let (_, customer_token) = app.register_customer("c@example.com", "password-1").await;

    let payload = json!({
        "make": "Ford",
        "model": "Focus",
        "year": 2020,
        "vin": "1FADP3F20LL000001",
        "purchase_price": "12000.00",
        "price": "14000.00",
        "date_acquired": "2024-01-15",
    });

    let response = app
        .request(Method::POST, "/api/vehicles/add", Some(payload.clone()), None)
        .await;
    assert_eq!(response.status(), 401);

    let response = app
        .request(
            Method::POST,
            "/api/vehicles/add",
            Some(payload),
            Some(&customer_token),
        )
        .await;
    assert_eq!(response.status(), 403);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Administrator access required");
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            Method::POST,
            "/api/vehicles/add",
            Some(json!({
                "make": "Honda",
                "model": "Civic",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Missing required field"));
}

#[tokio::test]
async fn list_filters_by_status_with_all_sentinel() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = app.seed_vehicle(&admin).await;

    let response = app
        .request(Method::GET, "/api/vehicles?status=in_stock", None, None)
        .await;
    assert_eq!(response.status(), 200);
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["vehicle_id"], id);

    let response = app
        .request(Method::GET, "/api/vehicles?status=sold", None, None)
        .await;
    let listed = read_json(response).await;
    assert!(listed.as_array().unwrap().is_empty());

    // `All` means no filter, as does omitting the parameter.
    for uri in ["/api/vehicles?status=All", "/api/vehicles"] {
        let response = app.request(Method::GET, uri, None, None).await;
        let listed = read_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1, "uri {uri}");
    }

    let response = app
        .request(Method::GET, "/api/vehicles?status=totalled", None, None)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn update_overwrites_the_full_record() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = app.seed_vehicle(&admin).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/vehicles/edit/{id}"),
            Some(json!({
                "make": "Toyota",
                "model": "Corolla",
                "year": 2021,
                "vin": "JTDREPLACED000001",
                "purchase_price": "18000.00",
                "price": "19250.00",
                "date_acquired": "2024-03-01",
                "status": "maintenance",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Vehicle updated successfully");

    let response = app
        .request(Method::GET, &format!("/api/vehicles/{id}"), None, None)
        .await;
    let fetched = read_json(response).await;
    assert_eq!(decimal(&fetched["price"]), 19250.0);
    assert_eq!(fetched["status"], "maintenance");
    assert_eq!(fetched["vin"], "JTDREPLACED000001");
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(Method::GET, "/api/vehicles/V999", None, None)
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request(
            Method::PUT,
            "/api/vehicles/edit/V999",
            Some(json!({
                "make": "x", "model": "x", "year": 2000, "vin": "x",
                "purchase_price": "1.00", "price": "1.00",
                "date_acquired": "2024-01-01", "status": "in_stock",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request(Method::DELETE, "/api/vehicles/delete/V999", None, Some(&admin))
        .await;
    assert_eq!(response.status(), 404);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Vehicle not found");
}
