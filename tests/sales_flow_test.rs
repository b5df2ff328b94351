mod common;

use axum::http::Method;
use common::{read_json, TestApp};
use serde_json::json;

fn sale_payload(vehicle_id: &str, customer_id: &str) -> serde_json::Value {
    json!({
        "vehicle_id": vehicle_id,
        "customer_id": customer_id,
        "sale_date": "2024-06-01",
        "sale_price": "21500.00",
        "payment_method": "cash",
    })
}

/// The end-to-end path: a vehicle is listed in stock, a sale is recorded for
/// it, and the vehicle's status stays in_stock until an explicit update
/// moves it. Sale recording and vehicle lifecycle are deliberately
/// decoupled.
#[tokio::test]
async fn recording_a_sale_does_not_touch_vehicle_status() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (customer_id, customer_token) =
        app.register_customer("buyer@example.com", "password-1").await;

    // In stock before the sale.
    let response = app
        .request(Method::GET, "/api/vehicles?status=in_stock", None, None)
        .await;
    let listed = read_json(response).await;
    assert_eq!(listed[0]["vehicle_id"], vehicle_id);

    // The customer records their own purchase.
    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload(&vehicle_id, &customer_id)),
            Some(&customer_token),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Sale recorded");
    assert_eq!(body["sale"]["sale_id"], "S1");
    assert_eq!(body["sale"]["vehicle_id"], vehicle_id);

    // Still in stock: no implicit coupling.
    let response = app
        .request(Method::GET, &format!("/api/vehicles/{vehicle_id}"), None, None)
        .await;
    let fetched = read_json(response).await;
    assert_eq!(fetched["status"], "in_stock");

    // The explicit status update is what moves it.
    let response = app
        .request(
            Method::PUT,
            &format!("/api/vehicles/edit/{vehicle_id}"),
            Some(json!({
                "make": "Toyota",
                "model": "Corolla",
                "year": 2021,
                "vin": fetched["vin"],
                "purchase_price": "18000.00",
                "price": "20000.00",
                "date_acquired": "2024-03-01",
                "status": "sold",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .request(Method::GET, "/api/vehicles?status=sold", None, None)
        .await;
    let listed = read_json(response).await;
    assert_eq!(listed[0]["vehicle_id"], vehicle_id);
}

#[tokio::test]
async fn finance_sales_require_a_term() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (customer_id, _) = app.register_customer("buyer@example.com", "password-1").await;

    let mut payload = sale_payload(&vehicle_id, &customer_id);
    payload["payment_method"] = json!("finance");

    let response = app
        .request(Method::POST, "/api/sales/add", Some(payload.clone()), Some(&admin))
        .await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(body["error"], "finance_term is required for financed sales");

    payload["finance_term"] = json!(48);
    let response = app
        .request(Method::POST, "/api/sales/add", Some(payload), Some(&admin))
        .await;
    assert_eq!(response.status(), 201);
    let body = read_json(response).await;
    assert_eq!(body["sale"]["payment_method"], "finance");
    assert_eq!(body["sale"]["finance_term"], 48);
}

#[tokio::test]
async fn unknown_payment_method_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (customer_id, _) = app.register_customer("buyer@example.com", "password-1").await;

    let mut payload = sale_payload(&vehicle_id, &customer_id);
    payload["payment_method"] = json!("barter");

    let response = app
        .request(Method::POST, "/api/sales/add", Some(payload), Some(&admin))
        .await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(
        body["error"],
        "payment_method must be one of cash, credit, finance"
    );
}

#[tokio::test]
async fn customers_can_only_buy_for_themselves() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (victim_id, _) = app.register_customer("victim@example.com", "password-1").await;
    let (_, mallory_token) = app
        .register_customer("mallory@example.com", "password-2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload(&vehicle_id, &victim_id)),
            Some(&mallory_token),
        )
        .await;
    assert_eq!(response.status(), 403);

    // The administrator can record a sale for any customer.
    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload(&vehicle_id, &victim_id)),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn sales_listing_is_admin_only() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (customer_id, customer_token) =
        app.register_customer("buyer@example.com", "password-1").await;

    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload(&vehicle_id, &customer_id)),
            Some(&customer_token),
        )
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .request(Method::GET, "/api/sales", None, Some(&customer_token))
        .await;
    assert_eq!(response.status(), 403);

    let response = app.request(Method::GET, "/api/sales", None, Some(&admin)).await;
    assert_eq!(response.status(), 200);
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["sale_id"], "S1");
}

#[tokio::test]
async fn sale_references_must_exist() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let vehicle_id = app.seed_vehicle(&admin).await;
    let (customer_id, _) = app.register_customer("buyer@example.com", "password-1").await;

    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload("V999", &customer_id)),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 404);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Vehicle not found");

    let response = app
        .request(
            Method::POST,
            "/api/sales/add",
            Some(sale_payload(&vehicle_id, "C999")),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status(), 404);
}
