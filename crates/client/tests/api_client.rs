//! Integration tests for the API client against a mock backend.
//!
//! A throwaway axum server bound to an ephemeral port plays the role of the
//! ShopJoy backend, wrapping every response in the same envelope the real
//! backend uses and recording each request it sees so tests can assert on
//! headers and query strings.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use shopjoy_client::{ApiClient, ApiConfig, AuthContext, SessionStore};
use shopjoy_core::{OrderAction, OrderId, ProductId};

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    query: Option<String>,
    user_id_header: Option<String>,
}

type RequestLog = Arc<Mutex<Vec<Recorded>>>;

async fn record(State(log): State<RequestLog>, request: Request<axum::body::Body>, next: Next) -> Response {
    let entry = Recorded {
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        user_id_header: request
            .headers()
            .get("X-User-Id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    log.lock().unwrap().push(entry);
    next.run(request).await
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "message": null, "data": data }))
}

async fn authenticate(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "secret" {
        ok(json!({
            "userId": 7,
            "username": "admin",
            "email": "admin@shopjoy.test",
            "firstName": "Ada",
            "lastName": "Admin",
            "userType": "ADMIN"
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid username or password", "data": null })),
        )
            .into_response()
    }
}

async fn products() -> Json<Value> {
    ok(json!([]))
}

async fn products_paginated() -> Json<Value> {
    ok(json!({
        "content": [{
            "productId": 1,
            "productName": "Laptop",
            "categoryId": 3,
            "price": 999.99,
            "sku": "LAPTOP-001",
            "active": true
        }],
        "pageNumber": 0,
        "pageSize": 10,
        "totalElements": 11,
        "totalPages": 2,
        "first": true,
        "last": false
    }))
}

async fn create_product_conflict() -> Response {
    (
        StatusCode::CONFLICT,
        Json(json!({ "success": false, "message": "SKU already exists", "data": null })),
    )
        .into_response()
}

async fn delete_product() -> Json<Value> {
    ok(Value::Null)
}

async fn add_stock() -> Json<Value> {
    ok(json!({
        "productId": 1,
        "productName": "Laptop",
        "stockQuantity": 12,
        "reorderLevel": 5
    }))
}

async fn confirm_order() -> Json<Value> {
    ok(json!({
        "orderId": 4,
        "userId": 7,
        "orderDate": "2024-03-01T12:00:00",
        "totalAmount": 50.0,
        "status": "PROCESSING"
    }))
}

/// Start the mock backend; returns its base URL and the request log.
async fn spawn_backend() -> (String, RequestLog) {
    let log = RequestLog::default();

    let api = Router::new()
        .route("/users/authenticate", post(authenticate))
        .route("/products", get(products).post(create_product_conflict))
        .route("/products/paginated", get(products_paginated))
        .route("/products/{id}", delete(delete_product))
        .route("/inventory/product/{id}/add", patch(add_stock))
        .route("/orders/{id}/confirm", patch(confirm_order));

    let app = Router::new()
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/v1"), log)
}

struct TestClient {
    api: ApiClient,
    auth: AuthContext,
    log: RequestLog,
    _dir: tempfile::TempDir,
    session_path: std::path::PathBuf,
}

async fn test_client() -> TestClient {
    let (base_url, log) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let config = ApiConfig::with_base_url(base_url, &session_path);
    let api = ApiClient::new(&config, SessionStore::load(&session_path));
    let auth = AuthContext::new(api.clone());
    TestClient {
        api,
        auth,
        log,
        _dir: dir,
        session_path,
    }
}

fn last_request(log: &RequestLog) -> Recorded {
    log.lock().unwrap().last().unwrap().clone()
}

#[tokio::test]
async fn test_identity_header_present_iff_session_held() {
    let ctx = test_client().await;

    // Anonymous: no header.
    ctx.api.get_products().await.unwrap();
    assert_eq!(last_request(&ctx.log).user_id_header, None);

    // Authenticated: header carries the session's user ID.
    ctx.auth.login("admin", "secret").await.unwrap();
    ctx.api.get_products().await.unwrap();
    assert_eq!(
        last_request(&ctx.log).user_id_header,
        Some("7".to_string())
    );

    // Anonymous again after logout.
    ctx.auth.logout().unwrap();
    ctx.api.get_products().await.unwrap();
    assert_eq!(last_request(&ctx.log).user_id_header, None);
}

#[tokio::test]
async fn test_login_success_persists_session() {
    let ctx = test_client().await;
    assert!(!ctx.auth.is_authenticated());

    let session = ctx.auth.login("admin", "secret").await.unwrap();
    assert_eq!(session.username, "admin");
    assert!(ctx.auth.is_authenticated());
    assert!(ctx.auth.is_admin());
    assert!(ctx.session_path.exists());

    // A fresh store restores the same session from disk.
    let restored = SessionStore::load(&ctx.session_path);
    assert_eq!(restored.current(), Some(session));
}

#[tokio::test]
async fn test_login_failure_leaves_state_unchanged() {
    let ctx = test_client().await;

    let err = ctx.auth.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.message(), "Invalid username or password");
    assert!(!ctx.auth.is_authenticated());
    assert!(!ctx.session_path.exists());

    // A failed login does not evict an existing session either.
    ctx.auth.login("admin", "secret").await.unwrap();
    let _ = ctx.auth.login("admin", "wrong").await.unwrap_err();
    assert!(ctx.auth.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_persisted_state() {
    let ctx = test_client().await;
    ctx.auth.login("admin", "secret").await.unwrap();

    ctx.auth.logout().unwrap();
    assert!(!ctx.auth.is_authenticated());
    assert!(!ctx.session_path.exists());

    // Logging out while anonymous is a no-op.
    ctx.auth.logout().unwrap();
}

#[tokio::test]
async fn test_page_payload_decodes() {
    let ctx = test_client().await;
    let page = ctx
        .api
        .get_products_paginated(0, 10, "product_id", "ASC")
        .await
        .unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].product_id, ProductId::new(1));

    let request = last_request(&ctx.log);
    let query = request.query.unwrap();
    assert!(query.contains("page=0"));
    assert!(query.contains("sortBy=product_id"));
    assert!(query.contains("sortDirection=ASC"));
}

#[tokio::test]
async fn test_error_envelope_surfaces_server_message() {
    let ctx = test_client().await;
    let err = ctx
        .api
        .create_product(&shopjoy_client::types::NewProduct {
            product_name: "Laptop".to_string(),
            description: String::new(),
            category_id: 3.into(),
            price: "999.99".parse().unwrap(),
            cost_price: "650".parse().unwrap(),
            sku: "LAPTOP-001".to_string(),
            brand: None,
            image_url: None,
            initial_stock: 5,
            is_active: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "SKU already exists");
}

#[tokio::test]
async fn test_null_data_unwraps_to_unit() {
    let ctx = test_client().await;
    ctx.api.delete_product(ProductId::new(9)).await.unwrap();
    assert_eq!(last_request(&ctx.log).path, "/api/v1/products/9");
}

#[tokio::test]
async fn test_stock_quantity_travels_as_query_parameter() {
    let ctx = test_client().await;
    let record = ctx.api.add_stock(ProductId::new(1), 5).await.unwrap();
    assert_eq!(record.stock_quantity, 12);

    let request = last_request(&ctx.log);
    assert_eq!(request.path, "/api/v1/inventory/product/1/add");
    assert_eq!(request.query.as_deref(), Some("quantity=5"));
}

#[tokio::test]
async fn test_order_action_maps_to_named_route() {
    let ctx = test_client().await;
    let order = ctx
        .api
        .apply_order_action(OrderId::new(4), OrderAction::Confirm)
        .await
        .unwrap();

    assert_eq!(order.status, shopjoy_core::OrderStatus::Processing);
    assert_eq!(last_request(&ctx.log).path, "/api/v1/orders/4/confirm");
}

#[tokio::test]
async fn test_transport_failure_maps_to_message() {
    // Nothing listens on this port; the request fails before any envelope.
    let dir = tempfile::tempdir().unwrap();
    let config = ApiConfig::with_base_url("http://127.0.0.1:9/api/v1", dir.path().join("s.json"));
    let api = ApiClient::new(&config, SessionStore::load(dir.path().join("s.json")));

    let err = api.get_products().await.unwrap_err();
    assert!(!err.message().is_empty());
}
