//! Route tests against a mock backend.
//!
//! The router under test is wired exactly as in `main`, but pointed at a
//! throwaway axum server that answers with backend-shaped envelopes and
//! records every request it receives.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceExt;

use shopjoy_client::{ApiClient, ApiConfig, AuthContext, SessionStore};
use shopjoy_web::config::WebConfig;
use shopjoy_web::routes;
use shopjoy_web::state::AppState;

type RequestLog = Arc<Mutex<Vec<String>>>;

async fn record(
    State(log): State<RequestLog>,
    request: Request<Body>,
    next: Next,
) -> Response {
    log.lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri().path()));
    next.run(request).await
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "message": null, "data": data }))
}

async fn authenticate(Json(body): Json<Value>) -> Response {
    let user_type = match (body["username"].as_str(), body["password"].as_str()) {
        (Some("admin"), Some("secret")) => "ADMIN",
        (Some("carol"), Some("secret")) => "CUSTOMER",
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Invalid username or password", "data": null })),
            )
                .into_response();
        }
    };
    ok(json!({
        "userId": if user_type == "ADMIN" { 7 } else { 8 },
        "username": body["username"],
        "email": "someone@shopjoy.test",
        "userType": user_type
    }))
    .into_response()
}

async fn products_paginated(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
) -> Json<Value> {
    let page: i32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);
    ok(json!({
        "content": [{
            "productId": 1,
            "productName": "Laptop",
            "categoryId": 3,
            "categoryName": "Electronics",
            "price": 999.99,
            "sku": "LAPTOP-001",
            "stockQuantity": 7,
            "active": true
        }],
        "pageNumber": page,
        "pageSize": 10,
        "totalElements": 11,
        "totalPages": 2,
        "first": page == 0,
        "last": page >= 1
    }))
}

async fn orders() -> Json<Value> {
    ok(json!([
        {
            "orderId": 1,
            "userId": 8,
            "userName": "Carol Customer",
            "orderDate": "2024-03-01T12:00:00",
            "totalAmount": 50.0,
            "status": "PENDING",
            "orderItems": []
        },
        {
            "orderId": 2,
            "userId": 8,
            "userName": "Carol Customer",
            "orderDate": "2024-03-02T12:00:00",
            "totalAmount": 75.0,
            "status": "SHIPPED",
            "orderItems": []
        }
    ]))
}

async fn deactivate() -> Json<Value> {
    ok(json!({
        "productId": 1,
        "productName": "Laptop",
        "categoryId": 3,
        "price": 999.99,
        "sku": "LAPTOP-001",
        "active": false
    }))
}

async fn sort_comparison() -> Json<Value> {
    ok(json!({
        "QuickSort": { "algorithmName": "QuickSort", "executionTimeMs": 1.7, "memoryUsedBytes": 2048 },
        "MergeSort": { "algorithmName": "MergeSort", "executionTimeMs": 4.2, "memoryUsedBytes": 4096 }
    }))
}

async fn search_comparison() -> Json<Value> {
    ok(json!({
        "BinarySearch": { "algorithmName": "BinarySearch", "executionTimeMs": 0.1, "memoryUsedBytes": 512 },
        "LinearSearch": { "algorithmName": "LinearSearch", "executionTimeMs": 3.4, "memoryUsedBytes": 512 }
    }))
}

async fn recommendations() -> Json<Value> {
    ok(json!({
        "sortingAlgorithm": "QuickSort",
        "searchAlgorithm": "BinarySearch",
        "paginationStrategy": "offset",
        "memoryOptimization": "none"
    }))
}

async fn spawn_backend(log: RequestLog) -> String {
    let api = Router::new()
        .route("/users/authenticate", post(authenticate))
        .route("/products/paginated", get(products_paginated))
        .route("/products/{id}/deactivate", patch(deactivate))
        .route("/products/algorithms/sort-comparison", get(sort_comparison))
        .route(
            "/products/algorithms/search-comparison",
            get(search_comparison),
        )
        .route(
            "/products/algorithms/recommendations",
            get(recommendations),
        )
        .route("/orders", get(orders));

    let app = Router::new()
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(log, record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/v1")
}

struct TestApp {
    router: Router,
    state: AppState,
    log: RequestLog,
    _dir: tempfile::TempDir,
}

async fn test_app() -> TestApp {
    let log = RequestLog::default();
    let base_url = spawn_backend(log.clone()).await;

    let dir = tempfile::tempdir().unwrap();
    let api_config = ApiConfig::with_base_url(base_url, dir.path().join("session.json"));
    let config = WebConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        api: api_config.clone(),
    };

    let sessions = SessionStore::load(&api_config.session_file);
    let api = ApiClient::new(&api_config, sessions);
    let auth = AuthContext::new(api.clone());
    let state = AppState::new(config, api, auth);

    let router = routes::routes().with_state(state.clone());
    TestApp {
        router,
        state,
        log,
        _dir: dir,
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_anonymous_admin_request_redirects_to_login() {
    let app = test_app().await;
    let response = app.router.oneshot(get_request("/admin/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login");
}

#[tokio::test]
async fn test_customer_gets_forbidden_on_admin_pages() {
    let app = test_app().await;
    app.state.auth().login("carol", "secret").await.unwrap();

    let response = app.router.oneshot(get_request("/admin/orders")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_form_redirects_admin_to_products() {
    let app = test_app().await;
    let response = app
        .router
        .oneshot(form_request("/auth/login", "username=admin&password=secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/products");
    assert!(app.state.auth().is_admin());
}

#[tokio::test]
async fn test_failed_login_redirects_back_with_message() {
    let app = test_app().await;
    let response = app
        .router
        .oneshot(form_request("/auth/login", "username=admin&password=nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/auth/login?error="));
    assert!(!app.state.auth().is_authenticated());
}

#[tokio::test]
async fn test_product_listing_clamps_out_of_range_page() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app
        .router
        .oneshot(get_request("/admin/products?page=99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // Requested page 99 of 2 renders as the last page, with no next link.
    assert!(body.contains("page 2 of 2"));
    assert!(!body.contains("Next"));
    assert!(body.contains("Previous"));
}

#[tokio::test]
async fn test_order_rows_offer_exactly_the_legal_actions() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app.router.oneshot(get_request("/admin/orders")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // PENDING row: confirm + cancel. SHIPPED row: complete only.
    assert!(body.contains(r#"value="confirm""#));
    assert!(body.contains(r#"value="cancel""#));
    assert!(body.contains(r#"value="complete""#));
    assert!(!body.contains(r#"value="ship""#));
}

#[tokio::test]
async fn test_status_filter_is_applied_client_side() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app
        .router
        .oneshot(get_request("/admin/orders?status=SHIPPED"))
        .await
        .unwrap();
    let body = body_text(response).await;

    assert!(body.contains("SHIPPED"));
    assert!(!body.contains(r#"value="confirm""#));

    // The backend saw the unfiltered listing request only.
    let log = app.log.lock().unwrap();
    assert!(log.iter().any(|line| line == "GET /api/v1/orders"));
    assert!(!log.iter().any(|line| line.contains("/orders/status/")));
}

#[tokio::test]
async fn test_invalid_stock_quantity_never_reaches_the_backend() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app
        .router
        .oneshot(form_request("/admin/inventory/1/add", "quantity=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("error="));

    let log = app.log.lock().unwrap();
    assert!(!log.iter().any(|line| line.contains("/inventory/")));
}

#[tokio::test]
async fn test_toggle_deactivates_then_returns_to_listing() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app
        .router
        .oneshot(form_request("/admin/products/1/toggle", "active=true"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/products");

    let log = app.log.lock().unwrap();
    assert!(
        log.iter()
            .any(|line| line == "PATCH /api/v1/products/1/deactivate")
    );
}

#[tokio::test]
async fn test_algorithm_page_runs_all_three_reads() {
    let app = test_app().await;
    app.state.auth().login("admin", "secret").await.unwrap();

    let response = app
        .router
        .oneshot(get_request("/admin/algorithms?dataset_size=5000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("QuickSort"));
    assert!(body.contains("BinarySearch"));

    let log = app.log.lock().unwrap();
    assert!(log.iter().any(|l| l.contains("sort-comparison")));
    assert!(log.iter().any(|l| l.contains("search-comparison")));
    assert!(log.iter().any(|l| l.contains("recommendations")));
}

#[tokio::test]
async fn test_home_redirects_by_role() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(get_request("/"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/auth/login");

    app.state.auth().login("admin", "secret").await.unwrap();
    let response = app.router.oneshot(get_request("/")).await.unwrap();
    assert_eq!(location(&response), "/admin/products");
}
