//! HTTP route handlers for the web console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//! GET  /                           - Redirect by role
//!
//! # Auth
//! GET  /auth/login                 - Login page
//! POST /auth/login                 - Login action
//! GET  /auth/register              - Registration page
//! POST /auth/register              - Registration action
//! POST /auth/logout                - Logout action
//!
//! # Account (requires auth)
//! GET  /account/orders             - Order history
//! POST /account/orders/{id}/cancel - Cancel a pending order
//!
//! # Admin (requires admin)
//! GET  /admin                      - Redirect to product management
//! GET  /admin/products             - Product listing (paginated, searchable)
//! GET  /admin/products/new         - New product form
//! POST /admin/products             - Create product
//! GET  /admin/products/{id}/edit   - Edit product form
//! POST /admin/products/{id}        - Update product
//! POST /admin/products/{id}/toggle - Activate/deactivate product
//! POST /admin/products/{id}/delete - Delete product
//! GET  /admin/inventory            - Inventory overview (all/low/out)
//! POST /admin/inventory/{id}/add   - Add stock
//! POST /admin/inventory/{id}/reorder-level - Update reorder level
//! GET  /admin/orders               - Order management (status filter)
//! POST /admin/orders/{id}/action   - Apply a status transition
//! GET  /admin/algorithms           - Algorithm performance dashboard
//! ```

pub mod account;
pub mod admin;
pub mod auth;

use axum::response::Redirect;
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::OptionalSession;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(account::order_history))
        .route("/orders/{id}/cancel", post(account::cancel_order))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/admin", admin::routes())
}

/// Send the visitor to the page matching their role.
async fn home(OptionalSession(session): OptionalSession) -> Redirect {
    match session {
        Some(s) if s.is_admin() => Redirect::to("/admin/products"),
        Some(_) => Redirect::to("/account/orders"),
        None => Redirect::to("/auth/login"),
    }
}
