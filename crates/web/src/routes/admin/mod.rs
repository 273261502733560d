//! Admin route handlers.
//!
//! Every handler here takes the [`RequireAdmin`](crate::middleware::RequireAdmin)
//! extractor; anonymous visitors are redirected to login and customers get 403.

pub mod algorithms;
pub mod inventory;
pub mod orders;
pub mod products;

use axum::response::Redirect;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/admin/products") }))
        .route(
            "/products",
            get(products::index).post(products::create),
        )
        .route("/products/new", get(products::new_form))
        .route("/products/{id}/edit", get(products::edit_form))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/toggle", post(products::toggle_active))
        .route("/products/{id}/delete", post(products::delete))
        .route("/inventory", get(inventory::index))
        .route("/inventory/{id}/add", post(inventory::add_stock))
        .route(
            "/inventory/{id}/reorder-level",
            post(inventory::update_reorder_level),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}/action", post(orders::apply_action))
        .route("/algorithms", get(algorithms::index))
}
