//! Customer account route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopjoy_core::{OrderAction, OrderId, OrderStatus};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// One order line prepared for the template.
pub struct OrderItemView {
    pub product_name: String,
    pub quantity: i32,
    pub subtotal: rust_decimal::Decimal,
}

/// One order prepared for the template.
pub struct OrderView {
    pub order_id: OrderId,
    pub order_date: chrono::NaiveDateTime,
    pub total_amount: rust_decimal::Decimal,
    pub status: String,
    pub cancellable: bool,
    pub items: Vec<OrderItemView>,
}

impl From<shopjoy_client::types::Order> for OrderView {
    fn from(order: shopjoy_client::types::Order) -> Self {
        Self {
            order_id: order.order_id,
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status.to_string(),
            cancellable: order.status.allows(OrderAction::Cancel),
            items: order
                .order_items
                .into_iter()
                .map(|item| OrderItemView {
                    product_name: item.product_name,
                    quantity: item.quantity,
                    subtotal: item.subtotal,
                })
                .collect(),
        }
    }
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrderHistoryTemplate {
    pub display_name: String,
    pub orders: Vec<OrderView>,
    pub error: Option<String>,
}

/// Order history page.
///
/// A failed read renders the empty state rather than an error page; the
/// failure is logged.
pub async fn order_history(
    RequireAuth(session): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let orders = match state.api().get_orders_by_user(session.user_id).await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!("Failed to fetch order history: {e}");
            vec![]
        }
    };

    OrderHistoryTemplate {
        display_name: session.display_name(),
        orders: orders.into_iter().map(OrderView::from).collect(),
        error: query.error,
    }
}

/// Cancel one of the caller's pending orders, then reload the history.
pub async fn cancel_order(
    RequireAuth(session): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Response, AppError> {
    // The order must belong to the caller and still be cancellable.
    let order = state.api().get_order(id).await?;
    if order.user_id != session.user_id {
        return Err(AppError::Forbidden("not your order".to_string()));
    }
    if order.status != OrderStatus::Pending {
        let message = urlencoding::encode("Only pending orders can be cancelled").into_owned();
        return Ok(Redirect::to(&format!("/account/orders?error={message}")).into_response());
    }

    match state.api().apply_order_action(id, OrderAction::Cancel).await {
        Ok(_) => Ok(Redirect::to("/account/orders").into_response()),
        Err(e) => {
            let message = urlencoding::encode(&e.message()).into_owned();
            Ok(Redirect::to(&format!("/account/orders?error={message}")).into_response())
        }
    }
}
