//! Order management route handlers.
//!
//! The page fetches the full order set once and filters by status in the
//! handler; the status dropdown is a display filter, not a query parameter
//! to the backend. Each row offers exactly the transitions the order's
//! current status allows.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopjoy_client::types::Order;
use shopjoy_core::{OrderAction, OrderId, OrderStatus};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the order listing.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Display filter; `None` shows every order. The "all statuses" option
    /// submits an empty string, which also means no filter.
    #[serde(default, deserialize_with = "status_filter")]
    pub status: Option<OrderStatus>,
    pub error: Option<String>,
}

fn status_filter<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Form input for applying a status transition.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    pub action: String,
}

/// One action button prepared for the template.
pub struct ActionView {
    pub value: &'static str,
    pub label: &'static str,
}

/// One order row prepared for the template.
pub struct OrderRowView {
    pub order_id: OrderId,
    pub user_name: String,
    pub order_date: chrono::NaiveDateTime,
    pub total_amount: rust_decimal::Decimal,
    pub status: String,
    pub item_count: usize,
    pub actions: Vec<ActionView>,
}

impl From<Order> for OrderRowView {
    fn from(order: Order) -> Self {
        let actions = order
            .status
            .available_actions()
            .iter()
            .map(|action| ActionView {
                value: action.path_segment(),
                label: action.label(),
            })
            .collect();

        Self {
            order_id: order.order_id,
            user_name: order
                .user_name
                .unwrap_or_else(|| format!("user #{}", order.user_id)),
            order_date: order.order_date,
            total_amount: order.total_amount,
            status: order.status.to_string(),
            item_count: order.order_items.len(),
            actions,
        }
    }
}

/// Status filter option for the dropdown.
pub struct StatusOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Order management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderRowView>,
    pub statuses: Vec<StatusOption>,
    pub filtered: bool,
    pub error: Option<String>,
}

/// Order management page.
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let all_orders = state.api().get_orders().await?;

    let orders: Vec<OrderRowView> = all_orders
        .into_iter()
        .filter(|order| query.status.is_none_or(|status| order.status == status))
        .map(OrderRowView::from)
        .collect();

    let statuses = OrderStatus::all()
        .iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            selected: query.status == Some(*status),
        })
        .collect();

    Ok(OrdersTemplate {
        orders,
        statuses,
        filtered: query.status.is_some(),
        error: query.error,
    })
}

/// Apply a status transition, then reload the listing.
///
/// The transition is checked against the order's current status before the
/// backend call; a stale button (the order moved on since the page rendered)
/// produces a friendly error instead of a backend rejection.
pub async fn apply_action(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Form(form): Form<ActionForm>,
) -> Result<Response, AppError> {
    let action: OrderAction = form
        .action
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown action: {}", form.action)))?;

    let order = state.api().get_order(id).await?;
    if !order.status.allows(action) {
        let message = urlencoding::encode(&format!(
            "Order #{id} is {} and does not allow '{}'",
            order.status,
            action.label()
        ))
        .into_owned();
        return Ok(Redirect::to(&format!("/admin/orders?error={message}")).into_response());
    }

    match state.api().apply_order_action(id, action).await {
        Ok(updated) => {
            tracing::info!(order_id = %id, status = %updated.status, "order transitioned");
            Ok(Redirect::to("/admin/orders").into_response())
        }
        Err(e) => {
            let message = urlencoding::encode(&e.message()).into_owned();
            Ok(Redirect::to(&format!("/admin/orders?error={message}")).into_response())
        }
    }
}
