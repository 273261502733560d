//! Inventory management route handlers.
//!
//! Stock quantities are typed into free-text fields; validation happens here
//! and bad input never reaches the backend.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopjoy_client::types::InventoryRecord;
use shopjoy_core::ProductId;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Which slice of the inventory to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockView {
    #[default]
    All,
    LowStock,
    OutOfStock,
}

impl StockView {
    const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// Query parameters for the inventory page.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    #[serde(default)]
    pub view: StockView,
    pub error: Option<String>,
}

/// Form input for stock adjustments. Quantity stays a string until validated.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub quantity: String,
}

/// One inventory row prepared for the template.
pub struct InventoryRowView {
    pub product_id: ProductId,
    pub product_name: String,
    pub stock_quantity: i32,
    pub reorder_level: i32,
    pub low: bool,
    pub last_restocked: Option<chrono::NaiveDateTime>,
}

impl From<InventoryRecord> for InventoryRowView {
    fn from(record: InventoryRecord) -> Self {
        Self {
            product_id: record.product_id,
            product_name: record.product_name.unwrap_or_default(),
            stock_quantity: record.stock_quantity,
            reorder_level: record.reorder_level,
            low: record.stock_quantity <= record.reorder_level,
            last_restocked: record.last_restocked,
        }
    }
}

/// Inventory page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/inventory.html")]
pub struct InventoryTemplate {
    pub rows: Vec<InventoryRowView>,
    pub view: &'static str,
    pub low_count: usize,
    pub error: Option<String>,
}

/// Parse a quantity field into a positive whole number.
fn parse_quantity(raw: &str) -> Result<i32, String> {
    match raw.trim().parse::<i32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        Ok(_) => Err("Quantity must be greater than zero".to_string()),
        Err(_) => Err("Quantity must be a whole number".to_string()),
    }
}

fn redirect_with_error(message: &str) -> Response {
    let encoded = urlencoding::encode(message).into_owned();
    Redirect::to(&format!("/admin/inventory?error={encoded}")).into_response()
}

/// Inventory overview page.
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let records = match query.view {
        StockView::All => inventory_for_all_products(&state).await?,
        StockView::LowStock => state.api().get_low_stock().await?,
        StockView::OutOfStock => state.api().get_out_of_stock().await?,
    };

    let rows: Vec<InventoryRowView> = records.into_iter().map(InventoryRowView::from).collect();
    let low_count = rows.iter().filter(|r| r.low).count();

    Ok(InventoryTemplate {
        rows,
        view: query.view.as_str(),
        low_count,
        error: query.error,
    })
}

/// Add stock to a product, then reload the overview.
pub async fn add_stock(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let quantity = match parse_quantity(&form.quantity) {
        Ok(quantity) => quantity,
        Err(message) => return redirect_with_error(&message),
    };

    match state.api().add_stock(id, quantity).await {
        Ok(record) => {
            tracing::info!(product_id = %id, stock = record.stock_quantity, "stock added");
            Redirect::to("/admin/inventory").into_response()
        }
        Err(e) => redirect_with_error(&e.message()),
    }
}

/// Update a product's reorder level, then reload the overview.
pub async fn update_reorder_level(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let level = match form.quantity.trim().parse::<i32>() {
        Ok(level) if level >= 0 => level,
        _ => return redirect_with_error("Reorder level must be a whole number"),
    };

    match state.api().update_reorder_level(id, level).await {
        Ok(_) => Redirect::to("/admin/inventory").into_response(),
        Err(e) => redirect_with_error(&e.message()),
    }
}

/// The "all" view walks the catalog and asks for each product's stock
/// position; products without an inventory record are shown as empty.
async fn inventory_for_all_products(state: &AppState) -> Result<Vec<InventoryRecord>, AppError> {
    let products = state.api().get_products().await?;

    let mut records = Vec::with_capacity(products.len());
    for product in products {
        match state.api().get_inventory(product.product_id).await {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(product_id = %product.product_id, "No inventory record: {e}");
                records.push(InventoryRecord {
                    inventory_id: None,
                    product_id: product.product_id,
                    product_name: Some(product.product_name),
                    stock_quantity: product.stock_quantity.unwrap_or(0),
                    reorder_level: 0,
                    last_restocked: None,
                });
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_accepts_whole_numbers() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
    }

    #[test]
    fn test_parse_quantity_rejects_text_before_any_network_call() {
        assert_eq!(
            parse_quantity("abc"),
            Err("Quantity must be a whole number".to_string())
        );
        assert_eq!(
            parse_quantity("1.5"),
            Err("Quantity must be a whole number".to_string())
        );
    }

    #[test]
    fn test_parse_quantity_rejects_non_positive() {
        assert_eq!(
            parse_quantity("0"),
            Err("Quantity must be greater than zero".to_string())
        );
        assert_eq!(
            parse_quantity("-3"),
            Err("Quantity must be greater than zero".to_string())
        );
    }
}
