//! Product management route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use shopjoy_client::types::{NewProduct, Page, Product, UpdateProduct};
use shopjoy_core::{CategoryId, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Default page size for the product listing.
const DEFAULT_PAGE_SIZE: i32 = 10;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub page: Option<i32>,
    pub size: Option<i32>,
    pub term: Option<String>,
    pub error: Option<String>,
}

/// Form input shared by product creation and editing.
///
/// Numeric fields arrive as text and are validated here, before any backend
/// call is made.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub price: String,
    pub cost_price: String,
    pub sku: String,
    pub brand: Option<String>,
    pub image_url: Option<String>,
    /// Present on the creation form only.
    pub initial_stock: Option<String>,
    /// Checkbox; absent means unchecked.
    pub is_active: Option<String>,
}

/// Form input for the activate/deactivate toggle.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    /// Current state as rendered; the handler applies the opposite.
    pub active: bool,
}

/// One product row prepared for the template.
pub struct ProductView {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub category_name: String,
    pub price: Decimal,
    pub stock: String,
    pub active: bool,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name,
            sku: product.sku,
            category_name: product.category_name.unwrap_or_default(),
            price: product.price,
            stock: product
                .stock_quantity
                .map_or_else(|| "-".to_string(), |q| q.to_string()),
            active: product.active,
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct ProductsTemplate {
    pub products: Vec<ProductView>,
    pub page: i32,
    pub total_pages: i32,
    pub total_elements: i64,
    pub prev_page: i32,
    pub next_page: i32,
    pub has_prev: bool,
    pub has_next: bool,
    pub size: i32,
    pub term: Option<String>,
    pub error: Option<String>,
}

/// Category option for the product form select.
pub struct CategoryOption {
    pub category_id: CategoryId,
    pub category_name: String,
}

/// Product form page template, shared by create and edit.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub title: String,
    pub action: String,
    pub categories: Vec<CategoryOption>,
    pub product: Option<Product>,
    pub error: Option<String>,
}

/// Clamp a requested page index to the server-reported page count.
fn clamp_page(requested: i32, total_pages: i32) -> i32 {
    if total_pages <= 0 {
        0
    } else {
        requested.clamp(0, total_pages - 1)
    }
}

/// Parse a money form field, naming the field in the error.
fn parse_money(field: &str, raw: &str) -> Result<Decimal, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("{field} must be a valid amount"))
}

fn redirect_with_error(base: &str, message: &str) -> Response {
    let encoded = urlencoding::encode(message).into_owned();
    Redirect::to(&format!("{base}?error={encoded}")).into_response()
}

/// Product listing page.
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let requested = query.page.unwrap_or(0).max(0);
    let term = query.term.filter(|t| !t.trim().is_empty());

    let page: Page<Product> = match &term {
        Some(term) => {
            state
                .api()
                .search_products_paginated(term, requested, size)
                .await?
        }
        None => {
            state
                .api()
                .get_products_paginated(requested, size, "product_id", "ASC")
                .await?
        }
    };

    let current = clamp_page(page.page_number, page.total_pages);
    let prev_page = clamp_page(current - 1, page.total_pages);
    let next_page = clamp_page(current + 1, page.total_pages);

    Ok(ProductsTemplate {
        products: page.content.into_iter().map(ProductView::from).collect(),
        page: current,
        total_pages: page.total_pages,
        total_elements: page.total_elements,
        prev_page,
        next_page,
        has_prev: current > 0,
        has_next: current + 1 < page.total_pages,
        size,
        term,
        error: query.error,
    })
}

/// New product form page.
pub async fn new_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ProductFormTemplate {
        title: "New Product".to_string(),
        action: "/admin/products".to_string(),
        categories: category_options(&state).await?,
        product: None,
        error: None,
    })
}

/// Edit product form page.
pub async fn edit_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.api().get_product(id).await?;
    Ok(ProductFormTemplate {
        title: format!("Edit {}", product.product_name),
        action: format!("/admin/products/{id}"),
        categories: category_options(&state).await?,
        product: Some(product),
        error: None,
    })
}

/// Create a product, then return to the listing.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Response {
    let price = match parse_money("Price", &form.price) {
        Ok(v) => v,
        Err(message) => return redirect_with_error("/admin/products/new", &message),
    };
    let cost_price = match parse_money("Cost price", &form.cost_price) {
        Ok(v) => v,
        Err(message) => return redirect_with_error("/admin/products/new", &message),
    };
    let initial_stock = match form
        .initial_stock
        .as_deref()
        .unwrap_or("0")
        .trim()
        .parse::<i32>()
    {
        Ok(v) if v >= 0 => v,
        _ => {
            return redirect_with_error(
                "/admin/products/new",
                "Initial stock must be a whole number",
            );
        }
    };

    let request = NewProduct {
        product_name: form.product_name,
        description: form.description,
        category_id: form.category_id,
        price,
        cost_price,
        sku: form.sku,
        brand: form.brand.filter(|b| !b.trim().is_empty()),
        image_url: form.image_url.filter(|u| !u.trim().is_empty()),
        initial_stock,
        is_active: Some(form.is_active.is_some()),
    };

    match state.api().create_product(&request).await {
        Ok(product) => {
            tracing::info!(product_id = %product.product_id, "product created");
            Redirect::to("/admin/products").into_response()
        }
        Err(e) => redirect_with_error("/admin/products/new", &e.message()),
    }
}

/// Update a product, then return to the listing.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Response {
    let edit_url = format!("/admin/products/{id}/edit");

    let price = match parse_money("Price", &form.price) {
        Ok(v) => v,
        Err(message) => return redirect_with_error(&edit_url, &message),
    };
    let cost_price = match parse_money("Cost price", &form.cost_price) {
        Ok(v) => v,
        Err(message) => return redirect_with_error(&edit_url, &message),
    };

    let request = UpdateProduct {
        product_name: form.product_name,
        description: form.description,
        category_id: form.category_id,
        price,
        cost_price,
        sku: form.sku,
        brand: form.brand.filter(|b| !b.trim().is_empty()),
        image_url: form.image_url.filter(|u| !u.trim().is_empty()),
    };

    match state.api().update_product(id, &request).await {
        Ok(_) => Redirect::to("/admin/products").into_response(),
        Err(e) => redirect_with_error(&edit_url, &e.message()),
    }
}

/// Flip a product's active flag, then return to the listing.
///
/// The listing re-reads the page from the backend, so the row reflects the
/// server-confirmed state rather than an optimistic update.
pub async fn toggle_active(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ToggleForm>,
) -> Response {
    let result = if form.active {
        state.api().deactivate_product(id).await
    } else {
        state.api().activate_product(id).await
    };

    match result {
        Ok(_) => Redirect::to("/admin/products").into_response(),
        Err(e) => redirect_with_error("/admin/products", &e.message()),
    }
}

/// Delete a product, then return to the listing.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    match state.api().delete_product(id).await {
        Ok(()) => Redirect::to("/admin/products").into_response(),
        Err(e) => redirect_with_error("/admin/products", &e.message()),
    }
}

async fn category_options(state: &AppState) -> Result<Vec<CategoryOption>, AppError> {
    let categories = state.api().get_categories().await?;
    Ok(categories
        .into_iter()
        .map(|c| CategoryOption {
            category_id: c.category_id,
            category_name: c.category_name,
        })
        .collect())
}
