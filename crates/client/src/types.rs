//! Wire types for the ShopJoy backend API.
//!
//! These are passive records exchanged verbatim with the backend: camelCase
//! JSON, decimal money (doubles on the wire), `LocalDateTime`-style
//! timestamps without a zone. The client imposes no invariants of its own
//! beyond what the type system gives for free.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopjoy_core::{
    AddressId, CartItemId, CategoryId, InventoryId, OrderId, OrderStatus, PaymentStatus, ProductId,
    ReviewId, UserId, UserType,
};

// =============================================================================
// Users
// =============================================================================

/// A user account as the backend reports it. Passwords never appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_type: UserType,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Login credentials for `POST /users/authenticate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body for `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body for `PUT /users/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body for `PUT /users/{id}/password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

// =============================================================================
// Products
// =============================================================================

/// A catalog product.
///
/// `stock_quantity` and `category_name` are denormalized onto the product by
/// the backend for display; stock is never edited through product calls
/// ("managed via inventory").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_name: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub cost_price: Decimal,
    pub sku: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body for `POST /products`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub cost_price: Decimal,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Opening stock level; afterwards stock moves only via inventory calls.
    pub initial_stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for `PUT /products/{id}`. Same shape as creation minus the stock.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub product_name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub cost_price: Decimal,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query for `GET /products/filter`. Every field is optional; absent fields
/// are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    pub page_number: i32,
    pub page_size: i32,
    pub total_elements: i64,
    pub total_pages: i32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

// =============================================================================
// Categories
// =============================================================================

/// A product category; `parent_category_id` makes the set hierarchical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_category_id: Option<CategoryId>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<CategoryId>,
}

// =============================================================================
// Inventory
// =============================================================================

/// Stock position for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(default)]
    pub inventory_id: Option<InventoryId>,
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: Option<String>,
    /// On-hand quantity. The backend historically named this field
    /// `quantityInStock`; both spellings are accepted.
    #[serde(alias = "quantityInStock")]
    pub stock_quantity: i32,
    pub reorder_level: i32,
    #[serde(default)]
    pub last_restocked: Option<NaiveDateTime>,
}

// =============================================================================
// Orders
// =============================================================================

/// An order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    pub order_date: NaiveDateTime,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: i32,
    pub subtotal: Decimal,
}

/// Body for `POST /orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    pub order_items: Vec<NewOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

/// One line of a new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}

// =============================================================================
// Cart
// =============================================================================

/// One line of a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_price: Decimal,
    pub quantity: i32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /cart/items`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

// =============================================================================
// Addresses
// =============================================================================

/// A saved shipping or billing address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: AddressId,
    pub user_id: UserId,
    #[serde(default)]
    pub address_type: Option<String>,
    pub street_address: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    #[serde(default, alias = "isDefault")]
    pub default: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /addresses` and `PUT /addresses/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    pub street_address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

// =============================================================================
// Reviews
// =============================================================================

/// A product review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: ReviewId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: Option<String>,
    pub rating: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body for `PUT /reviews/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// =============================================================================
// Algorithm benchmarks
// =============================================================================

/// One algorithm's benchmark numbers, computed entirely by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmBenchmark {
    pub algorithm_name: String,
    pub execution_time_ms: f64,
    pub memory_used_bytes: i64,
}

/// Backend advice for the current catalog size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRecommendations {
    pub sorting_algorithm: String,
    pub search_algorithm: String,
    #[serde(default)]
    pub pagination_strategy: Option<String>,
    #[serde(default)]
    pub memory_optimization: Option<String>,
}

// =============================================================================
// Analytics
// =============================================================================

/// Admin dashboard aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub overall_stats: OverallStats,
    #[serde(default)]
    pub sales_over_time: Vec<SalesDataPoint>,
    #[serde(default)]
    pub category_distribution: Vec<CategorySalesDataPoint>,
    /// Free-form per-endpoint metrics; displayed verbatim.
    #[serde(default)]
    pub performance_metrics: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_products: i64,
    pub total_users: i64,
    pub total_orders: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataPoint {
    pub date: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySalesDataPoint {
    pub category_name: String,
    pub revenue: Decimal,
    pub order_count: i64,
}

/// Per-user purchase analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    pub total_orders: i64,
    pub total_spent: Decimal,
    pub total_items_purchased: i64,
    #[serde(default)]
    pub spending_by_category: Vec<CategorySpending>,
    #[serde(default)]
    pub recent_activities: Vec<RecentActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category_name: String,
    pub amount_spent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub activity_type: String,
}
