//! Shopping cart endpoints.

use rust_decimal::Decimal;

use shopjoy_core::{CartItemId, UserId};

use crate::Result;
use crate::http::ApiClient;
use crate::types::{AddToCart, CartItem};

impl ApiClient {
    /// `POST /cart/items`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn add_to_cart(&self, item: &AddToCart) -> Result<CartItem> {
        self.post("/cart/items", item).await
    }

    /// `PUT /cart/items/{id}?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_cart_item_quantity(
        &self,
        item: CartItemId,
        quantity: i32,
    ) -> Result<CartItem> {
        self.put_query(
            &format!("/cart/items/{item}"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `DELETE /cart/items/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn remove_from_cart(&self, item: CartItemId) -> Result<()> {
        self.delete(&format!("/cart/items/{item}")).await
    }

    /// `GET /cart/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_cart_items(&self, user: UserId) -> Result<Vec<CartItem>> {
        self.get(&format!("/cart/user/{user}")).await
    }

    /// `DELETE /cart/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn clear_cart(&self, user: UserId) -> Result<()> {
        self.delete(&format!("/cart/user/{user}")).await
    }

    /// `GET /cart/user/{id}/total`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_cart_total(&self, user: UserId) -> Result<Decimal> {
        self.get(&format!("/cart/user/{user}/total")).await
    }

    /// `GET /cart/user/{id}/count`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_cart_item_count(&self, user: UserId) -> Result<i64> {
        self.get(&format!("/cart/user/{user}/count")).await
    }
}
