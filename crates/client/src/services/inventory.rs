//! Stock level endpoints. Quantities travel as query parameters, not bodies.

use shopjoy_core::ProductId;

use crate::Result;
use crate::http::ApiClient;
use crate::types::InventoryRecord;

impl ApiClient {
    /// `GET /inventory/product/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_inventory(&self, product: ProductId) -> Result<InventoryRecord> {
        self.get(&format!("/inventory/product/{product}")).await
    }

    /// `GET /inventory/product/{id}/in-stock`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn is_in_stock(&self, product: ProductId) -> Result<bool> {
        self.get(&format!("/inventory/product/{product}/in-stock"))
            .await
    }

    /// `GET /inventory/product/{id}/available-stock?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn has_available_stock(&self, product: ProductId, quantity: i32) -> Result<bool> {
        self.get_query(
            &format!("/inventory/product/{product}/available-stock"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `PUT /inventory/product/{id}?newQuantity=`
    ///
    /// Sets the absolute stock level.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_stock(
        &self,
        product: ProductId,
        new_quantity: i32,
    ) -> Result<InventoryRecord> {
        self.put_query(
            &format!("/inventory/product/{product}"),
            &[("newQuantity", new_quantity.to_string())],
        )
        .await
    }

    /// `PATCH /inventory/product/{id}/add?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn add_stock(&self, product: ProductId, quantity: i32) -> Result<InventoryRecord> {
        self.patch_query(
            &format!("/inventory/product/{product}/add"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `PATCH /inventory/product/{id}/remove?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn remove_stock(&self, product: ProductId, quantity: i32) -> Result<InventoryRecord> {
        self.patch_query(
            &format!("/inventory/product/{product}/remove"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `PATCH /inventory/product/{id}/reserve?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn reserve_stock(&self, product: ProductId, quantity: i32) -> Result<InventoryRecord> {
        self.patch_query(
            &format!("/inventory/product/{product}/reserve"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `PATCH /inventory/product/{id}/release?quantity=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn release_stock(&self, product: ProductId, quantity: i32) -> Result<InventoryRecord> {
        self.patch_query(
            &format!("/inventory/product/{product}/release"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }

    /// `PATCH /inventory/product/{id}/reorder-level?reorderLevel=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_reorder_level(
        &self,
        product: ProductId,
        reorder_level: i32,
    ) -> Result<InventoryRecord> {
        self.patch_query(
            &format!("/inventory/product/{product}/reorder-level"),
            &[("reorderLevel", reorder_level.to_string())],
        )
        .await
    }

    /// `GET /inventory/low-stock`
    ///
    /// Records at or below their reorder level.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_low_stock(&self) -> Result<Vec<InventoryRecord>> {
        self.get("/inventory/low-stock").await
    }

    /// `GET /inventory/out-of-stock`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_out_of_stock(&self) -> Result<Vec<InventoryRecord>> {
        self.get("/inventory/out-of-stock").await
    }
}
