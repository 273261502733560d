//! Category hierarchy endpoints.

use shopjoy_core::CategoryId;

use crate::Result;
use crate::http::ApiClient;
use crate::types::{Category, CategoryInput};

impl ApiClient {
    /// `POST /categories`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_category(&self, category: &CategoryInput) -> Result<Category> {
        self.post("/categories", category).await
    }

    /// `GET /categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category> {
        self.get(&format!("/categories/{id}")).await
    }

    /// `GET /categories`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.get("/categories").await
    }

    /// `GET /categories/top-level`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_top_level_categories(&self) -> Result<Vec<Category>> {
        self.get("/categories/top-level").await
    }

    /// `GET /categories/{id}/subcategories`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_subcategories(&self, parent: CategoryId) -> Result<Vec<Category>> {
        self.get(&format!("/categories/{parent}/subcategories"))
            .await
    }

    /// `GET /categories/{id}/has-subcategories`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn has_subcategories(&self, id: CategoryId) -> Result<bool> {
        self.get(&format!("/categories/{id}/has-subcategories"))
            .await
    }

    /// `PUT /categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_category(
        &self,
        id: CategoryId,
        category: &CategoryInput,
    ) -> Result<Category> {
        self.put(&format!("/categories/{id}"), category).await
    }

    /// `PATCH /categories/{id}/move?newParentId=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn move_category(
        &self,
        id: CategoryId,
        new_parent: CategoryId,
    ) -> Result<Category> {
        self.patch_query(
            &format!("/categories/{id}/move"),
            &[("newParentId", new_parent.to_string())],
        )
        .await
    }

    /// `DELETE /categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_category(&self, id: CategoryId) -> Result<()> {
        self.delete(&format!("/categories/{id}")).await
    }
}
