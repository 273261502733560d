//! Product review endpoints.

use shopjoy_core::{ProductId, ReviewId, UserId};

use crate::Result;
use crate::http::ApiClient;
use crate::types::{NewReview, Review, UpdateReview};

impl ApiClient {
    /// `POST /reviews`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        self.post("/reviews", review).await
    }

    /// `GET /reviews`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_reviews(&self) -> Result<Vec<Review>> {
        self.get("/reviews").await
    }

    /// `GET /reviews/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review> {
        self.get(&format!("/reviews/{id}")).await
    }

    /// `GET /reviews/product/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_reviews_by_product(&self, product: ProductId) -> Result<Vec<Review>> {
        self.get(&format!("/reviews/product/{product}")).await
    }

    /// `GET /reviews/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_reviews_by_user(&self, user: UserId) -> Result<Vec<Review>> {
        self.get(&format!("/reviews/user/{user}")).await
    }

    /// `GET /reviews/product/{id}/rating/{rating}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_reviews_by_rating(
        &self,
        product: ProductId,
        rating: i32,
    ) -> Result<Vec<Review>> {
        self.get(&format!("/reviews/product/{product}/rating/{rating}"))
            .await
    }

    /// `GET /reviews/product/{id}/average-rating`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_average_rating(&self, product: ProductId) -> Result<f64> {
        self.get(&format!("/reviews/product/{product}/average-rating"))
            .await
    }

    /// `PUT /reviews/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_review(&self, id: ReviewId, review: &UpdateReview) -> Result<Review> {
        self.put(&format!("/reviews/{id}"), review).await
    }

    /// `PATCH /reviews/{id}/helpful`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn mark_review_helpful(&self, id: ReviewId) -> Result<Review> {
        self.patch(&format!("/reviews/{id}/helpful")).await
    }

    /// `DELETE /reviews/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_review(&self, id: ReviewId) -> Result<()> {
        self.delete(&format!("/reviews/{id}")).await
    }
}
