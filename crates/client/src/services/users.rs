//! User account endpoints.

use shopjoy_core::UserId;

use crate::Result;
use crate::http::ApiClient;
use crate::types::{ChangePassword, Credentials, RegisterUser, UpdateUser, User};

impl ApiClient {
    /// `POST /users/register`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn register_user(&self, user: &RegisterUser) -> Result<User> {
        self.post("/users/register", user).await
    }

    /// `POST /users/authenticate`
    ///
    /// Verifies credentials and returns the matching account. A wrong
    /// username or password comes back as an API error with the backend's
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn authenticate_user(&self, credentials: &Credentials) -> Result<User> {
        self.post("/users/authenticate", credentials).await
    }

    /// `GET /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        self.get(&format!("/users/{id}")).await
    }

    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get("/users").await
    }

    /// `GET /users/email/{email}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.get(&format!("/users/email/{email}")).await
    }

    /// `PUT /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_user(&self, id: UserId, update: &UpdateUser) -> Result<User> {
        self.put(&format!("/users/{id}"), update).await
    }

    /// `PUT /users/{id}/password`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn change_password(&self, id: UserId, change: &ChangePassword) -> Result<()> {
        self.put(&format!("/users/{id}/password"), change).await
    }

    /// `DELETE /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        self.delete(&format!("/users/{id}")).await
    }
}
