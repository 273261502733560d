//! Saved address endpoints.

use shopjoy_core::{AddressId, UserId};

use crate::Result;
use crate::http::ApiClient;
use crate::types::{Address, AddressInput};

impl ApiClient {
    /// `POST /addresses`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_address(&self, address: &AddressInput) -> Result<Address> {
        self.post("/addresses", address).await
    }

    /// `GET /addresses/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_address(&self, id: AddressId) -> Result<Address> {
        self.get(&format!("/addresses/{id}")).await
    }

    /// `GET /addresses/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_addresses_by_user(&self, user: UserId) -> Result<Vec<Address>> {
        self.get(&format!("/addresses/user/{user}")).await
    }

    /// `GET /addresses/user/{id}/default`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_default_address(&self, user: UserId) -> Result<Address> {
        self.get(&format!("/addresses/user/{user}/default")).await
    }

    /// `PATCH /addresses/{id}/set-default`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn set_default_address(&self, id: AddressId) -> Result<Address> {
        self.patch(&format!("/addresses/{id}/set-default")).await
    }

    /// `PUT /addresses/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_address(&self, id: AddressId, address: &AddressInput) -> Result<Address> {
        self.put(&format!("/addresses/{id}"), address).await
    }

    /// `DELETE /addresses/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_address(&self, id: AddressId) -> Result<()> {
        self.delete(&format!("/addresses/{id}")).await
    }
}
