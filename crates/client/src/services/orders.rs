//! Order endpoints, including the status transition actions.

use chrono::NaiveDateTime;

use shopjoy_core::{OrderAction, OrderId, OrderStatus, UserId};

use crate::Result;
use crate::http::ApiClient;
use crate::types::{NewOrder, Order};

impl ApiClient {
    /// `POST /orders`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        self.post("/orders", order).await
    }

    /// `GET /orders/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_order(&self, id: OrderId) -> Result<Order> {
        self.get(&format!("/orders/{id}")).await
    }

    /// `GET /orders`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_orders(&self) -> Result<Vec<Order>> {
        self.get("/orders").await
    }

    /// `GET /orders/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_orders_by_user(&self, user: UserId) -> Result<Vec<Order>> {
        self.get(&format!("/orders/user/{user}")).await
    }

    /// `GET /orders/status/{status}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        self.get(&format!("/orders/status/{status}")).await
    }

    /// `GET /orders/pending`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_pending_orders(&self) -> Result<Vec<Order>> {
        self.get("/orders/pending").await
    }

    /// `GET /orders/date-range?startDate=&endDate=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_orders_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Order>> {
        self.get_query(
            "/orders/date-range",
            &[
                ("startDate", start.format("%Y-%m-%dT%H:%M:%S").to_string()),
                ("endDate", end.format("%Y-%m-%dT%H:%M:%S").to_string()),
            ],
        )
        .await
    }

    /// `PATCH /orders/{id}/status?status=`
    ///
    /// Direct status assignment; the backend validates the transition.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        self.patch_query(
            &format!("/orders/{id}/status"),
            &[("status", status.to_string())],
        )
        .await
    }

    /// `PATCH /orders/{id}/{confirm|ship|complete|cancel}`
    ///
    /// One call per named transition; which action is legal for a given
    /// status is [`OrderStatus::available_actions`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn apply_order_action(&self, id: OrderId, action: OrderAction) -> Result<Order> {
        self.patch(&format!("/orders/{id}/{}", action.path_segment()))
            .await
    }

    /// `PUT /orders/{id}`
    ///
    /// Only pending orders may be edited.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_order(&self, id: OrderId, order: &NewOrder) -> Result<Order> {
        self.put(&format!("/orders/{id}"), order).await
    }

    /// `DELETE /orders/{id}`
    ///
    /// Only pending orders may be deleted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_order(&self, id: OrderId) -> Result<()> {
        self.delete(&format!("/orders/{id}")).await
    }
}
