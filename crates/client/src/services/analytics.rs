//! Analytics endpoints.

use shopjoy_core::UserId;

use crate::Result;
use crate::http::ApiClient;
use crate::types::{DashboardData, UserAnalytics};

impl ApiClient {
    /// `GET /analytics/dashboard`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_dashboard_data(&self) -> Result<DashboardData> {
        self.get("/analytics/dashboard").await
    }

    /// `GET /analytics/user/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_user_analytics(&self, user: UserId) -> Result<UserAnalytics> {
        self.get(&format!("/analytics/user/{user}")).await
    }
}
