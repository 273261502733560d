//! HTTP transport shared by all resource services.
//!
//! Wraps `reqwest` with the three behaviors every call needs: the backend
//! base URL, the `X-User-Id` identity header when a session is held, and
//! unwrapping of the backend's `{ success, message, data }` envelope into
//! either the payload or an [`ApiError`]. No retry, no caching.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

/// Header carrying the authenticated user's ID.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Response envelope every backend endpoint wraps its payload in.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Client for the ShopJoy backend API.
///
/// Cheap to clone; all clones share one connection pool and one session
/// store. Endpoint methods live in the [`crate::services`] modules, one
/// `impl ApiClient` block per resource.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ApiConfig, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                session,
            }),
        }
    }

    /// The session store this client reads its identity header from.
    #[must_use]
    pub fn session_store(&self) -> &SessionStore {
        &self.inner.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Send a request and unwrap the response envelope.
    ///
    /// The identity header is attached iff a session is currently held.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.inner.session.current() {
            Some(session) => request.header(USER_ID_HEADER, session.user_id.to_string()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: Envelope = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            // A non-JSON body on an error status still maps to the single
            // "request failed" kind; on a success status it is a real
            // decode failure.
            Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
            Err(_) => {
                return Err(ApiError::Api {
                    status,
                    message: String::new(),
                });
            }
        };

        if !status.is_success() || !envelope.success {
            return Err(ApiError::Api {
                status,
                message: envelope.message.unwrap_or_default(),
            });
        }

        serde_json::from_value(envelope.data).map_err(ApiError::Decode)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.http.get(self.url(path))).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.get(self.url(path)).query(query))
            .await
    }

    /// GET with an arbitrary serializable query (used by the filter endpoint).
    pub(crate) async fn get_with<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.put(self.url(path)).json(body))
            .await
    }

    /// PUT whose arguments travel as query parameters with no body.
    pub(crate) async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.put(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.http.patch(self.url(path))).await
    }

    /// PATCH whose arguments travel as query parameters with no body.
    pub(crate) async fn patch_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.patch(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.http.delete(self.url(path))).await
    }
}
