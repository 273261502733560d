//! Authentication route handlers.
//!
//! Login delegates to the client's auth context, which is the only writer of
//! the session slot. All form submissions follow POST, redirect, GET.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopjoy_client::types::RegisterUser;

use crate::filters;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
    }
}

/// Handle login form submission.
///
/// On success the operator lands on the page matching their role; on failure
/// they return to the login page with the backend's message.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state.auth().login(&form.username, &form.password).await {
        Ok(session) => {
            if session.is_admin() {
                Redirect::to("/admin/products").into_response()
            } else {
                Redirect::to("/account/orders").into_response()
            }
        }
        Err(e) => {
            tracing::warn!(username = %form.username, "Login failed: {e}");
            let message = urlencoding::encode(&e.message()).into_owned();
            Redirect::to(&format!("/auth/login?error={message}")).into_response()
        }
    }
}

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate { error: query.error }
}

/// Handle registration form submission.
///
/// Creates the account via the backend, then sends the visitor to the login
/// page; registration does not log in by itself.
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=Passwords%20do%20not%20match").into_response();
    }
    if form.password.len() < 8 {
        return Redirect::to("/auth/register?error=Password%20must%20be%20at%20least%208%20characters")
            .into_response();
    }

    let request = RegisterUser {
        username: form.username,
        email: form.email,
        password: form.password,
        first_name: none_if_blank(form.first_name),
        last_name: none_if_blank(form.last_name),
        phone: none_if_blank(form.phone),
    };

    match state.api().register_user(&request).await {
        Ok(user) => {
            tracing::info!(user_id = %user.user_id, "account registered");
            Redirect::to("/auth/login?success=Account%20created%2C%20please%20log%20in")
                .into_response()
        }
        Err(e) => {
            let message = urlencoding::encode(&e.message()).into_owned();
            Redirect::to(&format!("/auth/register?error={message}")).into_response()
        }
    }
}

/// Handle logout.
///
/// Always lands on the login page, even if clearing the persisted session
/// failed; the in-memory state is anonymous either way.
pub async fn logout(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.auth().logout() {
        tracing::error!("Failed to clear persisted session: {e}");
    }
    Redirect::to("/auth/login")
}

/// Treat whitespace-only optional form fields as absent.
fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank(None), None);
        assert_eq!(none_if_blank(Some("  ".to_string())), None);
        assert_eq!(
            none_if_blank(Some("Ada".to_string())),
            Some("Ada".to_string())
        );
    }
}
