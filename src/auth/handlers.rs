//! Authentication handlers for login and logout.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::Deserialize;

use super::middleware::{OptionalAuth, SESSION_COOKIE_NAME};
use crate::config;
use crate::handlers::{current_year, render};
use crate::state::AppState;

/// Shown for any failed login; never says which half was wrong
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub const MISSING_CREDENTIALS: &str = "Username and password are required";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// Echoed back into the form after a failed attempt
    pub username: String,
    pub version: &'static str,
    pub current_year: i32,
}

impl LoginTemplate {
    fn with_error(error: &str, username: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            username: username.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            current_year: current_year(),
        }
    }
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Checkbox: present (any value) when ticked
    #[serde(default)]
    pub remember_me: Option<String>,
}

/// GET /login - Show login page
pub async fn login_page(OptionalAuth(auth): OptionalAuth) -> Response {
    if auth.is_some() {
        return Redirect::to("/").into_response();
    }

    let template = LoginTemplate {
        error: None,
        username: String::new(),
        version: env!("CARGO_PKG_VERSION"),
        current_year: current_year(),
    };
    Html(render(&template)).into_response()
}

/// POST /login - Process login
pub async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    // Validate input
    if form.username.trim().is_empty() || form.password.is_empty() {
        let template = LoginTemplate::with_error(MISSING_CREDENTIALS, &form.username);
        return (jar, Html(render(&template))).into_response();
    }

    // Verify against the configured identity (argon2 hash, never plaintext)
    if !state.credentials.verify(&form.username, &form.password) {
        tracing::info!("Failed login attempt for user {:?}", form.username);
        let template = LoginTemplate::with_error(INVALID_CREDENTIALS, &form.username);
        return (jar, Html(render(&template))).into_response();
    }

    let remember = form.remember_me.is_some();
    let ttl = if remember {
        chrono::Duration::days(config::REMEMBER_DURATION_DAYS)
    } else {
        chrono::Duration::hours(config::SESSION_DURATION_HOURS)
    };

    // Create session
    let session_id = state.sessions.create(&form.username, ttl);
    tracing::info!("User {} logged in (remember me: {})", form.username, remember);

    // Set session cookie; without "remember me" it lasts for the browser session
    let mut session_cookie = Cookie::build((SESSION_COOKIE_NAME, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(false) // Set to true in production with HTTPS
        .build();
    if remember {
        session_cookie.set_max_age(time::Duration::days(config::REMEMBER_DURATION_DAYS));
    }

    (jar.add(session_cookie), Redirect::to("/")).into_response()
}

/// GET /logout - Log out and clear session
pub async fn logout(
    State(state): State<AppState>,
    OptionalAuth(auth): OptionalAuth,
    jar: SignedCookieJar,
) -> impl IntoResponse {
    if let Some(auth) = auth {
        if state.sessions.remove(&auth.session_id) {
            tracing::info!("User {} logged out", auth.username);
        }
    }

    // Remove session cookie
    let session_cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .build();

    (jar.remove(session_cookie), Redirect::to("/login"))
}
