//! Router assembly.

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use crate::{auth, handlers, paths};

/// Build the full application router.
///
/// Everything except login, logout and static assets goes through the
/// `AuthContext` extractor and redirects to /login without a session.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/", get(handlers::index))
        .route("/day/{day}", get(handlers::show_day))
        .route("/day/{day}/hour/{hour}", get(handlers::show_hour))
        .route("/images/{*path}", get(handlers::serve_image))
        .route("/api/images/{day}/{hour}", get(handlers::api_images))
        .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
