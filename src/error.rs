//! Request-level errors for the gallery routes.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::handlers::render;

/// Errors surfaced by gallery lookups.
///
/// Every lookup failure collapses into `NotFound` so responses never reveal
/// which check (missing folder, bad date, path escape) rejected the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    NotFound,
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::NotFound => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for GalleryError {}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    current_year: i32,
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        match self {
            GalleryError::NotFound => {
                let template = NotFoundTemplate {
                    current_year: crate::handlers::current_year(),
                };
                (StatusCode::NOT_FOUND, Html(render(&template))).into_response()
            }
        }
    }
}
