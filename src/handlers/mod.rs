pub mod api;
pub mod day;
pub mod hour;
pub mod images;

use askama::Template;
use axum::{extract::State, response::Html};
use chrono::{Datelike, Utc};

use crate::auth::AuthContext;
use crate::error::GalleryError;
use crate::gallery;
use crate::state::AppState;

/// A day link on the index page
pub struct DayLink {
  pub display: String,
  pub url: String,
}

/// Days of one week on the index page
pub struct WeekView {
  pub label: String,
  pub days: Vec<DayLink>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub weeks: Vec<WeekView>,
  pub username: String,
  pub current_year: i32,
}

/// Render a template, logging instead of failing the request
pub fn render<T: Template>(template: &T) -> String {
  template.render().unwrap_or_else(|e| {
    tracing::error!("Template render failed: {}", e);
    String::new()
  })
}

/// Year shown in every page footer
pub fn current_year() -> i32 {
  Utc::now().year()
}

pub fn day_url(day: &str) -> String {
  format!("/day/{}", urlencoding::encode(day))
}

pub fn hour_url(day: &str, hour: &str) -> String {
  format!("/day/{}/hour/{}", urlencoding::encode(day), urlencoding::encode(hour))
}

pub fn hour_page_url(day: &str, hour: &str, page: i64) -> String {
  format!("{}?page={}", hour_url(day, hour), page)
}

pub fn image_url(day: &str, hour: &str, filename: &str) -> String {
  format!(
    "/images/{}/{}/{}/{}",
    urlencoding::encode(day),
    urlencoding::encode(hour),
    crate::paths::NORMAL_DIR,
    urlencoding::encode(filename)
  )
}

/// GET / - Weeks and their days, most recent first
pub async fn index(auth: AuthContext, State(state): State<AppState>) -> Html<String> {
  let weeks = gallery::group_by_weeks(&state.image_root)
    .into_iter()
    .map(|week| WeekView {
      label: week.label,
      days: week
        .days
        .into_iter()
        .map(|day| DayLink {
          url: day_url(&day.path),
          display: day.display,
        })
        .collect(),
    })
    .collect();

  let template = IndexTemplate {
    weeks,
    username: auth.username,
    current_year: current_year(),
  };

  Html(render(&template))
}

/// Fallback for unknown routes
pub async fn not_found() -> GalleryError {
  GalleryError::NotFound
}

pub use api::api_images;
pub use day::show_day;
pub use hour::show_hour;
pub use images::serve_image;
