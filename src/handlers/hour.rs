use askama::Template;
use axum::{
  extract::{Path, Query, State},
  response::Html,
};
use serde::Deserialize;

use super::{current_year, day_url, hour_page_url, image_url, render};
use crate::auth::AuthContext;
use crate::config;
use crate::error::GalleryError;
use crate::gallery::{self, ImagePage};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
  /// Kept as text so a malformed value falls back to page 1 instead of a 400
  pub page: Option<String>,
}

impl PageQuery {
  pub fn page_number(&self) -> i64 {
    self
      .page
      .as_deref()
      .and_then(|p| p.trim().parse().ok())
      .unwrap_or(1)
  }
}

/// One snapshot in the hour grid
pub struct ImageTile {
  pub name: String,
  pub url: String,
}

#[derive(Template)]
#[template(path = "hour.html")]
pub struct HourTemplate {
  pub day: String,
  pub display_day: String,
  pub hour: String,
  pub day_url: String,
  pub images: Vec<ImageTile>,
  pub page: i64,
  pub total_pages: usize,
  pub total_images: usize,
  pub time_range: String,
  pub images_per_page: usize,
  pub prev_url: Option<String>,
  pub next_url: Option<String>,
  pub current_year: i32,
}

/// Load and page the snapshots of an hour. Shared with the JSON API.
pub fn load_page(
  state: &AppState,
  day: &str,
  hour: &str,
  page: i64,
) -> Result<ImagePage, GalleryError> {
  let images = gallery::find_hour_images(&state.image_root, day, hour)?;
  Ok(gallery::paginate(&images, page, config::IMAGES_PER_PAGE))
}

/// GET /day/{day}/hour/{hour}?page=N - Paged snapshot grid
pub async fn show_hour(
  _auth: AuthContext,
  State(state): State<AppState>,
  Path((day, hour)): Path<(String, String)>,
  Query(query): Query<PageQuery>,
) -> Result<Html<String>, GalleryError> {
  let page = load_page(&state, &day, &hour, query.page_number())?;
  // find_hour_images already checked the name parses
  let display_day = gallery::parse_day(&day)
    .map(gallery::display_date)
    .ok_or(GalleryError::NotFound)?;

  let prev_url = page
    .has_previous()
    .then(|| hour_page_url(&day, &hour, page.current_page - 1));
  let next_url = page
    .has_next()
    .then(|| hour_page_url(&day, &hour, page.current_page + 1));

  let images = page
    .images
    .iter()
    .map(|name| ImageTile {
      url: image_url(&day, &hour, name),
      name: name.clone(),
    })
    .collect();

  let template = HourTemplate {
    day_url: day_url(&day),
    display_day,
    images,
    page: page.current_page,
    total_pages: page.total_pages,
    total_images: page.total_images,
    time_range: page.time_range,
    images_per_page: config::IMAGES_PER_PAGE,
    prev_url,
    next_url,
    day,
    hour,
    current_year: current_year(),
  };

  Ok(Html(render(&template)))
}
