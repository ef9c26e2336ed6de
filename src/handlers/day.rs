use askama::Template;
use axum::{
  extract::{Path, State},
  response::Html,
};

use super::{current_year, hour_url, image_url, render};
use crate::auth::AuthContext;
use crate::error::GalleryError;
use crate::gallery;
use crate::state::AppState;

/// One hour bucket on the day page
pub struct HourCard {
  pub name: String,
  pub url: String,
  pub thumbnail_url: Option<String>,
}

#[derive(Template)]
#[template(path = "day.html")]
pub struct DayTemplate {
  pub day: String,
  pub display_day: String,
  pub hours: Vec<HourCard>,
  pub current_year: i32,
}

/// GET /day/{day} - Hour buckets of a day with a thumbnail each
pub async fn show_day(
  _auth: AuthContext,
  State(state): State<AppState>,
  Path(day): Path<String>,
) -> Result<Html<String>, GalleryError> {
  let found = gallery::find_day(&state.image_root, &day)?;

  let hours = gallery::hour_summaries(&found.dir)
    .into_iter()
    .map(|hour| HourCard {
      url: hour_url(&day, &hour.name),
      thumbnail_url: hour
        .thumbnail
        .as_deref()
        .map(|thumb| image_url(&day, &hour.name, thumb)),
      name: hour.name,
    })
    .collect();

  let template = DayTemplate {
    display_day: gallery::display_date(found.date),
    day,
    hours,
    current_year: current_year(),
  };

  Ok(Html(render(&template)))
}
