use axum::{
  extract::{Path, Query, State},
  Json,
};
use serde::Serialize;

use super::hour::{load_page, PageQuery};
use crate::auth::AuthContext;
use crate::error::GalleryError;
use crate::state::AppState;

/// JSON body of the hour API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesResponse {
  pub images: Vec<String>,
  pub current_page: i64,
  pub total_pages: usize,
}

/// GET /api/images/{day}/{hour}?page=N - One page of snapshot names
pub async fn api_images(
  _auth: AuthContext,
  State(state): State<AppState>,
  Path((day, hour)): Path<(String, String)>,
  Query(query): Query<PageQuery>,
) -> Result<Json<ImagesResponse>, GalleryError> {
  let page = load_page(&state, &day, &hour, query.page_number())?;

  Ok(Json(ImagesResponse {
    images: page.images,
    current_page: page.current_page,
    total_pages: page.total_pages,
  }))
}
