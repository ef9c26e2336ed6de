use axum::{
  body::Body,
  extract::{Path, Request, State},
  response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::auth::AuthContext;
use crate::error::GalleryError;
use crate::gallery;
use crate::state::AppState;

/// GET /images/{*path} - Raw snapshot bytes from under the image root
pub async fn serve_image(
  _auth: AuthContext,
  State(state): State<AppState>,
  Path(path): Path<String>,
  request: Request,
) -> Response {
  let resolved = match gallery::resolve(&state.image_root, &path) {
    Ok(resolved) if resolved.is_file() => resolved,
    Ok(_) => return GalleryError::NotFound.into_response(),
    Err(e) => return e.into_response(),
  };

  // ServeFile handles content type, conditional and range requests
  match ServeFile::new(&resolved).oneshot(request).await {
    Ok(response) => response.map(Body::new),
    Err(never) => match never {},
  }
}
