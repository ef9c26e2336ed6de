use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapshot_gallery::{app, config::GalleryConfig, state::AppState};

#[tokio::main]
async fn main() {
  let config = GalleryConfig::load();

  let default_filter = config
    .as_ref()
    .map(|c| c.default_log_filter())
    .unwrap_or("snapshot_gallery=info,tower_http=info");
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = match config {
    Ok(config) => config,
    Err(e) => {
      tracing::error!("Configuration error: {}", e);
      std::process::exit(1);
    }
  };
  tracing::debug!("Loaded configuration: {:?}", config);

  if config.uses_default_secret() {
    tracing::warn!("SECRET_KEY is not set; using the insecure development default");
  }

  if !config.image_root.exists() {
    match std::fs::create_dir_all(&config.image_root) {
      Ok(()) => tracing::info!("Created image root {}", config.image_root.display()),
      Err(e) => tracing::warn!(
        "Failed to create image root {}: {}",
        config.image_root.display(),
        e
      ),
    }
  }

  let state = match AppState::from_config(&config) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!("{}", e);
      std::process::exit(1);
    }
  };
  let app = app::router(state);

  let bind_addr = config.bind_addr();
  let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
    Ok(listener) => listener,
    Err(e) => {
      tracing::error!("Failed to bind to {}: {}", bind_addr, e);
      std::process::exit(1);
    }
  };

  tracing::info!(
    "Serving {} on http://{}",
    config.image_root.display(),
    bind_addr
  );

  if let Err(e) = axum::serve(listener, app).await {
    tracing::error!("Server error: {}", e);
    std::process::exit(1);
  }
}
