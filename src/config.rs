//! Application configuration.
//!
//! Settings are read once at startup. Each key is looked up in the process
//! environment (after loading `.env`), then in the `[gallery]` table of
//! `config.toml`, then falls back to a default. The admin identity has no
//! default: starting without one is a configuration error.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::paths;

// ==================== Server Configuration ====================

/// Address to bind to unless HOST is set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port to bind to unless PORT is set
pub const DEFAULT_PORT: u16 = 8080;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

// ==================== Gallery Configuration ====================

/// Snapshots shown per page on the hour view and API
pub const IMAGES_PER_PAGE: usize = 25;

// ==================== Session Configuration ====================

/// Server-side lifetime of a session without "remember me"
pub const SESSION_DURATION_HOURS: i64 = 24;

/// Lifetime of a "remember me" session and its cookie
pub const REMEMBER_DURATION_DAYS: i64 = 30;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

/// Signing secret used when none is configured. Only fit for development.
pub const DEV_SECRET_KEY: &str = "dev-only-insecure-secret-change-me";

// ==================== Environment keys ====================

pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_IMAGE_ROOT: &str = "IMAGE_ROOT";
pub const ENV_ADMIN_USERNAME: &str = "ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub gallery: FileSettings,
}

/// `[gallery]` table of config.toml; every key is optional
#[derive(Debug, Default, Deserialize)]
pub struct FileSettings {
    pub secret_key: Option<String>,
    pub image_root: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub debug: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Errors that stop the server from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key was not set anywhere
    Missing(&'static str),
    /// A key was set to something that does not parse
    Invalid { key: &'static str, value: String },
    /// config.toml exists but could not be read or parsed
    File(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(
                f,
                "Missing required setting {} (set it in the environment, .env or config.toml)",
                key
            ),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
            ConfigError::File(path, err) => write!(f, "Failed to load {}: {}", path, err),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolved gallery configuration
#[derive(Clone)]
pub struct GalleryConfig {
    /// Secret the session cookie signing key is derived from
    pub secret_key: String,
    /// Directory holding the day folders
    pub image_root: PathBuf,
    pub admin_username: String,
    /// Plaintext as configured; hashed once at startup and not kept in state
    pub admin_password: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
}

impl std::fmt::Debug for GalleryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryConfig")
            .field("secret_key", &"<redacted>")
            .field("image_root", &self.image_root)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl GalleryConfig {
    /// Load configuration with priority: environment (.env) > config.toml > default
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let file = load_config_file(Path::new(CONFIG_FILE))?;
        Self::from_sources(|key| std::env::var(key).ok(), file.gallery)
    }

    /// Build configuration from an environment lookup and file settings.
    pub fn from_sources<F>(env: F, file: FileSettings) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let admin_username = lookup(ENV_ADMIN_USERNAME)
            .or(file.admin_username)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_ADMIN_USERNAME))?;

        let admin_password = lookup(ENV_ADMIN_PASSWORD)
            .or(file.admin_password)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_ADMIN_PASSWORD))?;

        let debug = match lookup(ENV_DEBUG) {
            Some(value) => parse_flag(ENV_DEBUG, &value)?,
            None => file.debug.unwrap_or(false),
        };

        let port = match lookup(ENV_PORT) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_PORT,
                value,
            })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            secret_key: lookup(ENV_SECRET_KEY)
                .or(file.secret_key)
                .unwrap_or_else(|| DEV_SECRET_KEY.to_string()),
            image_root: PathBuf::from(
                lookup(ENV_IMAGE_ROOT)
                    .or(file.image_root)
                    .unwrap_or_else(|| paths::DEFAULT_IMAGE_ROOT.to_string()),
            ),
            admin_username,
            admin_password,
            debug,
            host: lookup(ENV_HOST)
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Whether the signing secret is still the development default
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "snapshot_gallery=debug,tower_http=debug"
        } else {
            "snapshot_gallery=info,tower_http=info"
        }
    }
}

/// Read config.toml if present. A missing file is not an error.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let path_str = path.display().to_string();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::File(path_str.clone(), e.to_string()))?;
    let config = toml::from_str::<FileConfig>(&contents)
        .map_err(|e| ConfigError::File(path_str.clone(), e.to_string()))?;
    tracing::info!("Loaded settings from {}", path_str);
    Ok(config)
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
