//! Application state shared by all handlers.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::credentials::AdminCredentials;
use crate::auth::password::PasswordError;
use crate::config::GalleryConfig;
use crate::session::SessionStore;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory holding the day folders
    pub image_root: PathBuf,

    /// The one identity allowed to log in
    pub credentials: Arc<AdminCredentials>,

    /// Live login sessions
    pub sessions: SessionStore,

    /// Key used to sign the session cookie
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(image_root: PathBuf, credentials: AdminCredentials, secret_key: &str) -> Self {
        Self {
            image_root,
            credentials: Arc::new(credentials),
            sessions: SessionStore::new(),
            cookie_key: derive_cookie_key(secret_key),
        }
    }

    /// Build state from loaded configuration, hashing the admin password
    pub fn from_config(config: &GalleryConfig) -> Result<Self, PasswordError> {
        let credentials = AdminCredentials::from_config(config)?;
        Ok(Self::new(
            config.image_root.clone(),
            credentials,
            &config.secret_key,
        ))
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretch an arbitrary-length secret into the 64 bytes the cookie key needs
pub fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}
