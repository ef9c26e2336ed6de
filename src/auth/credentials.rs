//! The single admin identity allowed into the gallery.

use super::password::{self, PasswordError};
use crate::config::GalleryConfig;

/// Configured admin login, with the password kept only as an argon2 hash
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Hash `password` and keep it alongside the username
    pub fn new(username: &str, password: &str) -> Result<Self, PasswordError> {
        Ok(Self {
            username: username.to_string(),
            password_hash: password::hash_password(password)?,
        })
    }

    pub fn from_config(config: &GalleryConfig) -> Result<Self, PasswordError> {
        Self::new(&config.admin_username, &config.admin_password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt.
    ///
    /// The password hash is checked even when the username is wrong, so both
    /// failure cases cost the same.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let password_ok = password::verify_password(password, &self.password_hash);
        let username_ok = username == self.username;
        username_ok && password_ok
    }
}
