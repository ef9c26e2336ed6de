//! Shared fixtures for HTTP tests.

#![allow(dead_code)]

use axum_test::TestServer;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use snapshot_gallery::app;
use snapshot_gallery::auth::AdminCredentials;
use snapshot_gallery::paths::NORMAL_DIR;
use snapshot_gallery::state::AppState;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "@Cebiche123";
pub const SECRET: &str = "test-secret-key";

/// A gallery server over a temporary image root.
///
/// The image root is `<temp>/imagenes`, leaving `<temp>` itself as a place
/// for files that must stay unreachable.
pub struct TestGallery {
    pub temp: TempDir,
    pub server: TestServer,
}

impl TestGallery {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path().join("imagenes");
        fs::create_dir_all(&root).expect("Failed to create image root");

        let credentials =
            AdminCredentials::new(USERNAME, PASSWORD).expect("Failed to hash test password");
        let state = AppState::new(root, credentials, SECRET);

        let server = TestServer::builder()
            .save_cookies()
            .build(app::router(state))
            .expect("Failed to start test server");

        Self { temp, server }
    }

    pub fn root(&self) -> PathBuf {
        self.temp.path().join("imagenes")
    }

    pub fn add_day(&self, day: &str) -> PathBuf {
        let dir = self.root().join(day);
        fs::create_dir_all(&dir).expect("Failed to create day dir");
        dir
    }

    pub fn add_bare_hour(&self, day: &str, hour: &str) -> PathBuf {
        let dir = self.root().join(day).join(hour);
        fs::create_dir_all(&dir).expect("Failed to create hour dir");
        dir
    }

    pub fn add_image(&self, day: &str, hour: &str, filename: &str) -> PathBuf {
        let dir = self.root().join(day).join(hour).join(NORMAL_DIR);
        fs::create_dir_all(&dir).expect("Failed to create normal dir");
        let path = dir.join(filename);
        fs::write(&path, image_bytes(filename)).expect("Failed to write image");
        path
    }

    /// Write a file next to (not inside) the image root
    pub fn add_outside_file(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, b"outside the root").expect("Failed to write file");
        path
    }

    /// Log in with the test credentials; the session cookie is kept
    pub async fn login(&self) {
        let response = self
            .server
            .post("/login")
            .form(&[("username", USERNAME), ("password", PASSWORD)])
            .await;
        assert_eq!(response.status_code(), axum::http::StatusCode::SEE_OTHER);
    }
}

/// Recognisable fake payload for an image name
pub fn image_bytes(filename: &str) -> Vec<u8> {
    format!("fake image {}", filename).into_bytes()
}
