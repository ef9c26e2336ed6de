//! Test utilities for building gallery trees on disk.
//!
//! Mirrors the ingestion layout (`<day>/<hour>/normal/<image>`) inside a
//! temporary directory that is removed when the fixture is dropped.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::paths::NORMAL_DIR;

/// Temporary image root with helpers for adding days, hours and images.
pub struct GalleryFixture {
    /// Temporary directory (kept alive for the lifetime of the fixture)
    pub temp: TempDir,
}

impl GalleryFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The image root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Create an empty day folder.
    pub fn add_day(&self, day: &str) -> PathBuf {
        let dir = self.root().join(day);
        fs::create_dir_all(&dir).expect("Failed to create day dir");
        dir
    }

    /// Create an hour bucket without a `normal` folder.
    pub fn add_bare_hour(&self, day: &str, hour: &str) -> PathBuf {
        let dir = self.root().join(day).join(hour);
        fs::create_dir_all(&dir).expect("Failed to create hour dir");
        dir
    }

    /// Create an hour bucket with an empty `normal` folder.
    pub fn add_hour(&self, day: &str, hour: &str) -> PathBuf {
        let dir = self.root().join(day).join(hour).join(NORMAL_DIR);
        fs::create_dir_all(&dir).expect("Failed to create normal dir");
        dir
    }

    /// Write a snapshot into `<day>/<hour>/normal/`.
    pub fn add_image(&self, day: &str, hour: &str, filename: &str) -> PathBuf {
        let dir = self.add_hour(day, hour);
        let path = dir.join(filename);
        fs::write(&path, filename.as_bytes()).expect("Failed to write image");
        path
    }

    /// Write a plain file directly under the root (not a day folder).
    pub fn add_root_file(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, b"not a day").expect("Failed to write file");
        path
    }
}
