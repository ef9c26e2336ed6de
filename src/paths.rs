//! Gallery layout paths - single source of truth for the on-disk tree.
//!
//! The ingestion process writes snapshots as:
//!
//! ```text
//! <root>/<YYYY-MM-DD>/<N>_<am|pm>/normal/<image-filename>
//! ```
//!
//! Everything here builds paths *relative to the root*; resolving them to
//! real locations goes through [`crate::gallery::guard::resolve`].

use std::path::{Path, PathBuf};

/// Folder inside each hour bucket that holds the full-size snapshots
pub const NORMAL_DIR: &str = "normal";

/// Image root used when neither env nor config.toml sets one
pub const DEFAULT_IMAGE_ROOT: &str = "imagenes";

/// Static assets directory (stylesheet)
pub const STATIC_DIR: &str = "static";

/// `normal` folder for an already-resolved hour directory
pub fn normal_dir(hour_dir: &Path) -> PathBuf {
    hour_dir.join(NORMAL_DIR)
}

/// Root-relative path of an hour's `normal` folder
pub fn relative_normal_dir(day: &str, hour: &str) -> String {
    format!("{day}/{hour}/{NORMAL_DIR}")
}

/// Root-relative path of a single snapshot
pub fn relative_image(day: &str, hour: &str, filename: &str) -> String {
    format!("{day}/{hour}/{NORMAL_DIR}/{filename}")
}

// ==================== Tests ====================
