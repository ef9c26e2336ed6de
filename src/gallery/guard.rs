//! Path safety checks for anything a client can name.

use std::path::{Component, Path, PathBuf};

use crate::error::GalleryError;

/// Resolve `relative` against `root`, refusing anything that lands outside it.
///
/// Both sides are canonicalized, so `..` segments and symlinks pointing out
/// of the root are caught as well as absolute inputs. The target must exist;
/// a missing path and an escaping path are indistinguishable to the caller.
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf, GalleryError> {
    let requested = Path::new(relative);
    if requested
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    {
        tracing::debug!("Rejected absolute path request: {}", relative);
        return Err(GalleryError::NotFound);
    }

    let root = root.canonicalize().map_err(|e| {
        tracing::warn!("Image root {} is not resolvable: {}", root.display(), e);
        GalleryError::NotFound
    })?;

    let resolved = root
        .join(requested)
        .canonicalize()
        .map_err(|_| GalleryError::NotFound)?;

    if resolved.starts_with(&root) {
        Ok(resolved)
    } else {
        tracing::debug!("Rejected path escaping image root: {}", relative);
        Err(GalleryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GalleryFixture;

    #[test]
    fn test_resolves_existing_image() {
        let fixture = GalleryFixture::new();
        fixture.add_image("2024-01-01", "7_am", "x.jpg");

        let resolved = resolve(fixture.root(), "2024-01-01/7_am/normal/x.jpg").unwrap();
        assert!(resolved.ends_with("2024-01-01/7_am/normal/x.jpg"));
        assert!(resolved.starts_with(fixture.root().canonicalize().unwrap()));
    }

    #[test]
    fn test_root_itself_is_allowed() {
        let fixture = GalleryFixture::new();
        let resolved = resolve(fixture.root(), "").unwrap();
        assert_eq!(resolved, fixture.root().canonicalize().unwrap());
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let fixture = GalleryFixture::new();
        fixture.add_image("2024-01-01", "7_am", "x.jpg");

        assert_eq!(
            resolve(fixture.root(), "../../etc/passwd"),
            Err(GalleryError::NotFound)
        );
        assert_eq!(
            resolve(fixture.root(), "2024-01-01/../../outside.txt"),
            Err(GalleryError::NotFound)
        );
    }

    #[test]
    fn test_absolute_path_rejected() {
        let fixture = GalleryFixture::new();
        assert_eq!(resolve(fixture.root(), "/etc/passwd"), Err(GalleryError::NotFound));
    }

    #[test]
    fn test_sibling_of_root_rejected() {
        // A sibling directory sharing the root's name prefix must not pass
        let parent = tempfile::TempDir::new().unwrap();
        let root = parent.path().join("imagenes");
        let sibling = parent.path().join("imagenes-private");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::create_dir_all(&sibling).unwrap();
        std::fs::write(sibling.join("secret.jpg"), b"x").unwrap();

        assert_eq!(
            resolve(&root, "../imagenes-private/secret.jpg"),
            Err(GalleryError::NotFound)
        );
    }

    #[test]
    fn test_inner_dotdot_that_stays_inside_is_allowed() {
        let fixture = GalleryFixture::new();
        fixture.add_image("2024-01-01", "7_am", "x.jpg");

        let resolved = resolve(fixture.root(), "2024-01-01/7_am/../7_am/normal/x.jpg").unwrap();
        assert!(resolved.ends_with("normal/x.jpg"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let fixture = GalleryFixture::new();
        assert_eq!(
            resolve(fixture.root(), "2024-01-01/7_am/normal/missing.jpg"),
            Err(GalleryError::NotFound)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_out_of_root_rejected() {
        let outside = tempfile::TempDir::new().unwrap();
        std::fs::write(outside.path().join("passwd"), b"root:x:0:0").unwrap();

        let fixture = GalleryFixture::new();
        std::os::unix::fs::symlink(outside.path(), fixture.root().join("escape")).unwrap();

        assert_eq!(
            resolve(fixture.root(), "escape/passwd"),
            Err(GalleryError::NotFound)
        );
    }
}
