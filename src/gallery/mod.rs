//! Read-only views over the snapshot tree.
//!
//! Day folders are grouped into weeks, hour folders are ordered by clock
//! time, and the snapshots of an hour are paged. Nothing here writes to disk.

pub mod guard;
pub mod hours;
pub mod pagination;
pub mod weeks;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::GalleryError;
use crate::paths;

pub use guard::resolve;
pub use hours::{hour_sort_key, hour_summaries, list_images, HourSummary, HOUR_SENTINEL};
pub use pagination::{paginate, time_range_label, ImagePage};
pub use weeks::{display_date, group_by_weeks, parse_day, DayEntry, WeekGroup};

/// A day folder that exists under the root and is named as a date
#[derive(Debug, Clone)]
pub struct DayDir {
    pub dir: PathBuf,
    pub date: NaiveDate,
}

/// Look up a day folder by name.
pub fn find_day(root: &Path, day: &str) -> Result<DayDir, GalleryError> {
    let date = parse_day(day).ok_or(GalleryError::NotFound)?;
    let dir = resolve(root, day)?;
    if !dir.is_dir() {
        return Err(GalleryError::NotFound);
    }
    Ok(DayDir { dir, date })
}

/// Sorted snapshots of `<day>/<hour>/normal`.
///
/// Fails if the day is not a date or the `normal` folder does not exist; an
/// existing but empty folder yields an empty list.
pub fn find_hour_images(root: &Path, day: &str, hour: &str) -> Result<Vec<String>, GalleryError> {
    parse_day(day).ok_or(GalleryError::NotFound)?;
    let normal = resolve(root, &paths::relative_normal_dir(day, hour))?;
    if !normal.is_dir() {
        return Err(GalleryError::NotFound);
    }
    Ok(list_images(&normal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GalleryFixture;

    #[test]
    fn test_find_day_existing() {
        let fixture = GalleryFixture::new();
        fixture.add_day("2024-06-10");

        let day = find_day(fixture.root(), "2024-06-10").unwrap();
        assert_eq!(display_date(day.date), "10/06/2024");
        assert!(day.dir.ends_with("2024-06-10"));
    }

    #[test]
    fn test_find_day_missing_or_malformed() {
        let fixture = GalleryFixture::new();
        fixture.add_day("misc");

        assert_eq!(find_day(fixture.root(), "2024-06-10").unwrap_err(), GalleryError::NotFound);
        assert_eq!(find_day(fixture.root(), "misc").unwrap_err(), GalleryError::NotFound);
        assert_eq!(find_day(fixture.root(), "..").unwrap_err(), GalleryError::NotFound);
    }

    #[test]
    fn test_find_day_rejects_file_named_as_date() {
        let fixture = GalleryFixture::new();
        fixture.add_root_file("2024-06-10");
        assert!(find_day(fixture.root(), "2024-06-10").is_err());
    }

    #[test]
    fn test_find_hour_images() {
        let fixture = GalleryFixture::new();
        fixture.add_image("2024-06-10", "9_am", "100030.jpg");
        fixture.add_image("2024-06-10", "9_am", "100000.jpg");

        let images = find_hour_images(fixture.root(), "2024-06-10", "9_am").unwrap();
        assert_eq!(images, vec!["100000.jpg", "100030.jpg"]);
    }

    #[test]
    fn test_find_hour_images_requires_normal_folder() {
        let fixture = GalleryFixture::new();
        fixture.add_bare_hour("2024-06-10", "9_am");

        assert_eq!(
            find_hour_images(fixture.root(), "2024-06-10", "9_am"),
            Err(GalleryError::NotFound)
        );
    }

    #[test]
    fn test_find_hour_images_empty_normal_folder() {
        let fixture = GalleryFixture::new();
        fixture.add_hour("2024-06-10", "9_am");

        assert_eq!(find_hour_images(fixture.root(), "2024-06-10", "9_am"), Ok(Vec::new()));
    }

    #[test]
    fn test_find_hour_images_requires_date_named_day() {
        let fixture = GalleryFixture::new();
        fixture.add_image("misc", "9_am", "100000.jpg");
        fixture.add_image("+262142-12-31", "9_am", "100000.jpg");

        assert_eq!(
            find_hour_images(fixture.root(), "misc", "9_am"),
            Err(GalleryError::NotFound)
        );
        assert_eq!(
            find_hour_images(fixture.root(), "+262142-12-31", "9_am"),
            Err(GalleryError::NotFound)
        );
    }

    #[test]
    fn test_find_hour_images_traversal_in_hour() {
        let fixture = GalleryFixture::new();
        fixture.add_image("2024-06-10", "9_am", "a.jpg");

        assert!(find_hour_images(fixture.root(), "2024-06-10", "../../..").is_err());
    }
}
