//! Hour buckets within a day: ordering and thumbnails.

use std::fs;
use std::path::Path;

use crate::paths;

/// Sort key for hour folder names that cannot be parsed.
/// Larger than any real hour so junk entries (e.g. `.DS_Store`) sort last.
pub const HOUR_SENTINEL: u8 = 99;

/// One hour bucket as shown on the day page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSummary {
    /// Folder name, e.g. `7_am`
    pub name: String,
    /// First snapshot of the hour, if the `normal` folder has any
    pub thumbnail: Option<String>,
}

/// Map an hour folder name like `07_am` or `12_PM` to a 0-23 ordering key.
///
/// The suffix defaults to `am` when missing. Anything that is not a 1-12
/// hour with an `am`/`pm` suffix maps to [`HOUR_SENTINEL`].
pub fn hour_sort_key(name: &str) -> u8 {
    parse_hour(name).unwrap_or(HOUR_SENTINEL)
}

fn parse_hour(name: &str) -> Option<u8> {
    let lowered = name.to_lowercase();
    let mut parts = lowered.split('_');

    let hour: u8 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    match parts.next().unwrap_or("am") {
        "pm" if hour != 12 => Some(hour + 12),
        "pm" => Some(hour),
        "am" if hour == 12 => Some(0),
        "am" => Some(hour),
        _ => None,
    }
}

/// Sorted file names in a directory; empty if it cannot be read.
///
/// Lexicographic order is taken to be capture order: the ingestion process
/// names snapshots with zero-padded time stamps.
pub fn list_images(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut images: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    images.sort();
    images
}

/// List the hour buckets of a day, in clock order, with a thumbnail each.
///
/// Hours without a `normal` folder are left out entirely. Ties on the sort
/// key keep directory listing order.
pub fn hour_summaries(day_dir: &Path) -> Vec<HourSummary> {
    let entries = match fs::read_dir(day_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut hours: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    hours.sort_by_key(|name| hour_sort_key(name));

    hours
        .into_iter()
        .filter_map(|name| {
            let normal = paths::normal_dir(&day_dir.join(&name));
            if !normal.is_dir() {
                tracing::debug!("Skipping hour {} without a normal folder", name);
                return None;
            }
            if hour_sort_key(&name) == HOUR_SENTINEL {
                tracing::debug!("Hour folder {} has an unrecognised name", name);
            }
            let thumbnail = list_images(&normal).into_iter().next();
            Some(HourSummary { name, thumbnail })
        })
        .collect()
}
