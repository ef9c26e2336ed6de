//! Paging over the snapshots of one hour.

use std::path::Path;

/// One page of an hour's snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    /// File names on this page, in capture order
    pub images: Vec<String>,
    /// Requested 1-based page number, echoed back as given
    pub current_page: i64,
    pub total_pages: usize,
    pub total_images: usize,
    /// `(<first> - <last>)` for the page, empty when the page is empty
    pub time_range: String,
}

impl ImagePage {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page >= 1 && (self.current_page as u64) < self.total_pages as u64
    }
}

/// Slice `images` into the requested page.
///
/// Pages outside `1..=total_pages` come back empty rather than failing.
pub fn paginate(images: &[String], page: i64, per_page: usize) -> ImagePage {
    let total_images = images.len();
    let total_pages = if per_page == 0 {
        0
    } else {
        total_images.div_ceil(per_page)
    };

    let slice: &[String] = match page_bounds(page, per_page, total_images) {
        Some((start, end)) => &images[start..end],
        None => &[],
    };

    ImagePage {
        images: slice.to_vec(),
        current_page: page,
        total_pages,
        total_images,
        time_range: time_range_label(slice),
    }
}

/// `[start, end)` of a page clipped to `len`, or `None` if the page is empty.
fn page_bounds(page: i64, per_page: usize, len: usize) -> Option<(usize, usize)> {
    let index = usize::try_from(page.checked_sub(1)?).ok()?;
    let start = index.checked_mul(per_page)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(per_page).min(len);
    Some((start, end))
}

/// Human-readable span of a page, e.g. `(10m 05s - 10m 59s)`.
pub fn time_range_label(images: &[String]) -> String {
    match (images.first(), images.last()) {
        (Some(first), Some(last)) => {
            format!("({} - {})", display_time(first), display_time(last))
        }
        _ => String::new(),
    }
}

/// Strip the extension and put a space after every `m`.
///
/// Purely cosmetic; names that are not time stamps pass through otherwise
/// unchanged.
pub fn display_time(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.to_string());
    stem.replace('m', "m ")
}
