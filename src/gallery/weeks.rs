//! Grouping day folders into Monday-Sunday weeks.

use chrono::{Datelike, Days, NaiveDate};
use std::fs;
use std::path::Path;

/// Folder-name format of a day under the image root
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Format used for every date shown to the user
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// A day folder as listed on the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    /// Folder name (`YYYY-MM-DD`), used in links
    pub path: String,
    /// `DD/MM/YYYY`
    pub display: String,
}

/// All days falling in one Monday-Sunday span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup {
    /// `<Monday> - <Sunday>` in display format
    pub label: String,
    pub days: Vec<DayEntry>,
}

/// Parse a day folder name; `None` for anything that is not a date.
///
/// Only the literal `YYYY-MM-DD` shape is accepted. chrono's `%Y` alone
/// would also take signed and extended years such as `+262142-12-31`.
pub fn parse_day(name: &str) -> Option<NaiveDate> {
    let bytes = name.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }

    let date = NaiveDate::parse_from_str(name, DAY_FORMAT).ok()?;
    (date.year() >= 1).then_some(date)
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Label of the Monday-Sunday week containing `date`.
///
/// `None` when the week runs past the end of the calendar chrono can hold.
pub fn week_label(date: NaiveDate) -> Option<String> {
    let monday =
        date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))?;
    let sunday = monday.checked_add_days(Days::new(6))?;
    Some(format!("{} - {}", display_date(monday), display_date(sunday)))
}

/// Group the day folders under `root` into weeks, most recent first.
///
/// Folder names are walked in descending order, so both the weeks and the
/// days inside each week come out newest first. Names that are not dates
/// are skipped. A missing root yields no weeks.
pub fn group_by_weeks(root: &Path) -> Vec<WeekGroup> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort_by(|a, b| b.cmp(a));

    let mut weeks: Vec<WeekGroup> = Vec::new();
    for name in names {
        let Some(date) = parse_day(&name) else {
            tracing::debug!("Skipping non-date folder under image root: {}", name);
            continue;
        };

        let Some(label) = week_label(date) else {
            tracing::debug!("Skipping day folder outside the supported calendar: {}", name);
            continue;
        };
        let day = DayEntry {
            display: display_date(date),
            path: name,
        };

        match weeks.iter_mut().find(|w| w.label == label) {
            Some(week) => week.days.push(day),
            None => weeks.push(WeekGroup {
                label,
                days: vec![day],
            }),
        }
    }

    weeks
}
