//! Publication and release date normalization

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Leading `YYYY-M[-D]`, as printed in book info blocks
static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{4})-(\d{1,2})(?:-(\d{1,2}))?").expect("valid year-month pattern")
});

/// `YYYY-MM-DD` anywhere in the text, as printed in movie release dates
static EMBEDDED_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid day pattern"));

/// How a raw date string is laid out on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `2020-11`, `2008-1`, optionally a day, possibly followed by other text
    YearMonth,
    /// `1994-09-10(多伦多电影节)`: a full date with trailing annotations
    EmbeddedDay,
}

/// Normalizes a raw date to `YYYY-MM-DD`, passing unparseable input through
///
/// # Examples
///
/// ```
/// use douban_meta::extract::{normalize_date, DateStyle};
///
/// assert_eq!(normalize_date("2020-11", DateStyle::YearMonth), "2020-11-01");
/// assert_eq!(normalize_date("1994-09-10(多伦多电影节)", DateStyle::EmbeddedDay), "1994-09-10");
/// assert_eq!(normalize_date("unknown", DateStyle::YearMonth), "unknown");
/// ```
pub fn normalize_date(raw: &str, style: DateStyle) -> String {
    try_normalize_date(raw, style).unwrap_or_else(|| raw.to_string())
}

/// Like [`normalize_date`] but returns `None` when nothing could be parsed
pub fn try_normalize_date(raw: &str, style: DateStyle) -> Option<String> {
    match style {
        DateStyle::YearMonth => year_month(raw),
        DateStyle::EmbeddedDay => embedded_day(raw),
    }
}

fn year_month(raw: &str) -> Option<String> {
    let caps = YEAR_MONTH.captures(raw)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day = caps
        .get(3)
        .and_then(|day| day.as_str().parse::<u32>().ok())
        .and_then(|day| NaiveDate::from_ymd_opt(year, month, day));

    // An impossible day still leaves a valid year-month
    day.or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|date| date.format("%Y-%m-%d").to_string())
}

fn embedded_day(raw: &str) -> Option<String> {
    let found = EMBEDDED_DAY.find(raw)?;
    NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
