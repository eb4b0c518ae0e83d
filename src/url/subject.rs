use regex::Regex;
use std::sync::LazyLock;

/// Canonical subject detail page: `.../subject/<digits>/`
static SUBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*/subject/(\d+)/?").expect("valid subject pattern"));

/// Extracts the numeric subject id from a detail URL
///
/// # Examples
///
/// ```
/// use douban_meta::url::subject_id;
///
/// assert_eq!(subject_id("https://book.douban.com/subject/35934902/"), Some("35934902"));
/// assert_eq!(subject_id("https://book.douban.com/tag/novel"), None);
/// ```
pub fn subject_id(url: &str) -> Option<&str> {
    SUBJECT_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns true if the URL points at a subject detail page
pub fn is_subject_url(url: &str) -> bool {
    SUBJECT_PATTERN.is_match(url)
}
