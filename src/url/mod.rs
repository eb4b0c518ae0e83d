//! URL handling module for Douban-Meta
//!
//! Subject URL recognition and search-result link decoding.

mod redirect;
mod subject;

pub use redirect::decode_redirect;
pub use subject::{is_subject_url, subject_id};

use crate::{UrlError, UrlResult};
use url::Url;

/// Turns one search-result href into a validated candidate subject URL
///
/// Wrapped links are decoded first; an href that is already a bare subject
/// URL is accepted as-is. Anything that does not end up matching the subject
/// pattern is rejected.
///
/// # Examples
///
/// ```
/// use douban_meta::url::candidate_url;
/// use url::Url;
///
/// let base = Url::parse("https://www.douban.com/search").unwrap();
/// let href = "https://www.douban.com/link2/?url=https%3A%2F%2Fbook.douban.com%2Fsubject%2F7%2F";
/// assert_eq!(candidate_url(href, &base).unwrap(), "https://book.douban.com/subject/7/");
/// assert!(candidate_url("https://www.douban.com/people/abc/", &base).is_err());
/// ```
pub fn candidate_url(href: &str, base: &Url) -> UrlResult<String> {
    let target = match decode_redirect(href, base) {
        Ok(target) => target,
        Err(UrlError::MissingRedirect(_)) if is_subject_url(href.trim()) => {
            href.trim().to_string()
        }
        Err(e) => return Err(e),
    };

    if is_subject_url(&target) {
        Ok(target)
    } else {
        Err(UrlError::NotSubject(target))
    }
}
