use crate::{UrlError, UrlResult};
use url::Url;

/// Query parameter carrying the real target of a search-result link
const REDIRECT_PARAM: &str = "url";

/// Decodes a search-result redirect wrapper into its target URL
///
/// Search results link through `.../link2/?url=<percent-encoded target>&...`.
/// Relative hrefs are resolved against `base`.
///
/// # Examples
///
/// ```
/// use douban_meta::url::decode_redirect;
/// use url::Url;
///
/// let base = Url::parse("https://www.douban.com/search").unwrap();
/// let href = "https://www.douban.com/link2/?url=https%3A%2F%2Fbook.douban.com%2Fsubject%2F1084336%2F&pos=0";
/// assert_eq!(
///     decode_redirect(href, &base).unwrap(),
///     "https://book.douban.com/subject/1084336/"
/// );
/// ```
pub fn decode_redirect(href: &str, base: &Url) -> UrlResult<String> {
    let href = href.trim();
    let url = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    url.query_pairs()
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| UrlError::MissingRedirect(href.to_string()))
}
