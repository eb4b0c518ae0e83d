//! Page decoding
//!
//! A byte-order mark wins, then a `<meta>` charset declaration near the top of
//! the page. Everything else is read as UTF-8. Malformed sequences are
//! replaced, never rejected.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Declarations are only honored within this many leading bytes
const PRESCAN_LIMIT: usize = 1024;

/// Matches both `<meta charset="gbk">` and the `http-equiv` content form
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#)
        .expect("valid meta charset pattern")
});

/// Decodes raw page bytes into text
///
/// # Examples
///
/// ```
/// use douban_meta::extract::decode_page;
///
/// assert_eq!(decode_page("<p>三体</p>".as_bytes()), "<p>三体</p>");
/// ```
pub fn decode_page(page: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(page) {
        return encoding.decode_without_bom_handling(&page[bom_len..]).0;
    }

    let encoding = declared_encoding(page).unwrap_or(UTF_8);
    if encoding != UTF_8 {
        tracing::trace!("Decoding page as {}", encoding.name());
    }
    encoding.decode_without_bom_handling(page).0
}

/// Encoding named by a `<meta>` declaration, if it is a known label
pub fn declared_encoding(page: &[u8]) -> Option<&'static Encoding> {
    let head = &page[..page.len().min(PRESCAN_LIMIT)];
    let label = META_CHARSET.captures(head)?.get(1)?.as_bytes();
    let encoding = Encoding::for_label(label)?;

    // A UTF-16 declaration in ASCII-compatible markup cannot be true
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Some(UTF_8);
    }
    Some(encoding)
}
