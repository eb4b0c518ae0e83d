//! Stateless extraction rules over a parsed document
//!
//! Every rule is total: missing nodes, blank text and odd nesting produce the
//! caller's default instead of an error.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
static TAG_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[class*="tag"]"#).expect("valid tag selector"));
static CRITERIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"criteria = '(.+)'").expect("valid criteria pattern"));

/// Prefix marking tag entries inside the inline `criteria` assignment
const CRITERIA_TAG_PREFIX: &str = "7:";

/// Link targets accepted for book people lists
pub const AUTHOR_LINKS: &[&str] = &["/author", "/search"];

/// Link targets accepted for movie people lists
pub const CELEBRITY_LINKS: &[&str] = &["/celebrity", "/search"];

/// Stripped text of the first node, or `default`
///
/// # Examples
///
/// ```
/// use douban_meta::extract::text_of;
/// use scraper::{Html, Selector};
///
/// let doc = Html::parse_fragment(r#"<span class="pl"><span> 作者 </span></span>"#);
/// let sel = Selector::parse("span.pl").unwrap();
/// assert_eq!(text_of(doc.select(&sel), ""), "作者");
/// assert_eq!(text_of(doc.select(&Selector::parse("em").unwrap()), "n/a"), "n/a");
/// ```
pub fn text_of<'a, I>(nodes: I, default: &str) -> String
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    match nodes.into_iter().next() {
        Some(element) => element_text(element, default),
        None => default.to_string(),
    }
}

/// Stripped direct text of an element, descending into its first child
/// element when the element itself carries none
pub fn element_text(element: ElementRef<'_>, default: &str) -> String {
    let own = direct_text(element);
    if !own.is_empty() {
        return own;
    }

    match first_child_element(element) {
        Some(child) => element_text(child, default),
        None => default.to_string(),
    }
}

/// Stripped text following a label node, up to the next element
///
/// Falls back to the next sibling element's text when the label is followed
/// directly by a wrapping element.
pub fn tail_of(label: ElementRef<'_>, default: &str) -> String {
    let tail = tail_text(label);
    if !tail.is_empty() {
        return tail;
    }

    match next_element_sibling(label) {
        Some(next) => element_text(next, default),
        None => default.to_string(),
    }
}

/// Texts of the elements following a label up to the next line break
pub fn sibling_texts(label: ElementRef<'_>) -> Vec<String> {
    let mut texts = Vec::new();

    for sibling in label.next_siblings().filter_map(ElementRef::wrap) {
        if sibling.value().name() == "br" {
            break;
        }
        let text = element_text(sibling, "");
        if !text.is_empty() {
            texts.push(text);
        }
    }

    texts
}

/// Names of the anchors under a label's container whose target contains one
/// of `segments`
///
/// Containers mix people links with decorative ones (e.g. "more" toggles),
/// so only recognised link targets count.
pub fn filtered_links(label: ElementRef<'_>, segments: &[&str]) -> Vec<String> {
    let Some(container) = label.parent().and_then(ElementRef::wrap) else {
        return Vec::new();
    };

    container
        .select(&ANCHOR)
        .filter(|a| {
            a.value()
                .attr("href")
                .map(|href| segments.iter().any(|segment| href.contains(segment)))
                .unwrap_or(false)
        })
        .map(|a| element_text(a, ""))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Tag list from tag anchors, or from the inline `criteria` script
///
/// Some pages render tags only into an inline script of the form
/// `criteria = '7:tag|7:tag|6:other'`; only `7:` entries are tags.
pub fn tag_list(document: &Html, raw_markup: &str) -> Vec<String> {
    let tags: Vec<String> = document
        .select(&TAG_ANCHOR)
        .map(|a| element_text(a, ""))
        .filter(|tag| !tag.is_empty())
        .collect();

    if !tags.is_empty() {
        return tags;
    }

    criteria_tags(raw_markup)
}

fn criteria_tags(raw_markup: &str) -> Vec<String> {
    let Some(criteria) = CRITERIA.captures(raw_markup).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    criteria
        .as_str()
        .split('|')
        .filter_map(|entry| entry.strip_prefix(CRITERIA_TAG_PREFIX))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a 0-10 score into the 0-5 scale, 0.0 when missing or unparseable
pub fn rating_from_text(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => score / 2.0,
        _ => 0.0,
    }
}

/// Splits a `/`-separated value list such as `美国 / 英国`
pub fn split_list(text: &str) -> Vec<String> {
    text.split('/')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn first_child_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.children().find_map(ElementRef::wrap)
}

fn direct_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text().map(|text| &**text))
        .collect::<String>()
        .trim()
        .to_string()
}

fn tail_text(element: ElementRef<'_>) -> String {
    let mut tail = String::new();

    for sibling in element.next_siblings() {
        if sibling.value().is_element() {
            break;
        }
        if let Some(text) = sibling.value().as_text() {
            tail.push_str(text);
        }
    }

    tail.trim().to_string()
}
