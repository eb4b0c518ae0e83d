//! Subject detail page parser
//!
//! Builds one record from one detail page. Each field is resolved on its own
//! and degrades to its default, so a malformed block never blanks the rest of
//! the record.

use crate::extract::charset::decode_page;
use crate::extract::dates::{normalize_date, try_normalize_date, DateStyle};
use crate::extract::fields::{
    element_text, filtered_links, next_element_sibling, rating_from_text, sibling_texts,
    split_list, tag_list, tail_of, text_of,
};
use crate::extract::labels::{lookup, LabelField, Rule};
use crate::record::{BookRecord, Kind, MovieRecord, Record, SourceInfo};
use crate::url::subject_id;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Cover anchors pointing at this path are "no cover yet" placeholders
const PLACEHOLDER_COVER_SUFFIX: &str = "update_image";

/// Suffix the site appends to `<title>`
const TITLE_SUFFIX: &str = "(豆瓣)";

macro_rules! selector {
    ($name:ident, $css:literal) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect(concat!("valid selector: ", $css)));
    };
}

selector!(TITLE, r#"span[property="v:itemreviewed"]"#);
selector!(PAGE_TITLE, "title");
selector!(SHARE_LINK, "a[data-url]");
selector!(COVER, "a.nbg");
selector!(RATING, r#"strong[property="v:average"]"#);
selector!(LABEL, "span.pl");
selector!(INTRO, "#link-report .intro");
selector!(SUMMARY, r#"span[property="v:summary"]"#);

/// Value read next to a label
#[derive(Debug, Clone, PartialEq)]
enum LabelValue {
    Text(String),
    List(Vec<String>),
}

impl LabelValue {
    fn into_text(self) -> Option<String> {
        let text = match self {
            LabelValue::Text(text) => text,
            LabelValue::List(items) => items.into_iter().next().unwrap_or_default(),
        };
        Some(text).filter(|t| !t.is_empty())
    }

    fn into_list(self) -> Vec<String> {
        match self {
            LabelValue::Text(text) if text.is_empty() => Vec::new(),
            LabelValue::Text(text) => vec![text],
            LabelValue::List(items) => items,
        }
    }
}

/// Fields shared by both kinds
#[derive(Debug, Default)]
struct Common {
    id: String,
    title: String,
    url: String,
    cover: String,
    tags: Vec<String>,
    description: String,
}

/// Parses detail pages of one kind
#[derive(Debug, Clone, Copy)]
pub struct DetailParser {
    kind: Kind,
}

impl DetailParser {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Parses a fetched detail page into a record
    ///
    /// Bytes are decoded per the page's BOM or `<meta>` charset, else as
    /// UTF-8 with lossy replacement. A page with no markup at all yields a
    /// record carrying only `url`.
    ///
    /// # Example
    ///
    /// ```
    /// use douban_meta::extract::DetailParser;
    /// use douban_meta::Kind;
    ///
    /// let page = r#"<html><body>
    ///     <span property="v:itemreviewed">活着</span>
    ///     <a data-url="https://book.douban.com/subject/4913064/">share</a>
    /// </body></html>"#.as_bytes();
    /// let record = DetailParser::new(Kind::Book).parse("https://book.douban.com/subject/4913064/", page);
    /// assert_eq!(record.title(), "活着");
    /// assert_eq!(record.id(), "4913064");
    /// ```
    pub fn parse(&self, url: &str, page: &[u8]) -> Record {
        let markup = decode_page(page);
        let markup: &str = &markup;

        if markup.trim().is_empty() {
            tracing::debug!("Empty detail page for {}", url);
            return Record::empty(self.kind, url);
        }

        let document = Html::parse_document(markup);
        let common = parse_common(&document, markup, url, self.kind);

        let record = match self.kind {
            Kind::Book => Record::Book(parse_book(&document, common)),
            Kind::Movie => Record::Movie(parse_movie(&document, common)),
        };

        tracing::debug!(
            "Parsed {} {} '{}' from {}",
            self.kind,
            record.id(),
            record.title(),
            url
        );
        record
    }
}

fn parse_common(document: &Html, markup: &str, url: &str, kind: Kind) -> Common {
    let url = canonical_url(document).unwrap_or_else(|| url.to_string());
    let id = subject_id(&url).unwrap_or_default().to_string();

    let mut description = last_intro(document);
    if description.is_empty() && kind == Kind::Movie {
        description = document
            .select(&SUMMARY)
            .next()
            .map(|summary| summary.html().trim().to_string())
            .unwrap_or_default();
    }

    Common {
        id,
        title: title(document),
        url,
        cover: cover(document),
        tags: tag_list(document, markup),
        description,
    }
}

fn title(document: &Html) -> String {
    let title = text_of(document.select(&TITLE), "");
    if !title.is_empty() {
        return title;
    }

    let page_title: String = document
        .select(&PAGE_TITLE)
        .next()
        .map(|t| t.text().collect())
        .unwrap_or_default();
    page_title
        .trim()
        .trim_end_matches(TITLE_SUFFIX)
        .trim()
        .to_string()
}

/// The share widget carries the canonical subject URL; the fetch URL may be a
/// mirror or redirect.
fn canonical_url(document: &Html) -> Option<String> {
    document
        .select(&SHARE_LINK)
        .filter_map(|a| a.value().attr("data-url"))
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

fn cover(document: &Html) -> String {
    document
        .select(&COVER)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty() && !href.ends_with(PLACEHOLDER_COVER_SUFFIX))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Some layouts nest several intro blocks; the last one is the rendered one.
fn last_intro(document: &Html) -> String {
    document
        .select(&INTRO)
        .last()
        .map(|intro| intro.html().trim().to_string())
        .unwrap_or_default()
}

/// Info-block labels of this document with the field each one fills
fn labels<'a>(
    document: &'a Html,
    kind: Kind,
) -> impl Iterator<Item = (LabelField, ElementRef<'a>)> {
    document.select(&LABEL).filter_map(move |label| {
        let text = element_text(label, "");
        lookup(kind, &text).map(|field| (field, label))
    })
}

fn read_label(rule: Rule, label: ElementRef<'_>) -> LabelValue {
    match rule {
        Rule::People(segments) => LabelValue::List(filtered_links(label, segments)),
        Rule::Tail => LabelValue::Text(tail_of(label, "")),
        Rule::TailList => LabelValue::List(split_list(&tail_of(label, ""))),
        Rule::NextSibling => LabelValue::Text(
            next_element_sibling(label)
                .map(|next| element_text(next, ""))
                .unwrap_or_default(),
        ),
        Rule::Siblings => {
            let texts = sibling_texts(label);
            if texts.is_empty() {
                LabelValue::Text(tail_of(label, ""))
            } else {
                LabelValue::List(texts)
            }
        }
    }
}

fn parse_book(document: &Html, common: Common) -> BookRecord {
    let mut book = BookRecord {
        id: common.id,
        title: common.title,
        source: SourceInfo::new(Kind::Book, &common.url),
        url: common.url,
        cover: common.cover,
        tags: common.tags,
        description: common.description,
        rating: rating_from_text(&text_of(document.select(&RATING), "0")),
        ..BookRecord::default()
    };

    let mut subtitle = None;

    for (field, label) in labels(document, Kind::Book) {
        let value = read_label(field.rule(), label);
        match field {
            LabelField::Authors => book.authors.extend(value.into_list()),
            LabelField::Translators => {
                let translators = value.into_list();
                book.authors.extend(translators.iter().cloned());
                book.translators.extend(translators);
            }
            LabelField::Publisher => book.publisher = value.into_text(),
            LabelField::Producer => book.producer = value.into_text(),
            LabelField::Subtitle => subtitle = value.into_text(),
            LabelField::OriginalTitle => book.original_title = value.into_text(),
            LabelField::PublishDate => {
                book.published_date = value
                    .into_text()
                    .map(|raw| normalize_date(&raw, DateStyle::YearMonth));
            }
            LabelField::Series => book.series = value.into_text(),
            LabelField::Isbn => {
                if let Some(isbn) = value.into_text() {
                    book.identifiers.insert("isbn".to_string(), isbn);
                }
            }
            LabelField::Languages => book.languages.extend(value.into_list()),
            _ => {}
        }
    }

    if let Some(subtitle) = subtitle {
        book.title = if book.title.is_empty() {
            subtitle
        } else {
            format!("{}:{}", book.title, subtitle)
        };
    }

    book
}

fn parse_movie(document: &Html, common: Common) -> MovieRecord {
    let mut movie = MovieRecord {
        id: common.id,
        title: common.title,
        source: SourceInfo::new(Kind::Movie, &common.url),
        url: common.url,
        cover: common.cover,
        tags: common.tags,
        description: common.description,
        ..MovieRecord::default()
    };

    for (field, label) in labels(document, Kind::Movie) {
        let value = read_label(field.rule(), label);
        match field {
            LabelField::Directors => movie.directors.extend(value.into_list()),
            LabelField::Writers => movie.writers.extend(value.into_list()),
            LabelField::Actors => movie.actors.extend(value.into_list()),
            LabelField::Genres => movie.genres.extend(value.into_list()),
            LabelField::Countries => movie.countries.extend(value.into_list()),
            LabelField::Languages => movie.languages.extend(value.into_list()),
            LabelField::ReleaseDate => movie.release_date = release_date(value.into_list()),
            LabelField::Imdb => {
                if let Some(imdb) = value.into_text() {
                    movie.identifiers.insert("imdb".to_string(), imdb.clone());
                    movie.imdb = Some(imdb);
                }
            }
            _ => {}
        }
    }

    movie
}

/// First release date that normalizes, else the first raw value
fn release_date(candidates: Vec<String>) -> Option<String> {
    candidates
        .iter()
        .find_map(|raw| try_normalize_date(raw, DateStyle::EmbeddedDay))
        .or_else(|| candidates.into_iter().next())
}
