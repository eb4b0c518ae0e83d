//! Metadata records produced by the detail parser
//!
//! A record is built once by the parser and never mutated afterwards; the
//! cache and every caller receive clones of the same value.

mod book;
mod movie;

pub use book::BookRecord;
pub use movie::MovieRecord;

use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used for every record's source provenance
pub const SOURCE_ID: &str = "douban";

/// Catalog a subject belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Book,
    Movie,
}

impl Kind {
    /// Search `cat` parameter for this kind
    pub fn category<'a>(&self, config: &'a SearchConfig) -> &'a str {
        match self {
            Kind::Book => &config.book_category,
            Kind::Movie => &config.movie_category,
        }
    }

    /// Human-readable source description
    pub fn source_description(&self) -> &'static str {
        match self {
            Kind::Book => "Douban Books",
            Kind::Movie => "Douban Movies",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Book => "book",
            Kind::Movie => "movie",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a record came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub description: String,
    pub link: String,
}

impl SourceInfo {
    pub fn new(kind: Kind, link: &str) -> Self {
        Self {
            id: SOURCE_ID.to_string(),
            description: kind.source_description().to_string(),
            link: link.to_string(),
        }
    }
}

/// A parsed subject of either kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Book(BookRecord),
    Movie(MovieRecord),
}

impl Record {
    /// Empty record of the given kind carrying only its fetch URL
    pub fn empty(kind: Kind, url: &str) -> Self {
        match kind {
            Kind::Book => Record::Book(BookRecord::new(url)),
            Kind::Movie => Record::Movie(MovieRecord::new(url)),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Record::Book(_) => Kind::Book,
            Record::Movie(_) => Kind::Movie,
        }
    }

    /// Subject id; empty unless the canonical URL matched the subject pattern
    pub fn id(&self) -> &str {
        match self {
            Record::Book(book) => &book.id,
            Record::Movie(movie) => &movie.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Book(book) => &book.title,
            Record::Movie(movie) => &movie.title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Record::Book(book) => &book.url,
            Record::Movie(movie) => &movie.url,
        }
    }

    pub fn cover(&self) -> &str {
        match self {
            Record::Book(book) => &book.cover,
            Record::Movie(movie) => &movie.cover,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Record::Book(book) => &book.tags,
            Record::Movie(movie) => &movie.tags,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Record::Book(book) => &book.description,
            Record::Movie(movie) => &movie.description,
        }
    }

    pub fn source(&self) -> &SourceInfo {
        match self {
            Record::Book(book) => &book.source,
            Record::Movie(movie) => &movie.source,
        }
    }

    pub fn as_book(&self) -> Option<&BookRecord> {
        match self {
            Record::Book(book) => Some(book),
            Record::Movie(_) => None,
        }
    }

    pub fn as_movie(&self) -> Option<&MovieRecord> {
        match self {
            Record::Movie(movie) => Some(movie),
            Record::Book(_) => None,
        }
    }
}
