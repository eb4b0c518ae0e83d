//! Per-kind label tables
//!
//! Info blocks are a run of `<span class="pl">Label:</span> value` pairs. Each
//! kind maps literal label prefixes to the record field they fill and the rule
//! that reads the value. Labels missing from a table are ignored.

use crate::extract::fields::{AUTHOR_LINKS, CELEBRITY_LINKS};
use crate::record::Kind;

/// How the value next to a label is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Anchor names under the label's container, filtered by link target
    People(&'static [&'static str]),
    /// Text trailing the label
    Tail,
    /// `/`-separated list trailing the label
    TailList,
    /// Text of the element right after the label
    NextSibling,
    /// Texts of the elements after the label up to the line break
    Siblings,
}

/// Record field a label fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Authors,
    Translators,
    Publisher,
    Producer,
    Subtitle,
    OriginalTitle,
    PublishDate,
    Series,
    Isbn,
    Directors,
    Writers,
    Actors,
    Genres,
    Countries,
    Languages,
    ReleaseDate,
    Imdb,
}

impl LabelField {
    pub fn rule(&self) -> Rule {
        match self {
            LabelField::Authors | LabelField::Translators => Rule::People(AUTHOR_LINKS),
            LabelField::Directors | LabelField::Writers | LabelField::Actors => {
                Rule::People(CELEBRITY_LINKS)
            }
            LabelField::Publisher
            | LabelField::Producer
            | LabelField::Subtitle
            | LabelField::OriginalTitle
            | LabelField::PublishDate
            | LabelField::Isbn
            | LabelField::Imdb => Rule::Tail,
            LabelField::Countries | LabelField::Languages => Rule::TailList,
            LabelField::Series => Rule::NextSibling,
            LabelField::Genres | LabelField::ReleaseDate => Rule::Siblings,
        }
    }
}

const BOOK_LABELS: &[(&str, LabelField)] = &[
    ("作者", LabelField::Authors),
    ("译者", LabelField::Translators),
    ("出版社", LabelField::Publisher),
    ("出品方", LabelField::Producer),
    ("副标题", LabelField::Subtitle),
    ("原作名", LabelField::OriginalTitle),
    ("出版年", LabelField::PublishDate),
    ("丛书", LabelField::Series),
    ("ISBN", LabelField::Isbn),
    ("语言", LabelField::Languages),
];

const MOVIE_LABELS: &[(&str, LabelField)] = &[
    ("导演", LabelField::Directors),
    ("编剧", LabelField::Writers),
    ("主演", LabelField::Actors),
    ("类型", LabelField::Genres),
    ("制片国家/地区", LabelField::Countries),
    ("语言", LabelField::Languages),
    ("上映日期", LabelField::ReleaseDate),
    ("IMDb", LabelField::Imdb),
];

/// Label table for a kind, in matching order
pub fn label_table(kind: Kind) -> &'static [(&'static str, LabelField)] {
    match kind {
        Kind::Book => BOOK_LABELS,
        Kind::Movie => MOVIE_LABELS,
    }
}

/// Field for a label's text, matched by literal prefix
pub fn lookup(kind: Kind, label: &str) -> Option<LabelField> {
    let label = label.trim();
    label_table(kind)
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix))
        .map(|(_, field)| *field)
}
