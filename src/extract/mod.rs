//! Field extraction from subject detail pages
//!
//! This module contains:
//! - Charset-aware page decoding
//! - A library of total extraction rules over a parsed document
//! - Date and rating normalization
//! - The per-kind label tables
//! - The detail parser that turns one page into one record

mod charset;
mod dates;
mod detail;
mod fields;
mod labels;

pub use charset::{declared_encoding, decode_page};
pub use dates::{normalize_date, try_normalize_date, DateStyle};
pub use detail::DetailParser;
pub use fields::{
    element_text, filtered_links, rating_from_text, tag_list, tail_of, text_of, AUTHOR_LINKS,
    CELEBRITY_LINKS,
};
pub use labels::{label_table, lookup, LabelField, Rule};
