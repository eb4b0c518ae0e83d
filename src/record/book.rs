use crate::record::SourceInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Book subject metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    /// Authors followed by translators, in page order
    pub authors: Vec<String>,
    pub translators: Vec<String>,
    pub url: String,
    pub source: SourceInfo,
    /// Cover image URL, empty when missing or a placeholder
    pub cover: String,
    pub series: Option<String>,
    pub series_index: f64,
    /// e.g. `isbn`
    pub identifiers: BTreeMap<String, String>,
    pub publisher: Option<String>,
    pub producer: Option<String>,
    pub original_title: Option<String>,
    /// `YYYY-MM-DD`, or the raw page text when it could not be normalized
    pub published_date: Option<String>,
    /// 0-5 scale
    pub rating: f64,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    /// HTML fragment
    pub description: String,
}

impl BookRecord {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn isbn(&self) -> Option<&str> {
        self.identifiers.get("isbn").map(String::as_str)
    }
}
