use crate::record::SourceInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Movie subject metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub actors: Vec<String>,
    pub url: String,
    pub source: SourceInfo,
    /// Cover image URL, empty when missing or a placeholder
    pub cover: String,
    /// e.g. `imdb`
    pub identifiers: BTreeMap<String, String>,
    pub imdb: Option<String>,
    pub genres: Vec<String>,
    pub countries: Vec<String>,
    /// `YYYY-MM-DD`, or the raw page text when it could not be normalized
    pub release_date: Option<String>,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    /// HTML fragment
    pub description: String,
}

impl MovieRecord {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }
}
