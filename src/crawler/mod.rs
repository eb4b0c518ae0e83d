//! Crawler module for subject discovery and retrieval
//!
//! This module contains the search→fetch→parse pipeline:
//! - HTTP fetching with a fixed browser header profile
//! - Cached, polite detail-page loading
//! - Search-result candidate extraction and concurrent fan-out

mod fetcher;
mod loader;
mod searcher;

pub use fetcher::{build_http_client, Fetcher, ACCEPT_ENCODING_VALUE};
pub use loader::Loader;
pub use searcher::{extract_candidates, Searcher};
