//! Configuration module for Douban-Meta
//!
//! Every setting has a default, so `Config::default()` is a working
//! configuration. Files are TOML with kebab-case keys.
//!
//! # Example
//!
//! ```no_run
//! use douban_meta::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("douban.toml")).unwrap();
//! println!("Candidates per search: {}", config.search.max_candidates);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, HttpConfig, ResultOrder, SearchConfig, DEFAULT_BOOK_CATEGORY,
    DEFAULT_MOVIE_CATEGORY, DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_str};
pub use validation::validate;
