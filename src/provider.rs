//! Public search facade
//!
//! A provider serves one kind of subject. It owns a searcher, its worker pool
//! and its record cache, all configured from an explicit [`Config`], so several
//! independently configured providers can coexist.

use crate::cache::RecordCache;
use crate::config::Config;
use crate::crawler::{Fetcher, Loader, Searcher};
use crate::extract::DetailParser;
use crate::record::{Kind, Record};
use crate::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metadata provider for one catalog
#[derive(Debug)]
pub struct Provider {
    searcher: Searcher,
    active: AtomicBool,
}

impl Provider {
    /// Creates an active provider with its own record cache
    ///
    /// # Example
    ///
    /// ```no_run
    /// use douban_meta::{Config, Kind, Provider};
    ///
    /// # async fn example() -> douban_meta::Result<()> {
    /// let provider = Provider::new(Kind::Movie, &Config::default())?;
    /// if let Some(movie) = provider.search_one("tt0111161").await {
    ///     println!("{} ({})", movie.title(), movie.id());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(kind: Kind, config: &Config) -> Result<Self> {
        let cache = Arc::new(RecordCache::new(config.cache.capacity));
        Self::with_cache(kind, config, cache)
    }

    /// Creates an active provider using the given record cache
    pub fn with_cache(kind: Kind, config: &Config, cache: Arc<RecordCache>) -> Result<Self> {
        let fetcher = Fetcher::new(&config.http)?;
        let loader = Loader::new(
            fetcher.clone(),
            DetailParser::new(kind),
            cache,
            Duration::from_millis(config.cache.politeness_delay_ms),
        );
        let searcher = Searcher::new(kind, fetcher, loader, config.search.clone());

        Ok(Self {
            searcher,
            active: AtomicBool::new(true),
        })
    }

    /// Book provider
    pub fn books(config: &Config) -> Result<Self> {
        Self::new(Kind::Book, config)
    }

    /// Movie provider
    pub fn movies(config: &Config) -> Result<Self> {
        Self::new(Kind::Movie, config)
    }

    pub fn kind(&self) -> Kind {
        self.searcher.kind()
    }

    pub fn cache(&self) -> &Arc<RecordCache> {
        self.searcher.loader().cache()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Enables or disables the provider; an inactive provider issues no requests
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    /// All records found for `query`; empty when inactive or nothing matched
    pub async fn search(&self, query: &str) -> Vec<Record> {
        if !self.is_active() {
            tracing::debug!("{} provider inactive, skipping '{}'", self.kind(), query);
            return Vec::new();
        }
        self.searcher.search_subjects(query).await
    }

    /// First record of [`Provider::search`], if any
    pub async fn search_one(&self, query: &str) -> Option<Record> {
        self.search(query).await.into_iter().next()
    }
}
