//! Cached, polite detail-page loading
//!
//! A load checks the shared record cache first. On a miss it pauses for a
//! random politeness interval, fetches the page, parses it and caches the
//! record. Failed fetches are not cached so a later call can still succeed.

use crate::cache::RecordCache;
use crate::crawler::fetcher::Fetcher;
use crate::extract::DetailParser;
use crate::record::Record;
use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Loads subject records through a bounded cache
#[derive(Debug)]
pub struct Loader {
    fetcher: Fetcher,
    parser: DetailParser,
    cache: Arc<RecordCache>,
    politeness_delay: Duration,
}

impl Loader {
    /// Creates a loader
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Client used for detail pages
    /// * `parser` - Parser for the loader's kind
    /// * `cache` - Record cache, possibly shared with other loaders
    /// * `politeness_delay` - Upper bound of the random pause before each fetch
    pub fn new(
        fetcher: Fetcher,
        parser: DetailParser,
        cache: Arc<RecordCache>,
        politeness_delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            parser,
            cache,
            politeness_delay,
        }
    }

    pub fn cache(&self) -> &Arc<RecordCache> {
        &self.cache
    }

    /// Loads the record for a subject URL
    ///
    /// # Returns
    ///
    /// * `Some(Record)` - From the cache, or freshly fetched and parsed
    /// * `None` - The fetch failed; nothing is cached
    pub async fn load(&self, url: &str) -> Option<Record> {
        if let Some(record) = self.cache.get(url) {
            tracing::debug!("Cache hit for {}", url);
            return Some(record);
        }

        let pause = self.politeness_pause();
        tracing::debug!("Random sleep {}ms before {}", pause.as_millis(), url);
        tokio::time::sleep(pause).await;

        let start_time = Instant::now();
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", url, e);
                return None;
            }
        };
        tracing::info!(
            "Downloaded {} {} in {}ms",
            self.parser.kind(),
            url,
            start_time.elapsed().as_millis()
        );

        let record = self.parser.parse(url, &page);
        self.cache.insert(url, record.clone());
        Some(record)
    }

    fn politeness_pause(&self) -> Duration {
        let max_ms = u64::try_from(self.politeness_delay.as_millis()).unwrap_or(u64::MAX);
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
    }
}
