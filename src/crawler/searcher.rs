//! Catalog search and candidate fan-out
//!
//! A search issues one results-page request, keeps the first few valid
//! subject links and loads them concurrently on a fixed-size worker pool.
//! Records are collected as their loads finish.

use crate::config::{ResultOrder, SearchConfig};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::loader::Loader;
use crate::extract::decode_page;
use crate::record::{Kind, Record};
use crate::url::candidate_url;
use scraper::{Html, Selector};
use std::sync::{Arc, LazyLock};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Cover thumbnail anchors on the results page, one per hit
static RESULT_COVER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.nbg").expect("valid result selector"));

/// Searches one catalog and loads its top candidates
#[derive(Debug)]
pub struct Searcher {
    kind: Kind,
    fetcher: Fetcher,
    loader: Arc<Loader>,
    pool: Arc<Semaphore>,
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with its own worker pool of `config.workers` slots
    pub fn new(kind: Kind, fetcher: Fetcher, loader: Loader, config: SearchConfig) -> Self {
        let pool = Arc::new(Semaphore::new(config.workers.max(1)));
        Self {
            kind,
            fetcher,
            loader: Arc::new(loader),
            pool,
            config,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn loader(&self) -> &Arc<Loader> {
        &self.loader
    }

    /// Searches for `query` and loads the candidate subjects
    ///
    /// Never fails: an unreachable search page, zero candidates or failed
    /// loads all end in fewer (possibly zero) records.
    pub async fn search_subjects(&self, query: &str) -> Vec<Record> {
        let candidates = self.candidate_urls(query).await;
        if candidates.is_empty() {
            tracing::info!("No {} candidates for '{}'", self.kind, query);
            return Vec::new();
        }

        let records = self.load_all(candidates).await;
        tracing::info!(
            "Search '{}' returned {} {} record(s)",
            query,
            records.len(),
            self.kind
        );
        records
    }

    /// Fetches the results page and extracts at most `max_candidates` subject URLs
    pub async fn candidate_urls(&self, query: &str) -> Vec<String> {
        let base = match Url::parse(&self.config.search_url) {
            Ok(base) => base,
            Err(e) => {
                tracing::warn!("Invalid search URL {}: {}", self.config.search_url, e);
                return Vec::new();
            }
        };

        let category = self.kind.category(&self.config);
        let page = match self
            .fetcher
            .fetch_with_query(base.as_str(), &[("cat", category), ("q", query)])
            .await
        {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Search for '{}' failed: {}", query, e);
                return Vec::new();
            }
        };

        let markup = decode_page(&page);
        extract_candidates(&markup, &base, self.config.max_candidates)
    }

    /// Loads every candidate on the worker pool, in completion order unless
    /// rank order is configured
    async fn load_all(&self, candidates: Vec<String>) -> Vec<Record> {
        let mut tasks = JoinSet::new();

        for (index, url) in candidates.into_iter().enumerate() {
            let loader = Arc::clone(&self.loader);
            let pool = Arc::clone(&self.pool);
            tracing::debug!("Dispatching candidate {}: {}", index, url);

            tasks.spawn(async move {
                let _permit = pool.acquire_owned().await.ok()?;
                loader.load(&url).await.map(|record| (index, record))
            });
        }

        let mut loaded = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(entry)) => loaded.push(entry),
                Ok(None) => {}
                Err(e) => tracing::warn!("Candidate worker failed: {}", e),
            }
        }

        if self.config.result_order == ResultOrder::Rank {
            loaded.sort_by_key(|(index, _)| *index);
        }

        loaded.into_iter().map(|(_, record)| record).collect()
    }
}

/// Extracts up to `limit` valid subject URLs from a results page, in page order
///
/// # Example
///
/// ```
/// use douban_meta::crawler::extract_candidates;
/// use url::Url;
///
/// let page = r#"<a class="nbg" href="https://www.douban.com/link2/?url=https%3A%2F%2Fbook.douban.com%2Fsubject%2F1%2F">x</a>"#;
/// let base = Url::parse("https://www.douban.com/search").unwrap();
/// assert_eq!(extract_candidates(page, &base, 5), vec!["https://book.douban.com/subject/1/"]);
/// ```
pub fn extract_candidates(markup: &str, base: &Url, limit: usize) -> Vec<String> {
    let document = Html::parse_document(markup);

    document
        .select(&RESULT_COVER)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| match candidate_url(href, base) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Skipping search result: {}", e);
                None
            }
        })
        .take(limit)
        .collect()
}
