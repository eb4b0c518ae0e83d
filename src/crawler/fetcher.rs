//! HTTP fetcher implementation
//!
//! This module performs every outbound request:
//! - Building the HTTP client with the fixed browser header profile
//! - GET requests returning raw body bytes
//! - Error classification (transport vs. HTTP status)
//!
//! There is no retry or caching here; both belong to the caller.

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use reqwest::Client;
use std::time::Duration;

/// Accept-Encoding sent with every request
pub const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate";

/// Performs GET requests with a fixed header profile
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher from the HTTP configuration
    ///
    /// # Example
    ///
    /// ```
    /// use douban_meta::config::HttpConfig;
    /// use douban_meta::crawler::Fetcher;
    ///
    /// let fetcher = Fetcher::new(&HttpConfig::default()).unwrap();
    /// ```
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Fetches a URL and returns its body
    ///
    /// Any 2xx status is success. Other statuses surface as
    /// `FetchError::Status`, network failures as `FetchError::Transport`.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetch_with_query(url, &[]).await
    }

    /// Fetches a URL with extra query parameters appended
    pub async fn fetch_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, FetchError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport(url, e))?;

        Ok(body.to_vec())
    }
}

/// Builds an HTTP client with the fixed browser header profile
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static(ACCEPT_ENCODING_VALUE),
    );

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .deflate(true)
        .build()
}

fn classify_transport(url: &str, error: reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    FetchError::Transport {
        url: url.to_string(),
        message,
    }
}
