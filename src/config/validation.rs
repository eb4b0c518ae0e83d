use crate::config::types::{CacheConfig, Config, HttpConfig, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_search_config(&config.search)?;
    validate_cache_config(&config.cache)?;
    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.search_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid search_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "search_url must use HTTP or HTTPS, got '{}'",
            config.search_url
        )));
    }

    if config.book_category.is_empty() || config.movie_category.is_empty() {
        return Err(ConfigError::Validation(
            "search categories cannot be empty".to_string(),
        ));
    }

    if config.max_candidates < 1 {
        return Err(ConfigError::Validation(format!(
            "max_candidates must be >= 1, got {}",
            config.max_candidates
        )));
    }

    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "workers must be >= 1, got {}",
            config.workers
        )));
    }

    Ok(())
}

fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.capacity < 1 {
        return Err(ConfigError::Validation(format!(
            "cache capacity must be >= 1, got {}",
            config.capacity
        )));
    }

    Ok(())
}
