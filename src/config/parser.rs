use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Missing tables and keys fall back to their defaults, so an empty file
/// yields `Config::default()`.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use douban_meta::config::load_config;
///
/// let config = load_config(Path::new("douban.toml")).unwrap();
/// println!("Workers: {}", config.search.workers);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Parses and validates configuration from TOML text
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}
