use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_STARTUP_URLS: [&str; 4] = [
    "https://vercel.com",
    "https://nextjs.org",
    "https://v0.dev",
    "https://github.com",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub is_dev: bool,
    /// Public origin used for absolute links (sitemap).
    pub site_url: String,
    pub content_dir: PathBuf,
    pub dictionary_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub startup_urls: Vec<String>,
    pub preview: PreviewConfig,
}

/// Settings for outbound link preview fetching.
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            timeout: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = PreviewConfig::default();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", "port number")?.unwrap_or(8080),
            is_dev: env::var("APP_ENV").as_deref() != Ok("production"),
            site_url: env::var("SITE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://m4nuel.com".to_string()),
            content_dir: path_var("CONTENT_DIR", "content/legal"),
            dictionary_dir: path_var("DICTIONARY_DIR", "content/dictionaries"),
            assets_dir: path_var("ASSETS_DIR", "public/assets"),
            startup_urls: env::var("STARTUP_URLS")
                .ok()
                .map(|raw| parse_url_list(&raw))
                .filter(|urls| !urls.is_empty())
                .unwrap_or_else(|| DEFAULT_STARTUP_URLS.iter().map(|s| s.to_string()).collect()),
            preview: PreviewConfig {
                timeout: parse_var("PREVIEW_TIMEOUT_SECS", "number of seconds")?
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                cache_ttl: parse_var("PREVIEW_CACHE_TTL_SECS", "number of seconds")?
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.cache_ttl),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Reads an optional variable; present-but-unparsable is an error rather than
/// a silent fallback.
fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value,
            }),
        Err(_) => Ok(None),
    }
}

/// Splits a comma-separated list, dropping blanks.
pub fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
