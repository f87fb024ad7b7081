//! HTTP implementation of [`DataProvider`] backed by `reqwest`.
//!
//! - repositories: GitHub REST `GET /users/{user}/repos`
//! - readme: plain `GET` of the configured raw document URL
//! - weather: wttr.in text mode (`GET /{city}?ATm`)
//! - quote: quotable-style JSON (`{"content": .., "author": ..}`)
//!
//! Base URLs are injectable so tests can point them at a mock server.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::providers::{DataProvider, ProviderError, Quote, Repository};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the HTTP provider needs, already resolved from config.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpProviderConfig {
    pub github_user: Option<String>,
    pub readme_url: Option<String>,
    pub github_api_url: String,
    pub weather_url: String,
    pub quote_url: String,
    pub timeout: Duration,
}

impl Default for HttpProviderConfig {
    fn default() -> Self {
        Self {
            github_user: None,
            readme_url: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Deserialize, Debug)]
struct QuoteResponse {
    content: String,
    author: String,
}

pub struct HttpProvider {
    config: HttpProviderConfig,
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(config: HttpProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("shellfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client ({e}), falling back to defaults");
                reqwest::Client::new()
            });

        Self { config, client }
    }

    /// Issues a GET and returns the response once its status is known to be 2xx.
    async fn get(&self, url: &str) -> Result<reqwest::Response, ProviderError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Response status for {url}: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Upstream error from {url}: {status} - {message}");
            return Err(ProviderError::Api { status, message });
        }

        Ok(response)
    }

    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))
    }
}

fn trim_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// `{base}/{city}?ATm`, with the city percent-encoded as a single path segment.
fn weather_url(base: &str, city: &str) -> Result<reqwest::Url, ProviderError> {
    let mut url = reqwest::Url::parse(base)
        .map_err(|e| ProviderError::Config(format!("bad weather URL {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::Config(format!("weather URL {base} cannot take a path")))?
        .pop_if_empty()
        .push(city);
    url.set_query(Some("ATm"));
    Ok(url)
}

#[async_trait]
impl DataProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn repositories(&self) -> Result<Vec<Repository>, ProviderError> {
        let user = self
            .config
            .github_user
            .as_deref()
            .ok_or_else(|| ProviderError::Config("no GitHub handle configured".into()))?;
        let url = format!("{}/users/{}/repos", trim_slash(&self.config.github_api_url), user);

        let repos: Vec<Repository> = self
            .get(&url)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;
        info!("Fetched {} repositories for {user}", repos.len());
        Ok(repos)
    }

    async fn readme(&self) -> Result<String, ProviderError> {
        let url = self
            .config
            .readme_url
            .as_deref()
            .ok_or_else(|| ProviderError::Config("no readme URL configured".into()))?;
        let body = self.get_text(url).await?;
        info!("Fetched readme ({} bytes)", body.len());
        Ok(body)
    }

    async fn weather(&self, city: &str) -> Result<String, ProviderError> {
        let url = weather_url(&self.config.weather_url, city)?;
        self.get_text(url.as_str()).await
    }

    async fn quote(&self) -> Result<Quote, ProviderError> {
        let body: QuoteResponse = self
            .get(&self.config.quote_url)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;
        Ok(Quote {
            content: body.content,
            author: body.author,
        })
    }
}
