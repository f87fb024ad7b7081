use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

/// Errors that can occur while fetching data for a command.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Provider misconfigured (missing handle, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Upstream returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the upstream response. Not retryable.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A repository as listed by the GitHub REST API. Unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{201c}{}\u{201d} \u{2014} {}", self.content, self.author)
    }
}

/// The network-backed collaborators behind `projects`, `readme`, `weather` and `quote`.
///
/// Implementations may suspend for as long as they like; the dispatcher imposes
/// no timeout of its own.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    async fn repositories(&self) -> Result<Vec<Repository>, ProviderError>;

    async fn readme(&self) -> Result<String, ProviderError>;

    /// `city` arrives pre-joined with `+` between words.
    async fn weather(&self, city: &str) -> Result<String, ProviderError>;

    async fn quote(&self) -> Result<Quote, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_for_api_errors() {
        let err = ProviderError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Not Found");
    }

    #[test]
    fn repository_ignores_unknown_fields() {
        let json = r#"{"name":"dotfiles","html_url":"https://github.com/me/dotfiles","stargazers_count":3}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "dotfiles");
        assert!(!repo.fork);
        assert_eq!(repo.description, None);
    }

    #[test]
    fn quote_display_uses_typographic_marks() {
        let quote = Quote {
            content: "Stay hungry".into(),
            author: "Someone".into(),
        };
        assert_eq!(quote.to_string(), "\u{201c}Stay hungry\u{201d} \u{2014} Someone");
    }
}
