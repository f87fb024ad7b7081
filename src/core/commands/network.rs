//! Commands backed by a [`DataProvider`]: `projects`, `readme`, `weather`, `quote`.
//!
//! `weather` and `quote` never surface a provider failure; they substitute a
//! fallback. `projects` and `readme` return the error text as their output.

use log::{debug, warn};
use pulldown_cmark::{Event, Parser, html};
use rand::Rng;

use crate::core::html as markup;
use crate::providers::{DataProvider, Quote};

pub const WEATHER_USAGE: &str = "Usage: weather [city]. Example: weather casablanca";

/// Quotations served without touching the network.
pub static LOCAL_QUOTES: [(&str, &str); 15] = [
    ("I'm not arguing, I'm just explaining why I'm right.", "Anonymous"),
    ("My bed is a magical place where I suddenly remember everything I forgot to do.", "Anonymous"),
    ("I'm not lazy, I'm on energy-saving mode.", "Anonymous"),
    ("If at first you don't succeed, then skydiving definitely isn't for you.", "Steven Wright"),
    ("I used to think I was indecisive, but now I'm not so sure.", "Anonymous"),
    ("Life is short. Smile while you still have teeth.", "Mallory Hopkins"),
    ("If you think nobody cares if you're alive, try missing a couple of payments.", "Earl Wilson"),
    ("Some people graduate with honors, I am just honored to graduate.", "Anonymous"),
    ("Why do they allow 'silent' in 'listen' but not in 'shut up'?", "Anonymous"),
    ("If you can't convince them, confuse them.", "Harry S. Truman"),
    ("Always borrow money from a pessimist. They won't expect it back.", "Oscar Wilde"),
    ("I told my computer I needed a break, and now it won't stop sending me beach wallpapers.", "Anonymous"),
    ("To steal ideas from one person is plagiarism; to steal from many is research.", "Steven Wright"),
    ("Common sense is like deodorant. The people who need it most never use it.", "Anonymous"),
    ("My wallet is like an onion. When I open it, it makes me cry.", "Anonymous"),
];

fn local_quote() -> Quote {
    let index = rand::rng().random_range(0..LOCAL_QUOTES.len());
    let (content, author) = LOCAL_QUOTES[index];
    Quote {
        content: content.to_string(),
        author: author.to_string(),
    }
}

fn coin_flip() -> bool {
    rand::rng().random_bool(0.5)
}

pub(super) async fn projects(provider: &dyn DataProvider) -> String {
    match provider.repositories().await {
        Ok(repos) => {
            debug!("{} returned {} repositories", provider.name(), repos.len());
            let lines: Vec<String> = repos
                .iter()
                .filter(|repo| !repo.fork)
                .map(|repo| {
                    format!(
                        "{} - {}",
                        markup::escape(&repo.name),
                        markup::link(&repo.html_url, &repo.html_url)
                    )
                })
                .collect();
            if lines.is_empty() {
                "No public repositories found.".to_string()
            } else {
                lines.join("\n")
            }
        }
        Err(e) => {
            warn!("projects: {e}");
            markup::escape(&e.to_string())
        }
    }
}

/// Markdown to HTML. Raw HTML blocks in the document are shown as text.
fn render_markdown(source: &str) -> String {
    let events = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len());
    html::push_html(&mut out, events);
    out
}

pub(super) async fn readme(provider: &dyn DataProvider) -> String {
    match provider.readme().await {
        Ok(body) => format!("Opening GitHub README...\n\n{}", render_markdown(&body)),
        Err(e) => {
            warn!("readme: {e}");
            markup::escape(&e.to_string())
        }
    }
}

pub(super) async fn weather(provider: &dyn DataProvider, args: &[String]) -> String {
    if args.is_empty() {
        return WEATHER_USAGE.to_string();
    }
    let city = args.join("+");
    match provider.weather(&city).await {
        Ok(report) => markup::escape(&report),
        Err(e) => {
            warn!("weather for {city}: {e}");
            format!(
                "Could not fetch the weather for {}. Try again later.",
                markup::escape(&args.join(" "))
            )
        }
    }
}

pub(super) async fn quote(provider: &dyn DataProvider) -> String {
    let quote = if coin_flip() {
        local_quote()
    } else {
        match provider.quote().await {
            Ok(q) if !q.content.trim().is_empty() => q,
            Ok(_) => local_quote(),
            Err(e) => {
                warn!("quote: {e}");
                local_quote()
            }
        }
    };
    markup::escape(&quote.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ProviderError, Repository};
    use crate::test_support::FakeProvider;

    fn repo(name: &str, fork: bool) -> Repository {
        Repository {
            name: name.into(),
            html_url: format!("https://github.com/ada/{name}"),
            fork,
            description: None,
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn projects_skips_forks() {
        let provider = FakeProvider {
            repositories: Ok(vec![repo("folio", false), repo("forked", true), repo("notes", false)]),
            ..FakeProvider::default()
        };
        let out = projects(&provider).await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("folio - <a class=\"link\" href=\"https://github.com/ada/folio\""));
        assert!(!out.contains("forked"));
    }

    #[tokio::test]
    async fn projects_surfaces_error_text() {
        let provider = FakeProvider::failing(ProviderError::Network("connection <refused>".into()));
        let out = projects(&provider).await;
        assert_eq!(out, "network error: connection &lt;refused&gt;");
    }

    #[tokio::test]
    async fn readme_renders_markdown() {
        let provider = FakeProvider {
            readme: Ok("# Hello\n\nsome *text*".into()),
            ..FakeProvider::default()
        };
        let out = readme(&provider).await;
        assert!(out.starts_with("Opening GitHub README...\n\n"));
        assert!(out.contains("<h1>Hello</h1>"));
        assert!(out.contains("<em>text</em>"));
    }

    #[tokio::test]
    async fn readme_neutralizes_raw_html() {
        let provider = FakeProvider {
            readme: Ok("<script>alert(1)</script>\n".into()),
            ..FakeProvider::default()
        };
        let out = readme(&provider).await;
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn readme_surfaces_error_text() {
        let provider = FakeProvider::failing(ProviderError::Api {
            status: 404,
            message: "Not Found".into(),
        });
        assert_eq!(readme(&provider).await, "API error (HTTP 404): Not Found");
    }

    #[tokio::test]
    async fn weather_without_city_prints_usage() {
        let provider = FakeProvider::default();
        assert_eq!(weather(&provider, &[]).await, WEATHER_USAGE);
        assert!(provider.weather_requests().is_empty());
    }

    #[tokio::test]
    async fn weather_joins_city_words_with_plus() {
        let provider = FakeProvider {
            weather: Ok("Sunny <25°C>".into()),
            ..FakeProvider::default()
        };
        let out = weather(&provider, &args(&["new", "york"])).await;
        assert_eq!(out, "Sunny &lt;25°C&gt;");
        assert_eq!(provider.weather_requests(), vec!["new+york"]);
    }

    #[tokio::test]
    async fn weather_failure_falls_back() {
        let provider = FakeProvider::failing(ProviderError::Network("timed out".into()));
        let out = weather(&provider, &args(&["london"])).await;
        assert_eq!(out, "Could not fetch the weather for london. Try again later.");
    }

    #[tokio::test]
    async fn quote_never_fails_or_is_empty() {
        let provider = FakeProvider::failing(ProviderError::Network("offline".into()));
        for _ in 0..32 {
            let out = quote(&provider).await;
            assert!(!out.trim().is_empty());
            assert!(out.contains('\u{2014}'));
        }
    }

    #[tokio::test]
    async fn quote_uses_provider_or_local_book() {
        let provider = FakeProvider::default();
        let remote = markup::escape(&provider.quote().await.unwrap().to_string());
        let local: Vec<String> = LOCAL_QUOTES
            .iter()
            .map(|(c, a)| {
                markup::escape(
                    &Quote {
                        content: c.to_string(),
                        author: a.to_string(),
                    }
                    .to_string(),
                )
            })
            .collect();
        for _ in 0..32 {
            let out = quote(&provider).await;
            assert!(out == remote || local.contains(&out), "unexpected quote {out}");
        }
    }
}
