//! Redirecting commands: profile links, contact, and web search.
//!
//! All of them share one shape: build a URL, hand it to the navigator, and
//! return a confirmation line. Navigation is fire-and-forget; nothing here
//! validates arguments, so `google` with no query searches for the empty string.

use reqwest::Url;

use crate::core::html;
use crate::core::settings::Settings;
use crate::providers::Navigator;

use super::{Builtin, CommandError};

const SUDO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Target and reply for the profile/contact links.
fn redirect(builtin: Builtin, settings: &Settings) -> (String, String) {
    match builtin {
        Builtin::Resume => (
            settings.resume_url().to_string(),
            "Opening my resume...".to_string(),
        ),
        Builtin::Github => (
            format!("https://github.com/{}/", settings.github()),
            "Opening github...".to_string(),
        ),
        Builtin::Linkedin => (
            format!("https://www.linkedin.com/in/{}/", settings.linkedin()),
            "Opening linkedin...".to_string(),
        ),
        Builtin::Email => {
            let mailto = format!("mailto:{}", settings.email());
            let reply = format!("Opening {}...", html::escape(&mailto));
            (mailto, reply)
        }
        Builtin::Sudo => (
            SUDO_URL.to_string(),
            "Permission denied: with little power comes... no responsibility? ".to_string(),
        ),
        _ => (
            settings.repository_url().to_string(),
            "Opening Github repository...".to_string(),
        ),
    }
}

pub(super) fn open(builtin: Builtin, settings: &Settings, navigator: &dyn Navigator) -> String {
    let (url, reply) = redirect(builtin, settings);
    navigator.request_navigation(&url);
    reply
}

/// Search endpoint and query parameter name for each engine.
fn engine(builtin: Builtin) -> (&'static str, &'static str) {
    match builtin {
        Builtin::Duckduckgo => ("https://duckduckgo.com/", "q"),
        Builtin::Bing => ("https://bing.com/search", "q"),
        Builtin::Reddit => ("https://www.reddit.com/search/", "q"),
        _ => ("https://google.com/search", "q"),
    }
}

pub(super) fn search(
    builtin: Builtin,
    args: &[String],
    navigator: &dyn Navigator,
) -> Result<String, CommandError> {
    let query = args.join(" ");
    let (base, param) = engine(builtin);
    let url = Url::parse_with_params(base, &[(param, query.as_str())])
        .map_err(|e| CommandError::Failed(format!("bad search URL: {e}")))?;
    navigator.request_navigation(url.as_str());

    let shown = html::escape(&query);
    Ok(match builtin {
        Builtin::Bing => format!("Wow, really? You are using bing for {shown}?"),
        _ => format!("Searching {} for {shown}...", builtin.as_str()),
    })
}
