//! # Dispatcher
//!
//! Turns one raw input line into one [`HistoryEntry`].
//!
//! ```text
//! "  Echo  hi there "
//!      │ trim, split on whitespace
//!      ▼
//! name = "echo", args = ["hi", "there"]
//!      │ Registry::resolve
//!      ▼
//! invoke(ctx, args) ──Err / panic──► "echo: command failed..."
//!      │ Ok
//!      ▼
//! HistoryEntry { command: "  Echo  hi there ", output: "hi there" }
//! ```
//!
//! Nothing here is fatal: unknown names, command errors and panics all come
//! back as an ordinary entry.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, info, warn};

use crate::core::commands::{CommandContext, Registry};
use crate::core::history::HistoryEntry;
use crate::core::html;
use crate::core::settings::Settings;
use crate::providers::{DataProvider, Navigator};

pub fn not_found_message(token: &str) -> String {
    format!(
        "shellfolio: command not found: {}. Try 'help' to get started.",
        html::escape(token)
    )
}

pub fn failure_message(name: &str) -> String {
    format!(
        "{}: command failed. Please try again later.",
        html::escape(name)
    )
}

/// Owns the registry and the collaborators every command runs against.
///
/// Cloning is cheap; clones share everything.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    settings: Arc<Settings>,
    navigator: Arc<dyn Navigator>,
    provider: Arc<dyn DataProvider>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<Registry>,
        settings: Arc<Settings>,
        navigator: Arc<dyn Navigator>,
        provider: Arc<dyn DataProvider>,
    ) -> Self {
        Self {
            registry,
            settings,
            navigator,
            provider,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs `line` to completion. `None` for blank input.
    pub async fn execute(&self, line: &str) -> Option<HistoryEntry> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let token = tokens.next()?;
        let name = token.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        debug!("Dispatching {name:?} with {} args", args.len());

        let Some(command) = self.registry.resolve(&name) else {
            info!("Unknown command: {token}");
            return Some(HistoryEntry::new(line, not_found_message(token)));
        };

        let ctx = CommandContext {
            settings: &self.settings,
            registry: &self.registry,
            navigator: self.navigator.as_ref(),
            provider: self.provider.as_ref(),
        };

        let output = match AssertUnwindSafe(command.invoke(&ctx, &args))
            .catch_unwind()
            .await
        {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!("Command '{name}' failed: {e}");
                failure_message(&name)
            }
            Err(_) => {
                warn!("Command '{name}' panicked");
                failure_message(&name)
            }
        };

        Some(HistoryEntry::new(line, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_dispatcher;

    #[tokio::test]
    async fn blank_lines_produce_nothing() {
        let (dispatcher, _) = test_dispatcher();
        assert_eq!(dispatcher.execute("").await, None);
        assert_eq!(dispatcher.execute("   \t ").await, None);
    }

    #[tokio::test]
    async fn names_are_case_insensitive() {
        let (dispatcher, _) = test_dispatcher();
        let lower = dispatcher.execute("whoami").await.unwrap();
        let upper = dispatcher.execute("WhoAmI").await.unwrap();
        assert_eq!(lower.output, upper.output);
        assert_eq!(upper.command, "WhoAmI");
    }

    #[tokio::test]
    async fn command_text_is_kept_verbatim() {
        let (dispatcher, _) = test_dispatcher();
        let entry = dispatcher.execute("  echo   hi ").await.unwrap();
        assert_eq!(entry.command, "  echo   hi ");
        assert_eq!(entry.output, "hi");
    }

    #[tokio::test]
    async fn args_keep_their_case() {
        let (dispatcher, _) = test_dispatcher();
        let entry = dispatcher.execute("ECHO Hello   World").await.unwrap();
        assert_eq!(entry.output, "Hello World");
    }

    #[tokio::test]
    async fn unknown_command_is_reported() {
        let (dispatcher, _) = test_dispatcher();
        let entry = dispatcher.execute("frobnicate now").await.unwrap();
        assert_eq!(
            entry.output,
            "shellfolio: command not found: frobnicate. Try 'help' to get started."
        );
    }

    #[tokio::test]
    async fn unknown_command_token_is_escaped() {
        let (dispatcher, _) = test_dispatcher();
        let entry = dispatcher.execute("<img>").await.unwrap();
        assert!(entry.output.contains("&lt;img&gt;"));
        assert_eq!(entry.command, "<img>");
    }

    #[tokio::test]
    async fn prefixes_do_not_resolve() {
        let (dispatcher, _) = test_dispatcher();
        let entry = dispatcher.execute("hel").await.unwrap();
        assert!(entry.output.starts_with("shellfolio: command not found"));
    }

    #[test]
    fn failure_message_names_the_command() {
        assert_eq!(
            failure_message("weather"),
            "weather: command failed. Please try again later."
        );
    }
}
