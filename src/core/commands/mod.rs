//! # Commands
//!
//! A command is a named, async-capable unit of behavior. The built-in set is
//! the closed [`Builtin`] enum; each variant implements [`Command`] and is
//! registered once into a [`Registry`] at startup.
//!
//! ```text
//! "man echo"  →  Registry::resolve("man")  →  Builtin::Man.invoke(ctx, ["echo"])
//!                                                   │
//!                              CommandContext ──────┤ settings, registry,
//!                                                   │ navigator, provider
//!                                                   ▼
//!                                        Result<String, CommandError>
//! ```
//!
//! Output strings are HTML-safe: commands escape anything they did not write
//! themselves (see [`crate::core::html`]).

mod builtin;
mod help;
mod links;
mod manual;
mod network;
mod profile;
mod registry;
mod system;

use std::fmt;

use async_trait::async_trait;

use crate::core::settings::Settings;
use crate::providers::{DataProvider, Navigator, ProviderError};

pub use builtin::Builtin;
pub use network::LOCAL_QUOTES;
pub use registry::Registry;

/// Help grouping. Order of declaration is the order `help` prints them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    General,
    Profile,
    Social,
    Search,
    Projects,
    Weather,
    Fun,
    System,
    FileSystem,
    Editors,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::General,
        Category::Profile,
        Category::Social,
        Category::Search,
        Category::Projects,
        Category::Weather,
        Category::Fun,
        Category::System,
        Category::FileSystem,
        Category::Editors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Profile => "Profile",
            Category::Social => "Social",
            Category::Search => "Search",
            Category::Projects => "Projects",
            Category::Weather => "Weather",
            Category::Fun => "Fun",
            Category::System => "System",
            Category::FileSystem => "File System",
            Category::Editors => "Editors",
        }
    }
}

#[derive(Debug)]
pub enum CommandError {
    Provider(ProviderError),
    Failed(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Provider(e) => write!(f, "provider failed: {e}"),
            CommandError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ProviderError> for CommandError {
    fn from(e: ProviderError) -> Self {
        CommandError::Provider(e)
    }
}

/// Everything a command may read or call while it runs.
pub struct CommandContext<'a> {
    pub settings: &'a Settings,
    pub registry: &'a Registry,
    pub navigator: &'a dyn Navigator,
    pub provider: &'a dyn DataProvider,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Lower-case name the command is invoked by.
    fn name(&self) -> &str;

    /// Help grouping; `None` keeps the command out of the `help` table.
    fn category(&self) -> Option<Category> {
        None
    }

    /// Runs the command with the positional arguments that followed its name.
    async fn invoke(
        &self,
        ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<String, CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_print_in_declaration_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::FileSystem.label(), "File System");
    }

    #[test]
    fn provider_errors_convert() {
        let err: CommandError = ProviderError::Network("timed out".into()).into();
        assert_eq!(err.to_string(), "provider failed: network error: timed out");
    }
}
