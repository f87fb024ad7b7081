//! # Settings
//!
//! The read-only profile that commands interpolate into their output.
//!
//! Every field is optional and nothing here synthesizes a default: a field
//! that was never configured renders as the literal `undefined`, the same way
//! a missing key shows up in the generated text of a templated page.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for any setting that was not configured.
pub const UNDEFINED: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub display_name: Option<String>,
    pub shell_username: Option<String>,
    pub shell_hostname: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub resume_url: Option<String>,
    pub readme_url: Option<String>,
    pub repository_url: Option<String>,
}

fn or_undefined(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNDEFINED)
}

impl Settings {
    pub fn display_name(&self) -> &str {
        or_undefined(&self.display_name)
    }

    pub fn shell_username(&self) -> &str {
        or_undefined(&self.shell_username)
    }

    pub fn shell_hostname(&self) -> &str {
        or_undefined(&self.shell_hostname)
    }

    pub fn github(&self) -> &str {
        or_undefined(&self.github)
    }

    pub fn linkedin(&self) -> &str {
        or_undefined(&self.linkedin)
    }

    pub fn email(&self) -> &str {
        or_undefined(&self.email)
    }

    pub fn resume_url(&self) -> &str {
        or_undefined(&self.resume_url)
    }

    pub fn readme_url(&self) -> &str {
        or_undefined(&self.readme_url)
    }

    pub fn repository_url(&self) -> &str {
        or_undefined(&self.repository_url)
    }

    /// The prompt glyph shown before every echoed command, e.g. `visitor@folio:$ ~`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:$ ~", self.shell_username(), self.shell_hostname())
    }
}
