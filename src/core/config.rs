//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shellfolio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Profile fields never get defaults: a field nobody set stays `None` and
//! renders as `undefined`. Only the provider endpoints have defaults.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::settings::Settings;
use crate::providers::http::{
    DEFAULT_GITHUB_API_URL, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_WEATHER_URL,
    HttpProviderConfig,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShellfolioConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub social: SocialConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub ps1_username: Option<String>,
    pub ps1_hostname: Option<String>,
    pub email: Option<String>,
    pub resume_url: Option<String>,
    pub readme_url: Option<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SocialConfig {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProvidersConfig {
    pub github_api_url: Option<String>,
    pub weather_url: Option<String>,
    pub quote_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub settings: Settings,
    pub provider: HttpProviderConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shellfolio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shellfolio").join("config.toml"))
}

/// Load config from `path`, or from `~/.shellfolio/config.toml` when `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShellfolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<ShellfolioConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShellfolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShellfolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShellfolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# shellfolio configuration
# All settings are optional. Profile fields left unset show up as "undefined".
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [profile]
# name = "Ada Lovelace"              # Or set SHELLFOLIO_NAME
# ps1_username = "visitor"
# ps1_hostname = "shellfolio"
# email = "ada@example.com"
# resume_url = "https://example.com/resume.pdf"
# readme_url = "https://raw.githubusercontent.com/ada/ada/main/README.md"
# repo = "https://github.com/ada/shellfolio"

# [social]
# github = "ada"
# linkedin = "ada-lovelace"

# [providers]
# github_api_url = "https://api.github.com"
# weather_url = "https://wttr.in"
# quote_url = "https://api.quotable.io/random"
# timeout_secs = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ShellfolioConfig) -> ResolvedConfig {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading variables through `env`.
pub fn resolve_with(
    config: &ShellfolioConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let pick = |key: &str, file: &Option<String>| env(key).or_else(|| file.clone());

    let profile = &config.profile;
    let settings = Settings {
        display_name: pick("SHELLFOLIO_NAME", &profile.name),
        shell_username: pick("SHELLFOLIO_USERNAME", &profile.ps1_username),
        shell_hostname: pick("SHELLFOLIO_HOSTNAME", &profile.ps1_hostname),
        github: pick("SHELLFOLIO_GITHUB", &config.social.github),
        linkedin: pick("SHELLFOLIO_LINKEDIN", &config.social.linkedin),
        email: pick("SHELLFOLIO_EMAIL", &profile.email),
        resume_url: pick("SHELLFOLIO_RESUME_URL", &profile.resume_url),
        readme_url: pick("SHELLFOLIO_README_URL", &profile.readme_url),
        repository_url: pick("SHELLFOLIO_REPO", &profile.repo),
    };

    let providers = &config.providers;
    let timeout_secs = match env("SHELLFOLIO_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            warn!("Ignoring SHELLFOLIO_TIMEOUT_SECS: {e}");
            providers.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
        }
        None => providers.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };
    let timeout_secs = if timeout_secs == 0 {
        warn!("A zero provider timeout fails every request; using {DEFAULT_TIMEOUT_SECS}s");
        DEFAULT_TIMEOUT_SECS
    } else {
        timeout_secs
    };

    let provider = HttpProviderConfig {
        github_user: settings.github.clone(),
        readme_url: settings.readme_url.clone(),
        github_api_url: pick("SHELLFOLIO_GITHUB_API_URL", &providers.github_api_url)
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        weather_url: pick("SHELLFOLIO_WEATHER_URL", &providers.weather_url)
            .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
        quote_url: pick("SHELLFOLIO_QUOTE_URL", &providers.quote_url)
            .unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string()),
        timeout: Duration::from_secs(timeout_secs),
    };

    ResolvedConfig { settings, provider }
}
