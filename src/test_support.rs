//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::commands::Registry;
use crate::core::dispatcher::Dispatcher;
use crate::core::settings::Settings;
use crate::providers::{DataProvider, ProviderError, Quote, RecordingNavigator, Repository};

/// A provider with canned answers for each call.
pub struct FakeProvider {
    pub repositories: Result<Vec<Repository>, ProviderError>,
    pub readme: Result<String, ProviderError>,
    pub weather: Result<String, ProviderError>,
    pub quote: Result<Quote, ProviderError>,
    pub(crate) weather_calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    /// Every call fails with `err`.
    pub fn failing(err: ProviderError) -> Self {
        Self {
            repositories: Err(err.clone()),
            readme: Err(err.clone()),
            weather: Err(err.clone()),
            quote: Err(err),
            weather_calls: Mutex::new(Vec::new()),
        }
    }

    /// Cities passed to `weather`, in call order.
    pub fn weather_requests(&self) -> Vec<String> {
        self.weather_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            repositories: Ok(Vec::new()),
            readme: Ok("# readme".into()),
            weather: Ok("Sunny".into()),
            quote: Ok(Quote {
                content: "Remote wisdom".into(),
                author: "Upstream".into(),
            }),
            weather_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DataProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn repositories(&self) -> Result<Vec<Repository>, ProviderError> {
        self.repositories.clone()
    }

    async fn readme(&self) -> Result<String, ProviderError> {
        self.readme.clone()
    }

    async fn weather(&self, city: &str) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.weather_calls.lock() {
            calls.push(city.to_string());
        }
        self.weather.clone()
    }

    async fn quote(&self) -> Result<Quote, ProviderError> {
        self.quote.clone()
    }
}

pub fn test_settings() -> Settings {
    Settings {
        display_name: Some("Ada Lovelace".into()),
        shell_username: Some("visitor".into()),
        shell_hostname: Some("folio".into()),
        github: Some("ada".into()),
        linkedin: Some("ada-l".into()),
        email: Some("ada@example.com".into()),
        resume_url: Some("https://example.com/cv.pdf".into()),
        readme_url: Some("https://example.com/README.md".into()),
        repository_url: Some("https://github.com/ada/folio".into()),
    }
}

/// A dispatcher over the builtin registry with fake collaborators.
pub fn test_dispatcher() -> (Dispatcher, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let dispatcher = Dispatcher::new(
        Arc::new(Registry::builtin()),
        Arc::new(test_settings()),
        navigator.clone(),
        Arc::new(FakeProvider::default()),
    );
    (dispatcher, navigator)
}

/// Creates a test App with default settings.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(test_settings())
}
