pub mod http;
pub mod navigator;
pub mod provider;

pub use http::HttpProvider;
pub use navigator::{Navigator, RecordingNavigator, SystemNavigator};
pub use provider::{DataProvider, ProviderError, Quote, Repository};
