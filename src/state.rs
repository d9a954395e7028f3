use std::sync::Arc;

use crate::config::Config;
use crate::weather::{OpenMeteoClient, WeatherProvider};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let weather = Arc::new(OpenMeteoClient::new(&cfg.weather));
        Self { cfg, weather }
    }

    /// Build state around an arbitrary weather provider. Used by tests to
    /// substitute a canned provider for the real client.
    pub fn with_provider(cfg: Config, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { cfg, weather }
    }
}
