//! Current-weather integration (Open-Meteo)
//!
//! Provides the outdoor conditions that feed the cooling-load calculation.
//! The fetch fails soft: any network or upstream error yields a typical
//! Dubai summer reading tagged as a fallback, never an error.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::WeatherConfig;

/// Fallback reading for Dubai typical summer conditions.
pub const FALLBACK_TEMPERATURE_C: f64 = 42.0;
pub const FALLBACK_HUMIDITY_PERCENT: f64 = 65.0;
pub const FALLBACK_FEELS_LIKE_C: f64 = 48.0;

/// Whether an observation came from the upstream API or is the canned
/// fallback substituted after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    Live,
    Fallback,
}

/// Snapshot of current outdoor conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub feels_like_c: f64,
    pub weather_code: u8,
    pub description: String,
    pub timestamp: DateTime<FixedOffset>,
    pub source: WeatherSource,
}

impl WeatherObservation {
    /// The reading substituted whenever the upstream fetch fails.
    pub fn fallback() -> Self {
        let now = Utc::now()
            .with_timezone(&chrono_tz::Asia::Dubai)
            .fixed_offset();
        Self {
            temperature_c: FALLBACK_TEMPERATURE_C,
            humidity_percent: FALLBACK_HUMIDITY_PERCENT,
            feels_like_c: FALLBACK_FEELS_LIKE_C,
            weather_code: 0,
            description: describe_weather_code(0).to_string(),
            timestamp: now,
            source: WeatherSource::Fallback,
        }
    }
}

/// Source of current outdoor conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns the current observation. Implementations never fail; a
    /// provider that cannot reach its upstream returns the fallback
    /// reading instead.
    async fn current(&self) -> WeatherObservation;
}

/// Open-Meteo API client.
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
}

impl OpenMeteoClient {
    pub fn new(cfg: &WeatherConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(cfg.http_timeout_seconds))
                .build()
                .unwrap_or_default(),
            base_url: cfg.base_url.clone(),
            latitude: cfg.latitude,
            longitude: cfg.longitude,
            timezone: cfg.timezone.clone(),
        }
    }

    async fn fetch_current(&self) -> Result<WeatherObservation> {
        let url = format!(
            "{}/v1/forecast?latitude={:.4}&longitude={:.4}\
             &current=temperature_2m,relative_humidity_2m,apparent_temperature,weather_code\
             &timezone={}",
            self.base_url, self.latitude, self.longitude, self.timezone
        );

        debug!(%url, "fetching current weather from Open-Meteo");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to send request to Open-Meteo")?;

        if !response.status().is_success() {
            anyhow::bail!("Open-Meteo error: {}", response.status());
        }

        let body: OpenMeteoResponse = response
            .json()
            .await
            .context("failed to parse Open-Meteo response")?;

        self.parse_observation(body)
    }

    fn parse_observation(&self, body: OpenMeteoResponse) -> Result<WeatherObservation> {
        let current = body.current;

        // Open-Meteo returns local wall-clock time without an offset when a
        // timezone parameter is given.
        let tz: Tz = self
            .timezone
            .parse()
            .unwrap_or(chrono_tz::Asia::Dubai);
        let timestamp = NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M")
            .context("unexpected observation time format")?
            .and_local_timezone(tz)
            .single()
            .context("ambiguous observation time")?
            .fixed_offset();

        Ok(WeatherObservation {
            temperature_c: current.temperature_2m,
            humidity_percent: current.relative_humidity_2m,
            feels_like_c: current.apparent_temperature,
            weather_code: current.weather_code,
            description: describe_weather_code(current.weather_code).to_string(),
            timestamp,
            source: WeatherSource::Live,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current(&self) -> WeatherObservation {
        match self.fetch_current().await {
            Ok(observation) => observation,
            Err(e) => {
                warn!(error = %e, "weather fetch failed, using Dubai fallback reading");
                WeatherObservation::fallback()
            }
        }
    }
}

/// Human-readable description for a WMO weather code.
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: OpenMeteoCurrent,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: u8,
}
