//! Router-level tests driving the public HTTP surface.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use dubai_cooling_optimizer::api;
use dubai_cooling_optimizer::config::{Config, ServerConfig, SystemConfig, WeatherConfig};
use dubai_cooling_optimizer::state::AppState;
use dubai_cooling_optimizer::weather::{WeatherObservation, WeatherProvider, WeatherSource};

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            enable_cors: false,
            request_timeout_secs: 5,
        },
        weather: WeatherConfig {
            // Port 9 (discard): unreachable on purpose, exercised only by
            // the fallback test.
            base_url: "http://127.0.0.1:9".to_string(),
            latitude: 25.2048,
            longitude: 55.2708,
            timezone: "Asia/Dubai".to_string(),
            http_timeout_seconds: 1,
        },
        system: SystemConfig {
            peak_hours_per_day: 6.0,
        },
    }
}

/// Canned provider so tests never touch the network.
struct StubWeather(WeatherObservation);

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self) -> WeatherObservation {
        self.0.clone()
    }
}

fn stub_observation() -> WeatherObservation {
    WeatherObservation {
        temperature_c: 40.5,
        humidity_percent: 58.0,
        feels_like_c: 46.0,
        weather_code: 1,
        description: "Mainly clear".to_string(),
        timestamp: chrono::Utc::now().fixed_offset(),
        source: WeatherSource::Live,
    }
}

fn app_with_stub() -> axum::Router {
    let cfg = test_config();
    let state = AppState::with_provider(cfg.clone(), Arc::new(StubWeather(stub_observation())));
    api::router(state, &cfg)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = app_with_stub()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn weather_endpoint_returns_provider_observation() {
    let response = app_with_stub()
        .oneshot(
            Request::builder()
                .uri("/api/v1/weather")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["temperature_c"], 40.5);
    assert_eq!(body["humidity_percent"], 58.0);
    assert_eq!(body["source"], "live");
    assert_eq!(body["description"], "Mainly clear");
}

#[tokio::test]
async fn weather_endpoint_falls_back_when_upstream_unreachable() {
    // Real client against an unreachable upstream.
    let cfg = test_config();
    let state = AppState::new(cfg.clone());
    let app = api::router(state, &cfg);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/weather")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["temperature_c"], 42.0);
    assert_eq!(body["humidity_percent"], 65.0);
    assert_eq!(body["feels_like_c"], 48.0);
    assert_eq!(body["source"], "fallback");
}

#[tokio::test]
async fn tariffs_endpoint_returns_static_table() {
    let response = app_with_stub()
        .oneshot(
            Request::builder()
                .uri("/api/v1/tariffs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["residential"]["peak_aed_per_kwh"], 0.38);
    assert_eq!(body["residential"]["off_peak_aed_per_kwh"], 0.23);
    assert_eq!(body["commercial"]["standard_aed_per_kwh"], 0.35);
}

#[tokio::test]
async fn estimate_with_pinned_conditions_matches_reference_case() {
    let request = post_json(
        "/api/v1/estimate",
        json!({
            "area_m2": 50,
            "height_m": 3,
            "occupants": 4,
            "indoor_temp_c": 24,
            "outdoor_temp_c": 42,
            "outdoor_humidity_percent": 65
        }),
    );
    let response = app_with_stub().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;

    // No weather fetch was needed, so none is echoed back.
    assert!(body.get("weather").is_none());

    let load = &body["cooling_load"];
    assert!((load["room_sensible_heat_w"].as_f64().unwrap() - 904.5).abs() < 1e-9);
    assert_eq!(load["occupant_sensible_heat_w"], 360.0);
    assert_eq!(load["occupant_latent_heat_w"], 120.0);
    assert_eq!(load["equipment_heat_w"], 200.0);
    assert!((load["total_load_w"].as_f64().unwrap() - 1584.5).abs() < 1e-9);

    let energy = &body["energy"];
    let hourly = energy["hourly_energy_kwh"].as_f64().unwrap();
    let daily = energy["daily_energy_kwh"].as_f64().unwrap();
    assert!((daily - hourly * 12.0).abs() < 1e-9);

    let optimizations = body["optimizations"].as_array().unwrap();
    assert_eq!(optimizations.len(), 4);
    assert_eq!(optimizations[0]["strategy"], "Pre-cooling");
    assert_eq!(optimizations[1]["strategy"], "Setpoint +2°C");
    assert_eq!(optimizations[2]["strategy"], "Off-Peak Shift");
    assert_eq!(optimizations[3]["strategy"], "Combined");

    let profile = body["hourly_profile"].as_array().unwrap();
    assert_eq!(profile.len(), 24);
    assert_eq!(profile[0]["hour"], "00:00");
    assert_eq!(profile[23]["hour"], "23:00");
}

#[tokio::test]
async fn estimate_uses_weather_when_outdoor_conditions_omitted() {
    let request = post_json(
        "/api/v1/estimate",
        json!({
            "area_m2": 50,
            "height_m": 3,
            "occupants": 4,
            "indoor_temp_c": 24
        }),
    );
    let response = app_with_stub().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["weather"]["temperature_c"], 40.5);
    assert_eq!(body["weather"]["source"], "live");
    assert_eq!(body["room"]["outdoor_temp_c"], 40.5);
    assert_eq!(body["room"]["outdoor_humidity_percent"], 58.0);
}

#[tokio::test]
async fn estimate_honors_strategy_selection() {
    let request = post_json(
        "/api/v1/estimate",
        json!({
            "area_m2": 50,
            "height_m": 3,
            "occupants": 4,
            "indoor_temp_c": 24,
            "outdoor_temp_c": 42,
            "outdoor_humidity_percent": 65,
            "strategy": "Off-Peak Shift"
        }),
    );
    let response = app_with_stub().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let hourly = body["energy"]["hourly_energy_kwh"].as_f64().unwrap();
    let profile = body["hourly_profile"].as_array().unwrap();

    // Evening hours carry the shifted load under this strategy.
    let evening_baseline = profile[19]["baseline_kwh"].as_f64().unwrap();
    assert!((evening_baseline - (hourly * 1.1 * 100.0).round() / 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn estimate_rejects_invalid_area() {
    let request = post_json(
        "/api/v1/estimate",
        json!({
            "area_m2": -10,
            "height_m": 3,
            "occupants": 4,
            "indoor_temp_c": 24
        }),
    );
    let response = app_with_stub().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "ValidationError");
}
