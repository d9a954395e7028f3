use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::error::ApiError,
    calc::{
        calculate_cooling_load, calculate_energy_consumption, generate_hourly_profile,
        simulate_optimizations, tariff_rates, CoolingLoad, EnergyConsumption, HourlyPoint,
        OptimizationResult, OptimizationStrategy, TariffRates,
    },
    domain::{RoomParameters, TariffCategory},
    state::AppState,
    weather::WeatherObservation,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/weather", get(get_weather))
        .route("/tariffs", get(get_tariffs))
        .route("/estimate", post(post_estimate))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// Current Dubai weather, live or fallback (see the `source` field).
pub async fn get_weather(State(st): State<AppState>) -> impl IntoResponse {
    let observation = st.weather.current().await;
    (StatusCode::OK, Json(observation))
}

#[derive(Debug, Serialize)]
pub struct TariffTable {
    pub residential: TariffRates,
    pub commercial: TariffRates,
}

/// The static DEWA-style tariff table the cost calculation uses.
pub async fn get_tariffs() -> impl IntoResponse {
    Json(TariffTable {
        residential: tariff_rates(TariffCategory::Residential),
        commercial: tariff_rates(TariffCategory::Commercial),
    })
}

#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(range(min = 1.0, max = 10000.0, message = "area must be 1-10000 m²"))]
    pub area_m2: f64,
    #[validate(range(min = 1.0, max = 20.0, message = "height must be 1-20 m"))]
    pub height_m: f64,
    #[validate(range(max = 1000, message = "at most 1000 occupants"))]
    pub occupants: u32,
    #[validate(range(min = 16.0, max = 30.0, message = "setpoint must be 16-30 °C"))]
    pub indoor_temp_c: f64,
    /// When omitted, the live (or fallback) weather observation is used.
    pub outdoor_temp_c: Option<f64>,
    pub outdoor_humidity_percent: Option<f64>,
    #[serde(default)]
    pub tariff: TariffCategory,
    #[validate(range(min = 0.0, max = 12.0, message = "peak hours must be 0-12"))]
    pub peak_hours_per_day: Option<f64>,
    /// Strategy whose hourly profile the response charts.
    #[serde(default)]
    pub strategy: OptimizationStrategy,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Present only when outdoor conditions were taken from the weather
    /// provider rather than supplied by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherObservation>,
    pub room: RoomParameters,
    pub cooling_load: CoolingLoad,
    pub energy: EnergyConsumption,
    pub optimizations: Vec<OptimizationResult>,
    pub hourly_profile: Vec<HourlyPoint>,
}

/// Full estimate: load breakdown, energy cost, the four optimization
/// scenarios and the chart profile for the selected strategy.
pub async fn post_estimate(
    State(st): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    req.validate()?;

    let (outdoor_temp_c, outdoor_humidity_percent, weather) =
        if let (Some(temp), Some(humidity)) = (req.outdoor_temp_c, req.outdoor_humidity_percent) {
            (temp, humidity, None)
        } else {
            let observation = st.weather.current().await;
            (
                req.outdoor_temp_c.unwrap_or(observation.temperature_c),
                req.outdoor_humidity_percent
                    .unwrap_or(observation.humidity_percent),
                Some(observation),
            )
        };

    let room = RoomParameters {
        area_m2: req.area_m2,
        height_m: req.height_m,
        occupants: req.occupants,
        indoor_temp_c: req.indoor_temp_c,
        outdoor_temp_c,
        outdoor_humidity_percent,
    };
    let peak_hours_per_day = req
        .peak_hours_per_day
        .unwrap_or(st.cfg.system.peak_hours_per_day);

    let cooling_load = calculate_cooling_load(&room);
    let energy =
        calculate_energy_consumption(cooling_load.total_load_kw, req.tariff, peak_hours_per_day);
    let optimizations = simulate_optimizations(&room, &energy, req.tariff, peak_hours_per_day);

    let selected = optimizations
        .iter()
        .find(|o| o.strategy == req.strategy)
        .ok_or_else(|| ApiError::InternalError("strategy missing from simulation".to_string()))?;
    let hourly_profile = generate_hourly_profile(
        energy.hourly_energy_kwh,
        selected.optimized_daily_energy_kwh / 24.0,
        req.strategy,
    );

    Ok(Json(EstimateResponse {
        weather,
        room,
        cooling_load,
        energy,
        optimizations,
        hourly_profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_request_defaults() {
        let req: EstimateRequest = serde_json::from_str(
            r#"{"area_m2": 50, "height_m": 3, "occupants": 4, "indoor_temp_c": 24}"#,
        )
        .unwrap();

        assert_eq!(req.tariff, TariffCategory::Residential);
        assert_eq!(req.strategy, OptimizationStrategy::PreCooling);
        assert!(req.outdoor_temp_c.is_none());
        assert!(req.peak_hours_per_day.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_estimate_request_rejects_nonpositive_area() {
        let req: EstimateRequest = serde_json::from_str(
            r#"{"area_m2": 0, "height_m": 3, "occupants": 4, "indoor_temp_c": 24}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_estimate_request_parses_strategy_label() {
        let req: EstimateRequest = serde_json::from_str(
            r#"{
                "area_m2": 50, "height_m": 3, "occupants": 4, "indoor_temp_c": 24,
                "strategy": "Off-Peak Shift", "tariff": "commercial"
            }"#,
        )
        .unwrap();
        assert_eq!(req.strategy, OptimizationStrategy::OffPeakShift);
        assert_eq!(req.tariff, TariffCategory::Commercial);
    }
}
