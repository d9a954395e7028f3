//! What-if comparison of canned cooling optimization strategies.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::calc::energy::{calculate_energy_consumption, EnergyConsumption};
use crate::calc::load::calculate_cooling_load;
use crate::domain::{RoomParameters, TariffCategory};

/// Closed set of optimization strategies offered for comparison.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum OptimizationStrategy {
    #[default]
    #[serde(rename = "Pre-cooling")]
    #[strum(serialize = "Pre-cooling")]
    PreCooling,
    #[serde(rename = "Setpoint +2°C")]
    #[strum(serialize = "Setpoint +2°C")]
    SetpointPlus2,
    #[serde(rename = "Off-Peak Shift")]
    #[strum(serialize = "Off-Peak Shift")]
    OffPeakShift,
    #[serde(rename = "Combined")]
    #[strum(serialize = "Combined")]
    Combined,
}

/// Projected savings for one strategy against the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub strategy: OptimizationStrategy,
    pub description: String,
    pub energy_savings_kwh: f64,
    pub cost_savings_aed: f64,
    pub percentage_savings: f64,
    pub optimized_daily_energy_kwh: f64,
}

/// Produce the four what-if scenarios, in display order.
///
/// Three scenarios apply fixed percentage reductions; the setpoint scenario
/// re-runs the load and energy calculations with the thermostat raised 2 °C
/// and reports the actual delta against the baseline.
pub fn simulate_optimizations(
    baseline_params: &RoomParameters,
    baseline: &EnergyConsumption,
    category: TariffCategory,
    peak_hours_per_day: f64,
) -> Vec<OptimizationResult> {
    let mut results = Vec::with_capacity(4);

    // Pre-cooling: shave the afternoon peak by cooling ahead of it.
    let pre_cooling_savings_kwh = baseline.daily_energy_kwh * 0.15;
    results.push(OptimizationResult {
        strategy: OptimizationStrategy::PreCooling,
        description: "Cool space before peak hours (10am-12pm) to reduce afternoon load"
            .to_string(),
        energy_savings_kwh: pre_cooling_savings_kwh,
        cost_savings_aed: baseline.monthly_cost_aed * 0.15,
        percentage_savings: 15.0,
        optimized_daily_energy_kwh: baseline.daily_energy_kwh - pre_cooling_savings_kwh,
    });

    // Thermostat setpoint +2 °C: the only scenario recomputed from physics.
    let adjusted_params = baseline_params.with_setpoint_offset(2.0);
    let adjusted_load = calculate_cooling_load(&adjusted_params);
    let adjusted_energy =
        calculate_energy_consumption(adjusted_load.total_load_kw, category, peak_hours_per_day);
    let setpoint_savings_kwh = baseline.daily_energy_kwh - adjusted_energy.daily_energy_kwh;
    results.push(OptimizationResult {
        strategy: OptimizationStrategy::SetpointPlus2,
        description: format!(
            "Increase thermostat from {}°C to {}°C",
            baseline_params.indoor_temp_c, adjusted_params.indoor_temp_c
        ),
        energy_savings_kwh: setpoint_savings_kwh,
        cost_savings_aed: baseline.monthly_cost_aed - adjusted_energy.monthly_cost_aed,
        percentage_savings: setpoint_savings_kwh / baseline.daily_energy_kwh * 100.0,
        optimized_daily_energy_kwh: adjusted_energy.daily_energy_kwh,
    });

    // Off-peak shift: small energy savings, large cost savings.
    let off_peak_savings_kwh = baseline.daily_energy_kwh * 0.08;
    results.push(OptimizationResult {
        strategy: OptimizationStrategy::OffPeakShift,
        description: "Shift 40% of cooling to off-peak hours (6pm-10pm)".to_string(),
        energy_savings_kwh: off_peak_savings_kwh,
        cost_savings_aed: baseline.monthly_cost_aed * 0.22,
        percentage_savings: 22.0,
        optimized_daily_energy_kwh: baseline.daily_energy_kwh - off_peak_savings_kwh,
    });

    // Combined approach.
    let combined_savings_kwh = baseline.daily_energy_kwh * 0.32;
    results.push(OptimizationResult {
        strategy: OptimizationStrategy::Combined,
        description: "Pre-cooling + setpoint adjustment + off-peak shift".to_string(),
        energy_savings_kwh: combined_savings_kwh,
        cost_savings_aed: baseline.monthly_cost_aed * 0.35,
        percentage_savings: 35.0,
        optimized_daily_energy_kwh: baseline.daily_energy_kwh - combined_savings_kwh,
    });

    results
}
