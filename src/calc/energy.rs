//! Electrical energy and DEWA cost derived from a cooling load.

use serde::{Deserialize, Serialize};

use crate::domain::TariffCategory;

/// Coefficient of performance assumed for modern AC systems.
pub const COP: f64 = 3.0;
/// Assumed AC operating hours per day.
pub const OPERATING_HOURS_PER_DAY: f64 = 12.0;
/// Default share of operation falling into peak tariff hours.
pub const DEFAULT_PEAK_HOURS_PER_DAY: f64 = 6.0;
/// Billing days per month.
pub const BILLING_DAYS_PER_MONTH: f64 = 30.0;

/// Per-kWh rates for one customer category, AED/kWh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TariffRates {
    pub peak_aed_per_kwh: f64,
    pub off_peak_aed_per_kwh: f64,
    pub standard_aed_per_kwh: f64,
}

/// Simplified DEWA electricity tariffs.
pub fn tariff_rates(category: TariffCategory) -> TariffRates {
    match category {
        TariffCategory::Residential => TariffRates {
            peak_aed_per_kwh: 0.38,
            off_peak_aed_per_kwh: 0.23,
            standard_aed_per_kwh: 0.32,
        },
        TariffCategory::Commercial => TariffRates {
            peak_aed_per_kwh: 0.42,
            off_peak_aed_per_kwh: 0.25,
            standard_aed_per_kwh: 0.35,
        },
    }
}

/// Energy draw and cost for a cooling load under one tariff category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyConsumption {
    pub hourly_energy_kwh: f64,
    pub daily_energy_kwh: f64,
    pub hourly_cost_aed: f64,
    pub monthly_cost_aed: f64,
}

/// Convert a cooling load (kW of heat to remove) into electrical energy and
/// cost. Daily energy splits into peak and off-peak bands by
/// `peak_hours_per_day`; the hourly cost uses the standard rate.
pub fn calculate_energy_consumption(
    cooling_load_kw: f64,
    category: TariffCategory,
    peak_hours_per_day: f64,
) -> EnergyConsumption {
    let actual_power_kw = cooling_load_kw / COP;

    let hourly_energy_kwh = actual_power_kw;
    let daily_energy_kwh = hourly_energy_kwh * OPERATING_HOURS_PER_DAY;

    let peak_energy_kwh = hourly_energy_kwh * peak_hours_per_day;
    let off_peak_energy_kwh = daily_energy_kwh - peak_energy_kwh;

    let rates = tariff_rates(category);
    let daily_cost_aed = peak_energy_kwh * rates.peak_aed_per_kwh
        + off_peak_energy_kwh * rates.off_peak_aed_per_kwh;

    EnergyConsumption {
        hourly_energy_kwh,
        daily_energy_kwh,
        hourly_cost_aed: actual_power_kw * rates.standard_aed_per_kwh,
        monthly_cost_aed: daily_cost_aed * BILLING_DAYS_PER_MONTH,
    }
}
