//! Synthetic 24-hour consumption curve for chart display.
//!
//! The multipliers are illustrative time-of-day bands, not real load
//! dynamics; the curve feeds no other computation.

use serde::{Deserialize, Serialize};

use crate::calc::optimize::OptimizationStrategy;

/// One chart point: hour label plus baseline and optimized energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: String,
    pub baseline_kwh: f64,
    pub optimized_kwh: f64,
}

/// Generate the 24 hour-labeled (baseline, optimized) pairs for one
/// strategy. Values are rounded to two decimals for display.
pub fn generate_hourly_profile(
    baseline_hourly_kwh: f64,
    optimized_hourly_kwh: f64,
    strategy: OptimizationStrategy,
) -> Vec<HourlyPoint> {
    (0..24)
        .map(|hour| {
            let (baseline_multiplier, optimized_multiplier) = multipliers(hour, strategy);
            HourlyPoint {
                hour: format!("{hour:02}:00"),
                baseline_kwh: round2(baseline_hourly_kwh * baseline_multiplier),
                optimized_kwh: round2(optimized_hourly_kwh * optimized_multiplier),
            }
        })
        .collect()
}

fn multipliers(hour: u32, strategy: OptimizationStrategy) -> (f64, f64) {
    if (12..18).contains(&hour) {
        // Peak hours: higher load.
        let baseline = 1.4;
        let optimized = match strategy {
            // Pre-cooling shifts load ahead of the peak.
            OptimizationStrategy::PreCooling => {
                if hour < 14 {
                    1.2
                } else {
                    1.1
                }
            }
            OptimizationStrategy::OffPeakShift => 1.2,
            _ => baseline * 0.85,
        };
        (baseline, optimized)
    } else if (18..22).contains(&hour) {
        // Evening: moderate load.
        let baseline = 1.1;
        let optimized = if strategy == OptimizationStrategy::OffPeakShift {
            1.3
        } else {
            baseline * 0.85
        };
        (baseline, optimized)
    } else {
        // Night and morning: low load.
        let baseline = if (6..12).contains(&hour) { 0.8 } else { 0.3 };
        (baseline, baseline * 0.85)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
