//! Cooling-load, energy-cost, optimization and chart-profile calculations.
//!
//! Everything here is synchronous, referentially transparent and
//! side-effect free; results are recomputed on every input change.

pub mod energy;
pub mod load;
pub mod optimize;
pub mod profile;

pub use energy::{calculate_energy_consumption, tariff_rates, EnergyConsumption, TariffRates};
pub use load::{calculate_cooling_load, CoolingLoad};
pub use optimize::{simulate_optimizations, OptimizationResult, OptimizationStrategy};
pub use profile::{generate_hourly_profile, HourlyPoint};
