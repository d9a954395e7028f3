//! Cooling-load estimation for a single room.

use serde::{Deserialize, Serialize};

use crate::domain::RoomParameters;

/// Air density at standard conditions, kg/m³.
pub const AIR_DENSITY_KG_M3: f64 = 1.2;
/// Specific heat of air, kJ/(kg·K).
pub const SPECIFIC_HEAT_KJ_KG_K: f64 = 1.005;
/// Sensible heat gain per occupant, W.
pub const SENSIBLE_HEAT_PER_PERSON_W: f64 = 90.0;
/// Latent heat gain per occupant, W.
pub const LATENT_HEAT_PER_PERSON_W: f64 = 30.0;
/// Default equipment heat gain, W.
pub const EQUIPMENT_LOAD_W: f64 = 200.0;

/// Additive heat-gain breakdown for a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoolingLoad {
    pub room_sensible_heat_w: f64,
    pub occupant_sensible_heat_w: f64,
    pub occupant_latent_heat_w: f64,
    pub equipment_heat_w: f64,
    pub total_load_w: f64,
    pub total_load_kw: f64,
}

/// Estimate the cooling load for a room under the given outdoor conditions.
///
/// The temperature-difference term is clamped at zero: when the outdoor
/// temperature is at or below the setpoint there is no envelope gain, only
/// occupant and equipment gains.
pub fn calculate_cooling_load(params: &RoomParameters) -> CoolingLoad {
    let volume_m3 = params.volume_m3();
    let temp_diff = (params.outdoor_temp_c - params.indoor_temp_c).max(0.0);

    // Q = ρ × c_p × V × ΔT, converted from kJ/h to W
    let room_sensible_heat_w =
        AIR_DENSITY_KG_M3 * SPECIFIC_HEAT_KJ_KG_K * volume_m3 * temp_diff * 1000.0 / 3600.0;

    let occupant_sensible_heat_w = f64::from(params.occupants) * SENSIBLE_HEAT_PER_PERSON_W;
    let occupant_latent_heat_w = f64::from(params.occupants) * LATENT_HEAT_PER_PERSON_W;
    let equipment_heat_w = EQUIPMENT_LOAD_W;

    let total_load_w =
        room_sensible_heat_w + occupant_sensible_heat_w + occupant_latent_heat_w + equipment_heat_w;

    CoolingLoad {
        room_sensible_heat_w,
        occupant_sensible_heat_w,
        occupant_latent_heat_w,
        equipment_heat_w,
        total_load_w,
        total_load_kw: total_load_w / 1000.0,
    }
}
