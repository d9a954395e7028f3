//! Core value objects shared by the calculation modules.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Immutable room description used as input to every calculation.
///
/// All fields are re-supplied per calculation; there is no persisted
/// identity. Outdoor conditions usually come from the live weather
/// observation but callers may pin them explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomParameters {
    pub area_m2: f64,
    pub height_m: f64,
    pub occupants: u32,
    pub indoor_temp_c: f64,
    pub outdoor_temp_c: f64,
    pub outdoor_humidity_percent: f64,
}

impl RoomParameters {
    pub fn volume_m3(&self) -> f64 {
        self.area_m2 * self.height_m
    }

    /// Same room with the thermostat setpoint shifted by `delta_c`.
    pub fn with_setpoint_offset(&self, delta_c: f64) -> Self {
        Self {
            indoor_temp_c: self.indoor_temp_c + delta_c,
            ..*self
        }
    }
}

/// DEWA customer category. Closed enumeration; each category carries its
/// own peak/off-peak/standard rate tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TariffCategory {
    #[default]
    Residential,
    Commercial,
}
