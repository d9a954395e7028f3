pub mod api;
pub mod calc;
pub mod config;
pub mod domain;
pub mod state;
pub mod telemetry;
pub mod weather;
