//! Grid, generator and solar running-cost comparison with a staged input wizard.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Grid, generator and solar cost scenarios.
pub mod cost;
pub mod io;
/// Tariff bands, fuel burn rates and the solar package catalog.
pub mod tables;
pub mod telemetry;
pub mod wizard;
