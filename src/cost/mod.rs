//! Cost model: grid, generator and solar scenarios from one input snapshot.
//!
//! Every function here is pure. Edge cases (no tier, idle generator, unknown
//! generator size, zero savings) produce zero or non-finite figures instead of
//! errors.

mod generator;
mod grid;
mod solar;
pub mod types;

use tracing::debug;

pub use generator::generator_cost;
pub use grid::grid_cost;
pub use solar::solar_cost;
pub use types::{ScenarioResult, ScenarioResults, SolarResult, SupplyProfile};

use crate::tables::fuel_rate_lph;
use crate::wizard::InputSnapshot;

/// Computes all three scenarios for `snapshot`.
///
/// # Examples
///
/// ```
/// use solar_payback::cost::compute_results;
/// use solar_payback::tables::ServiceTier;
/// use solar_payback::wizard::InputSnapshot;
///
/// let snapshot = InputSnapshot {
///     service_tier: Some(ServiceTier::B),
///     ..InputSnapshot::default()
/// };
/// let results = compute_results(&snapshot);
/// assert_eq!(results.grid.daily_cost, 24.0 * 210.0);
/// assert_eq!(results.supply.fuel_liters_per_hour, 2.0);
/// ```
pub fn compute_results(snapshot: &InputSnapshot) -> ScenarioResults {
    let grid = grid_cost(snapshot);
    let generator = generator_cost(snapshot);
    let solar = solar_cost(snapshot, &generator);

    let generator_hours = snapshot.avg_generator_hours();
    let burn_lph = fuel_rate_lph(snapshot.generator_capacity_kva);
    let supply = SupplyProfile {
        service_tier: snapshot.service_tier,
        grid_hours_per_day: snapshot.avg_grid_hours(),
        generator_hours_per_day: generator_hours,
        fuel_liters_per_hour: burn_lph,
        fuel_liters_per_day: generator_hours * burn_lph,
    };

    debug!(
        grid_yearly = grid.yearly_cost,
        generator_yearly = generator.yearly_cost,
        payback_years = solar.payback_years,
        "computed scenarios"
    );

    ScenarioResults {
        grid,
        generator,
        solar,
        supply,
    }
}
