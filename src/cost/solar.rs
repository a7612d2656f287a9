//! Solar replacement scenario and payback.

use super::types::{DAYS_PER_YEAR, ScenarioResult, SolarResult};
use crate::tables::select_package;
use crate::tables::solar::SYSTEM_LIFESPAN_YEARS;
use crate::wizard::InputSnapshot;

/// Sizes the solar system from the generator rating and computes payback
/// against the generator's yearly cost.
///
/// The system is assumed to displace the generator entirely; the grid bill is
/// not counted as a saving and the system's own running cost does not reduce
/// the savings figure.
pub fn solar_cost(snapshot: &InputSnapshot, generator: &ScenarioResult) -> SolarResult {
    let package = select_package(snapshot.generator_capacity_kva);
    let yearly_operating = package.yearly_operating_cost();
    let yearly_savings = generator.yearly_cost;

    SolarResult {
        operating: ScenarioResult {
            daily_cost: yearly_operating / DAYS_PER_YEAR,
            monthly_cost: yearly_operating / 12.0,
            yearly_cost: yearly_operating,
            daily_energy_kwh: snapshot.avg_daily_consumption_kwh,
        },
        package: package.size,
        capacity_kw: package.capacity_kw,
        system_cost: package.price,
        yearly_savings,
        payback_years: package.price / yearly_savings,
        lifetime_savings: yearly_savings * SYSTEM_LIFESPAN_YEARS - package.price,
    }
}
