//! Generator-backup scenario.

use super::types::{DAYS_PER_YEAR, ScenarioResult};
use crate::tables::fuel_rate_lph;
use crate::wizard::InputSnapshot;
use crate::wizard::stage::HOURS_PER_DAY;

/// Generator running cost: fuel at full-load burn plus a daily maintenance share.
pub fn generator_cost(snapshot: &InputSnapshot) -> ScenarioResult {
    let hours = snapshot.avg_generator_hours();
    let burn_lph = fuel_rate_lph(snapshot.generator_capacity_kva);

    let energy_kwh = snapshot.avg_daily_consumption_kwh * hours / HOURS_PER_DAY;
    let fuel = hours * burn_lph * snapshot.fuel_price_per_liter;
    let maintenance = snapshot.yearly_maintenance_cost / DAYS_PER_YEAR;

    ScenarioResult::from_daily(fuel + maintenance, energy_kwh)
}
