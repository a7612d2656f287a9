//! Grid-only scenario.

use super::types::ScenarioResult;
use crate::wizard::InputSnapshot;

/// Grid cost at the tier's flat nominal consumption.
///
/// Billing uses the band's average daily kWh, not the hours actually
/// received. Without a tier every figure is zero.
pub fn grid_cost(snapshot: &InputSnapshot) -> ScenarioResult {
    let Some(tier) = snapshot.service_tier else {
        return ScenarioResult::default();
    };
    let band = tier.band();
    ScenarioResult::from_daily(band.avg_kwh_per_day * band.tariff_per_kwh, band.avg_kwh_per_day)
}
