//! Partial snapshot updates and the reducer that applies them.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::snapshot::InputSnapshot;
use crate::tables::ServiceTier;

/// A set of field changes. `None` leaves the field untouched.
///
/// `service_tier` is doubly optional so an update can clear the tier:
/// an absent key keeps it, an explicit `null` unsets it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotUpdate {
    #[serde(deserialize_with = "present")]
    pub service_tier: Option<Option<ServiceTier>>,
    pub generator_capacity_kva: Option<f64>,
    pub grid_hours_min: Option<f64>,
    pub grid_hours_max: Option<f64>,
    pub fuel_price_per_liter: Option<f64>,
    pub yearly_maintenance_cost: Option<f64>,
    pub avg_daily_consumption_kwh: Option<f64>,
    pub daily_generator_hours: Option<Vec<f64>>,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl SnapshotUpdate {
    /// Update selecting (or clearing) the tier.
    pub fn tier(tier: Option<ServiceTier>) -> Self {
        Self {
            service_tier: Some(tier),
            ..Self::default()
        }
    }
}

/// Merges `update` into `snapshot` and returns the new snapshot.
///
/// When the update selects a tier different from the current one, the grid
/// hour range and average consumption are reset to that tier's band,
/// overwriting both earlier edits and any values in the same update.
pub fn apply_update(snapshot: InputSnapshot, update: &SnapshotUpdate) -> InputSnapshot {
    let previous_tier = snapshot.service_tier;
    let mut next = snapshot;

    if let Some(tier) = update.service_tier {
        next.service_tier = tier;
    }
    if let Some(v) = update.generator_capacity_kva {
        next.generator_capacity_kva = v;
    }
    if let Some(v) = update.grid_hours_min {
        next.grid_hours_min = v;
    }
    if let Some(v) = update.grid_hours_max {
        next.grid_hours_max = v;
    }
    if let Some(v) = update.fuel_price_per_liter {
        next.fuel_price_per_liter = v;
    }
    if let Some(v) = update.yearly_maintenance_cost {
        next.yearly_maintenance_cost = v;
    }
    if let Some(v) = update.avg_daily_consumption_kwh {
        next.avg_daily_consumption_kwh = v;
    }
    if let Some(hours) = &update.daily_generator_hours {
        next.daily_generator_hours.clone_from(hours);
    }

    if let Some(tier) = next.service_tier.filter(|t| Some(*t) != previous_tier) {
        let band = tier.band();
        next.grid_hours_min = band.min_hours;
        next.grid_hours_max = band.max_hours;
        next.avg_daily_consumption_kwh = band.avg_kwh_per_day;
        debug!(%tier, "tier changed, grid defaults reset");
    }

    next
}
