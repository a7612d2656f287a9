//! The input snapshot collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::tables::ServiceTier;

/// Days in the generator usage pattern.
pub const DAYS_PER_WEEK: usize = 7;

/// Everything the user has entered so far.
///
/// Values are not sanitised on the way in: the stage gates decide what is
/// acceptable and anything else flows into the cost arithmetic as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSnapshot {
    /// Selected grid tier, if any.
    pub service_tier: Option<ServiceTier>,
    /// Backup generator rating (kVA, expected 3–10).
    pub generator_capacity_kva: f64,
    /// Lower bound of grid supply (hours/day).
    pub grid_hours_min: f64,
    /// Upper bound of grid supply (hours/day).
    pub grid_hours_max: f64,
    /// Fuel price per liter.
    pub fuel_price_per_liter: f64,
    /// Yearly generator maintenance spend.
    pub yearly_maintenance_cost: f64,
    /// Average household consumption (kWh/day). Reset by tier changes.
    pub avg_daily_consumption_kwh: f64,
    /// Generator run hours for each day of the week.
    pub daily_generator_hours: Vec<f64>,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            service_tier: None,
            generator_capacity_kva: 5.0,
            grid_hours_min: 6.0,
            grid_hours_max: 10.0,
            fuel_price_per_liter: 1200.0,
            yearly_maintenance_cost: 100_000.0,
            avg_daily_consumption_kwh: 20.0,
            daily_generator_hours: vec![4.0; DAYS_PER_WEEK],
        }
    }
}

impl InputSnapshot {
    /// Midpoint of the grid supply range (hours/day).
    pub fn avg_grid_hours(&self) -> f64 {
        (self.grid_hours_min + self.grid_hours_max) / 2.0
    }

    /// Mean generator run time over the entered days (hours/day).
    ///
    /// An empty pattern averages to zero.
    pub fn avg_generator_hours(&self) -> f64 {
        if self.daily_generator_hours.is_empty() {
            return 0.0;
        }
        self.daily_generator_hours.iter().sum::<f64>() / self.daily_generator_hours.len() as f64
    }
}
