//! Scenario result records and the comparison report.

use std::fmt;

use serde::Serialize;

use crate::tables::{PackageSize, ServiceTier};

/// Days in a billing month.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days in a year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Cost and energy figures for one supply scenario.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScenarioResult {
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
    /// Energy delivered per day (kWh).
    pub daily_energy_kwh: f64,
}

impl ScenarioResult {
    /// Builds a result from a daily cost using the 30-day month and 365-day year.
    pub fn from_daily(daily_cost: f64, daily_energy_kwh: f64) -> Self {
        Self {
            daily_cost,
            monthly_cost: daily_cost * DAYS_PER_MONTH,
            yearly_cost: daily_cost * DAYS_PER_YEAR,
            daily_energy_kwh,
        }
    }
}

/// Solar replacement scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarResult {
    /// Running cost of the installed system.
    #[serde(flatten)]
    pub operating: ScenarioResult,
    /// Package chosen for the generator size.
    pub package: PackageSize,
    /// Array capacity of the package (kW).
    pub capacity_kw: f64,
    /// Upfront system price.
    pub system_cost: f64,
    /// Generator spend avoided per year.
    pub yearly_savings: f64,
    /// `system_cost / yearly_savings`; infinite when nothing is saved.
    pub payback_years: f64,
    /// Savings over the system lifespan net of the upfront price.
    pub lifetime_savings: f64,
}

/// Derived supply-hour split and fuel use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyProfile {
    pub service_tier: Option<ServiceTier>,
    /// Midpoint of the grid supply range (hours/day).
    pub grid_hours_per_day: f64,
    /// Mean generator run time (hours/day).
    pub generator_hours_per_day: f64,
    /// Full-load burn rate for the generator size (L/h).
    pub fuel_liters_per_hour: f64,
    /// Fuel burned per day (L).
    pub fuel_liters_per_day: f64,
}

/// The three scenarios side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResults {
    pub grid: ScenarioResult,
    pub generator: ScenarioResult,
    pub solar: SolarResult,
    pub supply: SupplyProfile,
}

impl fmt::Display for ScenarioResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = self
            .supply
            .service_tier
            .map_or_else(|| "none".to_string(), |t| t.to_string());
        writeln!(f, "--- Cost Comparison ---")?;
        writeln!(f, "Service tier:          {tier}")?;
        writeln!(
            f,
            "Supply split:          grid {:.1} h/day, generator {:.1} h/day",
            self.supply.grid_hours_per_day, self.supply.generator_hours_per_day
        )?;
        writeln!(
            f,
            "Fuel use:              {:.1} L/h full load, {:.1} L/day",
            self.supply.fuel_liters_per_hour, self.supply.fuel_liters_per_day
        )?;
        writeln!(
            f,
            "Grid daily:            {:.2} ({:.1} kWh/day)",
            self.grid.daily_cost, self.grid.daily_energy_kwh
        )?;
        writeln!(f, "Grid monthly:          {:.2}", self.grid.monthly_cost)?;
        writeln!(f, "Grid yearly:           {:.2}", self.grid.yearly_cost)?;
        writeln!(
            f,
            "Generator daily:       {:.2} ({:.1} kWh/day)",
            self.generator.daily_cost, self.generator.daily_energy_kwh
        )?;
        writeln!(f, "Generator monthly:     {:.2}", self.generator.monthly_cost)?;
        writeln!(f, "Generator yearly:      {:.2}", self.generator.yearly_cost)?;
        writeln!(
            f,
            "Solar package:         {} ({:.0} kW)",
            self.solar.package, self.solar.capacity_kw
        )?;
        writeln!(f, "Solar system cost:     {:.2}", self.solar.system_cost)?;
        writeln!(
            f,
            "Solar operating:       {:.2}/year",
            self.solar.operating.yearly_cost
        )?;
        writeln!(f, "Yearly savings:        {:.2}", self.solar.yearly_savings)?;
        if self.solar.payback_years.is_finite() {
            writeln!(f, "Payback period:        {:.1} years", self.solar.payback_years)?;
        } else {
            writeln!(f, "Payback period:        never")?;
        }
        write!(f, "Lifetime savings:      {:.2}", self.solar.lifetime_savings)
    }
}
