//! Full-load fuel consumption by generator size.

use serde::Serialize;

/// Full-load fuel burn for one generator rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelRate {
    /// Rated apparent power (kVA).
    pub capacity_kva: u8,
    /// Fuel burned at full load (L/h).
    pub liters_per_hour: f64,
}

/// Fuel table covering 3–10 kVA in 1 kVA steps.
pub static FUEL_RATES: [FuelRate; 8] = [
    FuelRate { capacity_kva: 3, liters_per_hour: 1.2 },
    FuelRate { capacity_kva: 4, liters_per_hour: 1.6 },
    FuelRate { capacity_kva: 5, liters_per_hour: 2.0 },
    FuelRate { capacity_kva: 6, liters_per_hour: 2.4 },
    FuelRate { capacity_kva: 7, liters_per_hour: 2.8 },
    FuelRate { capacity_kva: 8, liters_per_hour: 3.2 },
    FuelRate { capacity_kva: 9, liters_per_hour: 3.6 },
    FuelRate { capacity_kva: 10, liters_per_hour: 4.0 },
];

/// Looks up the full-load burn rate for a generator capacity.
///
/// The capacity is keyed to the nearest whole kVA. Capacities that do not land
/// on a table row (including non-finite input) burn nothing rather than erroring.
///
/// ```
/// use solar_payback::tables::fuel_rate_lph;
///
/// assert_eq!(fuel_rate_lph(5.0), 2.0);
/// assert_eq!(fuel_rate_lph(5.4), 2.0);
/// assert_eq!(fuel_rate_lph(12.0), 0.0);
/// ```
pub fn fuel_rate_lph(capacity_kva: f64) -> f64 {
    if !capacity_kva.is_finite() {
        return 0.0;
    }
    let key = capacity_kva.round();
    FUEL_RATES
        .iter()
        .find(|row| f64::from(row.capacity_kva) == key)
        .map_or(0.0, |row| row.liters_per_hour)
}
