//! Static lookup tables: tier bands, generator fuel burn and the solar catalog.
//!
//! Everything here is read-only process-wide data.

/// Generator fuel consumption table.
pub mod fuel;
/// Solar package catalog and selection rule.
pub mod solar;
pub mod tier;

pub use fuel::{FUEL_RATES, FuelRate, fuel_rate_lph};
pub use solar::{PackageSize, SOLAR_PACKAGES, SolarPackage, select_package};
pub use tier::{ServiceTier, TIER_BANDS, TierBand};
