//! Fixed solar system catalog.

use std::fmt;

use serde::Serialize;

/// Solar package size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
        })
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPackage {
    pub size: PackageSize,
    /// Array capacity (kW).
    pub capacity_kw: f64,
    /// Installed price, batteries included.
    pub price: f64,
    /// Smallest generator rating this package replaces (kVA).
    pub min_generator_kva: f64,
    /// Largest generator rating this package replaces (kVA).
    pub max_generator_kva: f64,
}

/// Catalog, ordered small to large.
pub static SOLAR_PACKAGES: [SolarPackage; 3] = [
    SolarPackage {
        size: PackageSize::Small,
        capacity_kw: 3.0,
        price: 2_000_000.0,
        min_generator_kva: 3.0,
        max_generator_kva: 4.0,
    },
    SolarPackage {
        size: PackageSize::Medium,
        capacity_kw: 5.0,
        price: 2_750_000.0,
        min_generator_kva: 5.0,
        max_generator_kva: 7.0,
    },
    SolarPackage {
        size: PackageSize::Large,
        capacity_kw: 10.0,
        price: 5_700_000.0,
        min_generator_kva: 8.0,
        max_generator_kva: 10.0,
    },
];

/// Yearly maintenance as a share of the package price.
pub const MAINTENANCE_SHARE: f64 = 0.01;
/// Share of the package price spent on batteries per replacement cycle.
pub const BATTERY_SHARE: f64 = 0.3;
/// Battery replacement cycle (years).
pub const BATTERY_LIFE_YEARS: f64 = 7.0;
/// Expected system lifespan (years).
pub const SYSTEM_LIFESPAN_YEARS: f64 = 25.0;

impl SolarPackage {
    /// Yearly operating cost: maintenance plus the battery replacement fund.
    pub fn yearly_operating_cost(&self) -> f64 {
        self.price * MAINTENANCE_SHARE + self.price * BATTERY_SHARE / BATTERY_LIFE_YEARS
    }
}

/// Picks the package replacing a generator of the given capacity.
///
/// `<= 4` kVA is SMALL, `>= 8` kVA is LARGE, anything else is MEDIUM.
pub fn select_package(generator_kva: f64) -> &'static SolarPackage {
    if generator_kva <= 4.0 {
        &SOLAR_PACKAGES[0]
    } else if generator_kva >= 8.0 {
        &SOLAR_PACKAGES[2]
    } else {
        &SOLAR_PACKAGES[1]
    }
}
