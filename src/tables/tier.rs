//! Grid service tiers and their tariff band defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid service tier (supply band), from best (A) to worst (E) supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceTier {
    A,
    B,
    C,
    D,
    E,
}

impl ServiceTier {
    /// All tiers in table order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Returns the band defaults for this tier.
    pub fn band(self) -> &'static TierBand {
        match self {
            Self::A => &TIER_BANDS[0],
            Self::B => &TIER_BANDS[1],
            Self::C => &TIER_BANDS[2],
            Self::D => &TIER_BANDS[3],
            Self::E => &TIER_BANDS[4],
        }
    }

    /// Single-letter label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nominal supply and billing figures for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierBand {
    /// Tier this band describes.
    pub tier: ServiceTier,
    /// Lower bound of typical grid supply (hours/day).
    pub min_hours: f64,
    /// Upper bound of typical grid supply (hours/day).
    pub max_hours: f64,
    /// Energy tariff (currency/kWh).
    pub tariff_per_kwh: f64,
    /// Nominal average consumption billed per day (kWh).
    pub avg_kwh_per_day: f64,
}

/// Tier table, indexed in [`ServiceTier::ALL`] order.
///
/// Band E has no published tariff of its own; it bills at the band D rate.
pub static TIER_BANDS: [TierBand; 5] = [
    TierBand {
        tier: ServiceTier::A,
        min_hours: 20.0,
        max_hours: 24.0,
        tariff_per_kwh: 225.0,
        avg_kwh_per_day: 32.0,
    },
    TierBand {
        tier: ServiceTier::B,
        min_hours: 16.0,
        max_hours: 20.0,
        tariff_per_kwh: 210.0,
        avg_kwh_per_day: 24.0,
    },
    TierBand {
        tier: ServiceTier::C,
        min_hours: 12.0,
        max_hours: 16.0,
        tariff_per_kwh: 200.0,
        avg_kwh_per_day: 16.0,
    },
    TierBand {
        tier: ServiceTier::D,
        min_hours: 8.0,
        max_hours: 12.0,
        tariff_per_kwh: 188.0,
        avg_kwh_per_day: 12.0,
    },
    TierBand {
        tier: ServiceTier::E,
        min_hours: 4.0,
        max_hours: 8.0,
        tariff_per_kwh: 188.0,
        avg_kwh_per_day: 8.0,
    },
];
