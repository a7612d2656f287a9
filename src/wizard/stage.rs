//! Wizard stages and their completion gates.

use std::fmt;

use serde::Serialize;

use super::snapshot::{DAYS_PER_WEEK, InputSnapshot};

/// Capacity range accepted by the generator stage (kVA).
pub const GENERATOR_KVA_RANGE: std::ops::RangeInclusive<f64> = 3.0..=10.0;

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Ordered data-entry stages. Linear; only a restart goes back to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    TierSelection,
    GeneratorDetails,
    UsagePattern,
    Results,
}

impl Stage {
    /// All stages in order.
    pub const ALL: [Self; 4] = [
        Self::TierSelection,
        Self::GeneratorDetails,
        Self::UsagePattern,
        Self::Results,
    ];

    /// Zero-based position of the stage.
    pub fn index(self) -> usize {
        match self {
            Self::TierSelection => 0,
            Self::GeneratorDetails => 1,
            Self::UsagePattern => 2,
            Self::Results => 3,
        }
    }

    /// Short title shown in progress indicators.
    pub fn title(self) -> &'static str {
        match self {
            Self::TierSelection => "Service tier",
            Self::GeneratorDetails => "Generator",
            Self::UsagePattern => "Supply hours",
            Self::Results => "Results",
        }
    }

    /// The stage after this one; `Results` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            Self::TierSelection => Self::GeneratorDetails,
            Self::GeneratorDetails => Self::UsagePattern,
            Self::UsagePattern | Self::Results => Self::Results,
        }
    }

    /// The stage before this one, saturating at the first stage.
    pub fn previous(self) -> Self {
        match self {
            Self::TierSelection | Self::GeneratorDetails => Self::TierSelection,
            Self::UsagePattern => Self::GeneratorDetails,
            Self::Results => Self::UsagePattern,
        }
    }

    /// Returns `true` for the terminal stage.
    pub fn is_terminal(self) -> bool {
        self == Self::Results
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Evaluates the completion gate of `stage` against `snapshot`.
pub fn can_advance(stage: Stage, snapshot: &InputSnapshot) -> bool {
    match stage {
        Stage::TierSelection => snapshot.service_tier.is_some(),
        Stage::GeneratorDetails => {
            GENERATOR_KVA_RANGE.contains(&snapshot.generator_capacity_kva)
                && snapshot.fuel_price_per_liter > 0.0
        }
        Stage::UsagePattern => {
            snapshot.grid_hours_min >= 0.0
                && snapshot.grid_hours_max <= HOURS_PER_DAY
                && snapshot.daily_generator_hours.len() == DAYS_PER_WEEK
                && snapshot.avg_grid_hours() + snapshot.avg_generator_hours() <= HOURS_PER_DAY
        }
        Stage::Results => true,
    }
}

/// Gated forward transition: the next stage, or `None` if the gate fails.
pub fn advance(stage: Stage, snapshot: &InputSnapshot) -> Option<Stage> {
    can_advance(stage, snapshot).then(|| stage.next())
}

/// Initial stage and snapshot of a fresh session.
pub fn restart() -> (Stage, InputSnapshot) {
    (Stage::default(), InputSnapshot::default())
}
