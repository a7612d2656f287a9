//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use solar_payback::config::ProfileConfig;
use solar_payback::tables::ServiceTier;
use solar_payback::telemetry::MemorySink;
use solar_payback::wizard::{InputSnapshot, Session, SnapshotUpdate};

/// Tier B, 5 kVA, 1200/L, 100 000/yr maintenance, 4 h every day and a
/// 20 kWh/day consumption override.
pub fn household_snapshot() -> InputSnapshot {
    InputSnapshot {
        service_tier: Some(ServiceTier::B),
        grid_hours_min: 16.0,
        grid_hours_max: 20.0,
        avg_daily_consumption_kwh: 20.0,
        ..InputSnapshot::default()
    }
}

/// Default snapshot with only the tier selected and its band applied.
pub fn snapshot_for(tier: ServiceTier) -> InputSnapshot {
    solar_payback::wizard::apply_update(
        InputSnapshot::default(),
        &SnapshotUpdate::tier(Some(tier)),
    )
}

/// Fresh session recording step events in memory.
pub fn recorded_session() -> (Session<MemorySink>, MemorySink) {
    let sink = MemorySink::new();
    (Session::with_id("fixture", sink.clone()), sink)
}

/// Feeds a profile through a session stage by stage, advancing after each
/// update. Stops at the first blocked gate.
pub fn drive(profile: &ProfileConfig, session: &mut Session<MemorySink>) {
    for update in profile.stage_updates() {
        session.update(&update);
        if !session.advance().moved() {
            return;
        }
    }
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
