//! Step-reached notifications.
//!
//! Sessions report every stage they reach to a [`StepSink`]. Delivery is
//! fire-and-forget: a failing sink is logged and otherwise ignored.

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::tables::ServiceTier;
use crate::wizard::Stage;

/// A session reached a stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEvent {
    pub session_id: String,
    /// Zero-based stage index.
    pub step: usize,
    pub step_name: &'static str,
    pub service_tier: Option<ServiceTier>,
    /// Generator rating, once the generator stage has been reached.
    pub generator_capacity_kva: Option<f64>,
    /// `true` when the results stage was reached.
    pub completed: bool,
    /// Seconds since the Unix epoch.
    pub timestamp_secs: u64,
}

impl StepEvent {
    /// Creates an event stamped with the current wall-clock time.
    pub fn new(
        session_id: &str,
        stage: Stage,
        service_tier: Option<ServiceTier>,
        generator_capacity_kva: Option<f64>,
    ) -> Self {
        let timestamp_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Self {
            session_id: session_id.to_string(),
            step: stage.index(),
            step_name: stage.title(),
            service_tier,
            generator_capacity_kva,
            completed: stage.is_terminal(),
            timestamp_secs,
        }
    }
}

/// Telemetry delivery failure.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry sink unavailable: {0}")]
    Unavailable(String),
}

/// Receiver of step events.
pub trait StepSink {
    /// Records one event. Errors are reported but never propagated by callers.
    fn record(&self, event: &StepEvent) -> Result<(), TelemetryError>;
}

/// Emits step events as structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl StepSink for TracingSink {
    fn record(&self, event: &StepEvent) -> Result<(), TelemetryError> {
        info!(
            target: "solar_payback::steps",
            session_id = %event.session_id,
            step = event.step,
            step_name = event.step_name,
            service_tier = ?event.service_tier,
            generator_capacity_kva = ?event.generator_capacity_kva,
            completed = event.completed,
            "step reached"
        );
        Ok(())
    }
}

/// Keeps events in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<StepEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<StepEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl StepSink for MemorySink {
    fn record(&self, event: &StepEvent) -> Result<(), TelemetryError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| TelemetryError::Unavailable(e.to_string()))?;
        events.push(event.clone());
        Ok(())
    }
}
