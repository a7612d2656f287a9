//! A single user's pass through the wizard.

use std::mem;

use serde::Serialize;
use tracing::{debug, warn};

use super::snapshot::InputSnapshot;
use super::stage::{self, Stage};
use super::update::{SnapshotUpdate, apply_update};
use crate::cost::{ScenarioResults, compute_results};
use crate::telemetry::{StepEvent, StepSink, TracingSink};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// The stage changed.
    Moved { from: Stage, to: Stage },
    /// The current stage's gate failed; nothing changed.
    Blocked { at: Stage },
    /// Already at the end of the sequence in that direction.
    Unchanged { at: Stage },
}

impl Transition {
    /// Returns `true` if the stage changed.
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Stage, snapshot and results, replaced as one value on restart.
#[derive(Debug, Clone, PartialEq, Default)]
struct WizardState {
    stage: Stage,
    snapshot: InputSnapshot,
    /// Present only while at [`Stage::Results`].
    results: Option<ScenarioResults>,
}

/// Wizard session owning its snapshot exclusively.
///
/// Generic over the step sink for static dispatch; defaults to [`TracingSink`].
pub struct Session<S: StepSink = TracingSink> {
    id: String,
    state: WizardState,
    sink: S,
}

impl Session<TracingSink> {
    /// Starts a session with a random id that logs step events via `tracing`.
    pub fn start() -> Self {
        Self::new(TracingSink)
    }
}

impl<S: StepSink> Session<S> {
    /// Starts a session with a random id.
    pub fn new(sink: S) -> Self {
        Self::with_id(format!("{:016x}", rand::random::<u64>()), sink)
    }

    /// Starts a session with a caller-chosen id.
    pub fn with_id(id: impl Into<String>, sink: S) -> Self {
        let session = Self {
            id: id.into(),
            state: WizardState::default(),
            sink,
        };
        debug!(session_id = %session.id, "session started");
        session.notify();
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.state.snapshot
    }

    /// Scenario results, available only at the results stage.
    pub fn results(&self) -> Option<&ScenarioResults> {
        self.state.results.as_ref()
    }

    /// Whether the current stage's gate passes.
    pub fn can_advance(&self) -> bool {
        stage::can_advance(self.state.stage, &self.state.snapshot)
    }

    /// Applies a partial update. At the results stage the results are
    /// recomputed from the new snapshot.
    pub fn update(&mut self, update: &SnapshotUpdate) {
        let snapshot = mem::take(&mut self.state.snapshot);
        self.state.snapshot = apply_update(snapshot, update);
        if self.state.stage.is_terminal() {
            self.state.results = Some(compute_results(&self.state.snapshot));
        }
    }

    /// Moves forward if the current gate passes. Entering the results stage
    /// runs the cost model.
    pub fn advance(&mut self) -> Transition {
        let from = self.state.stage;
        if from.is_terminal() {
            return Transition::Unchanged { at: from };
        }
        let Some(to) = stage::advance(from, &self.state.snapshot) else {
            debug!(session_id = %self.id, stage = %from, "advance blocked by gate");
            return Transition::Blocked { at: from };
        };

        self.state.stage = to;
        if to.is_terminal() {
            self.state.results = Some(compute_results(&self.state.snapshot));
        }
        debug!(session_id = %self.id, %from, %to, "advanced");
        self.notify();
        Transition::Moved { from, to }
    }

    /// Moves back one stage, dropping any computed results.
    pub fn retreat(&mut self) -> Transition {
        let from = self.state.stage;
        let to = from.previous();
        if to == from {
            return Transition::Unchanged { at: from };
        }

        self.state.stage = to;
        self.state.results = None;
        debug!(session_id = %self.id, %from, %to, "retreated");
        self.notify();
        Transition::Moved { from, to }
    }

    /// Returns to the first stage with the default snapshot.
    pub fn restart(&mut self) {
        let (stage, snapshot) = stage::restart();
        self.state = WizardState {
            stage,
            snapshot,
            results: None,
        };
        debug!(session_id = %self.id, "restarted");
        self.notify();
    }

    fn notify(&self) {
        let stage = self.state.stage;
        let kva = (stage.index() >= Stage::GeneratorDetails.index())
            .then_some(self.state.snapshot.generator_capacity_kva);
        let event = StepEvent::new(&self.id, stage, self.state.snapshot.service_tier, kva);
        if let Err(err) = self.sink.record(&event) {
            warn!(session_id = %self.id, %err, "dropping step event");
        }
    }
}
