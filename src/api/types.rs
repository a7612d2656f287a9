//! API response types and the error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::cost::ScenarioResults;
use crate::tables::{FUEL_RATES, FuelRate, SOLAR_PACKAGES, SolarPackage, TIER_BANDS, TierBand};
use crate::wizard::{InputSnapshot, Session, Stage};

/// Lookup tables backing the cost model.
#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tiers: &'static [TierBand],
    pub fuel_rates: &'static [FuelRate],
    pub solar_packages: &'static [SolarPackage],
}

impl TablesResponse {
    pub fn current() -> Self {
        Self {
            tiers: &TIER_BANDS,
            fuel_rates: &FUEL_RATES,
            solar_packages: &SOLAR_PACKAGES,
        }
    }
}

/// Public view of one wizard session.
///
/// `results` is `null` unless the session is at the results stage.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: String,
    pub stage: Stage,
    /// Zero-based stage index.
    pub step: usize,
    pub step_name: &'static str,
    /// Whether the current stage's gate passes.
    pub can_advance: bool,
    pub snapshot: InputSnapshot,
    pub results: Option<ScenarioResults>,
}

impl From<&Session> for SessionView {
    fn from(s: &Session) -> Self {
        let stage = s.stage();
        Self {
            id: s.id().to_string(),
            stage,
            step: stage.index(),
            step_name: stage.title(),
            can_advance: s.can_advance(),
            snapshot: s.snapshot().clone(),
            results: s.results().copied(),
        }
    }
}

/// Response to `POST /sessions/{id}/next`.
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// `false` when the gate rejected the move or the session was already at
    /// the last stage.
    pub advanced: bool,
    #[serde(flatten)]
    pub session: SessionView,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}

/// Handler failure, mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session `{0}` not found")]
    SessionNotFound(String),
    #[error("results are not available at stage `{0}`")]
    NotAtResults(Stage),
    #[error("session store unavailable")]
    StorePoisoned,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAtResults(_) => StatusCode::CONFLICT,
            Self::StorePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
