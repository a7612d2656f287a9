//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use super::AppState;
use super::types::{AdvanceResponse, ApiError, SessionView, TablesResponse};
use crate::cost::{ScenarioResults, compute_results};
use crate::wizard::{InputSnapshot, Session, SnapshotUpdate};

/// `GET /tables` → 200 + tier bands, fuel rates and solar catalog
pub async fn get_tables() -> Json<TablesResponse> {
    Json(TablesResponse::current())
}

/// Runs the cost model on a complete snapshot without a session.
///
/// `POST /compute` → 200 + `ScenarioResults`
pub async fn compute(Json(snapshot): Json<InputSnapshot>) -> Json<ScenarioResults> {
    Json(compute_results(&snapshot))
}

/// `POST /sessions` → 201 + `SessionView`
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let session = Session::start();
    let view = SessionView::from(&session);
    let count = state.insert(session)?;
    info!(session_id = %view.id, sessions = count, "session created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /sessions/{id}` → 200 + `SessionView`, 404 if unknown
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state.with_session(&id, |s| Json(SessionView::from(&*s)))
}

/// `DELETE /sessions/{id}` → 204, 404 if unknown
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let count = state.remove(&id)?;
    info!(session_id = %id, sessions = count, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /sessions/{id}/snapshot` with a `SnapshotUpdate` body → 200 + `SessionView`
pub async fn patch_snapshot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<SnapshotUpdate>,
) -> Result<Json<SessionView>, ApiError> {
    state.with_session(&id, |s| {
        s.update(&update);
        Json(SessionView::from(&*s))
    })
}

/// Gated advance. A rejected move still answers 200 with `advanced: false`.
///
/// `POST /sessions/{id}/next` → 200 + `AdvanceResponse`
pub async fn next_stage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AdvanceResponse>, ApiError> {
    state.with_session(&id, |s| {
        let advanced = s.advance().moved();
        Json(AdvanceResponse {
            advanced,
            session: SessionView::from(&*s),
        })
    })
}

/// `POST /sessions/{id}/previous` → 200 + `SessionView`
pub async fn previous_stage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state.with_session(&id, |s| {
        s.retreat();
        Json(SessionView::from(&*s))
    })
}

/// `POST /sessions/{id}/restart` → 200 + `SessionView`
pub async fn restart_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    state.with_session(&id, |s| {
        s.restart();
        Json(SessionView::from(&*s))
    })
}

/// `GET /sessions/{id}/results` → 200 + `ScenarioResults`, 409 before the
/// results stage
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ScenarioResults>, ApiError> {
    state.with_session(&id, |s| {
        s.results()
            .copied()
            .map(Json)
            .ok_or(ApiError::NotAtResults(s.stage()))
    })?
}
