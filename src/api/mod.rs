//! REST API exposing wizard sessions and the cost model.
//!
//! Sessions live in a process-wide map behind a mutex. Each handler locks,
//! performs one synchronous session operation and releases.
//!
//! - `GET /tables`: tier bands, fuel rates, solar catalog
//! - `POST /compute`: cost model on a full snapshot
//! - `POST /sessions`: new session
//! - `GET /sessions/{id}`: session view
//! - `DELETE /sessions/{id}`: drop a finished or abandoned session
//! - `PATCH /sessions/{id}/snapshot`: partial update
//! - `POST /sessions/{id}/next`, `/previous`, `/restart`: navigation
//! - `GET /sessions/{id}/results`: results, 409 before the last stage

mod handlers;
pub mod types;

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, patch, post};
use tracing::info;

use crate::wizard::Session;
use types::ApiError;

/// Session store shared across all request handlers.
#[derive(Default)]
pub struct AppState {
    sessions: Mutex<HashMap<String, Session>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session and returns the number of live sessions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::StorePoisoned` if a previous handler panicked while
    /// holding the lock.
    pub fn insert(&self, session: Session) -> Result<usize, ApiError> {
        let mut sessions = self.sessions.lock().map_err(|_| ApiError::StorePoisoned)?;
        sessions.insert(session.id().to_string(), session);
        Ok(sessions.len())
    }

    /// Drops a session and returns the number of live sessions left.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` for an unknown id.
    pub fn remove(&self, id: &str) -> Result<usize, ApiError> {
        let mut sessions = self.sessions.lock().map_err(|_| ApiError::StorePoisoned)?;
        sessions
            .remove(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
        Ok(sessions.len())
    }

    /// Number of live sessions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::StorePoisoned` if the lock is poisoned.
    pub fn session_count(&self) -> Result<usize, ApiError> {
        self.sessions
            .lock()
            .map(|sessions| sessions.len())
            .map_err(|_| ApiError::StorePoisoned)
    }

    /// Runs `f` on the session with the given id while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` for an unknown id.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, ApiError> {
        let mut sessions = self.sessions.lock().map_err(|_| ApiError::StorePoisoned)?;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
        Ok(f(session))
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared session store
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tables", get(handlers::get_tables))
        .route("/compute", post(handlers::compute))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/{id}/snapshot", patch(handlers::patch_snapshot))
        .route("/sessions/{id}/next", post(handlers::next_stage))
        .route("/sessions/{id}/previous", post(handlers::previous_stage))
        .route("/sessions/{id}/restart", post(handlers::restart_session))
        .route("/sessions/{id}/results", get(handlers::get_results))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
