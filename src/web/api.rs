use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::{parse_adjacency_matrix, Dijkstra, Error};

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    session_timeout: chrono::Duration,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: config.max_sessions,
            session_timeout: session_timeout(config.session_timeout_minutes),
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    /// Stores a session after dropping expired ones
    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.lock_sessions()?;
        let now = Utc::now();
        let timeout = self.session_timeout;
        sessions.retain(|_, existing| now - existing.created_at < timeout);

        if sessions.len() >= self.max_sessions {
            log::warn!("Rejecting new session, {} sessions active", sessions.len());
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be active", self.max_sessions),
            ));
        }

        sessions.insert(session.id, session);
        Ok(())
    }

    fn session_graph(&self, session_id: Uuid) -> Result<DirectedGraph, ApiError> {
        let sessions = self.lock_sessions()?;
        sessions
            .get(&session_id)
            .map(|session| session.graph.clone())
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/paths", post(run_paths))
        .route("/api/paths", post(compute_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Load an adjacency matrix into a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> ApiResult<Session> {
    let graph = parse_adjacency_matrix(&request.matrix).map_err(|err| error_response(&err))?;
    let session = Session::new(graph);
    state.insert_session(session.clone())?;

    log::info!("Created session {} with {} nodes", session.id, session.node_ids.len());
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<WebGraph> {
    let graph = state.session_graph(session_id)?;
    Ok(Json(WebGraph::from(&graph)))
}

/// Compute shortest paths on a stored graph
pub async fn run_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathsRequest>,
) -> ApiResult<PathsResponse> {
    let graph = state.session_graph(session_id)?;
    let response = shortest_paths_response(&graph, &request.start)?;

    // Update session with result
    {
        let mut sessions = state.lock_sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Load a matrix and compute shortest paths without creating a session
pub async fn compute_paths(Json(request): Json<MatrixPathsRequest>) -> ApiResult<PathsResponse> {
    let graph = parse_adjacency_matrix(&request.matrix).map_err(|err| error_response(&err))?;
    Ok(Json(shortest_paths_response(&graph, &request.start)?))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.lock_sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Session> {
    let sessions = state.lock_sessions()?;
    sessions
        .get(&session_id)
        .cloned()
        .map(Json)
        .ok_or_else(session_not_found)
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Converts the configured timeout, saturating at the largest span chrono can represent
fn session_timeout(minutes: u64) -> chrono::Duration {
    const MAX_MINUTES: i64 = i64::MAX / 60_000;
    let minutes = i64::try_from(minutes).unwrap_or(MAX_MINUTES).min(MAX_MINUTES);
    chrono::Duration::minutes(minutes)
}

fn shortest_paths_response(graph: &DirectedGraph, start: &str) -> Result<PathsResponse, ApiError> {
    let started = Instant::now();
    let paths = Dijkstra::new()
        .compute(graph, start)
        .map_err(|err| error_response(&err))?;
    Ok(PathsResponse::new(&paths, started.elapsed()))
}

/// Maps a library error onto an HTTP status and error body
pub fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
        Error::MalformedInput(_) | Error::DuplicateNode(_) | Error::UnknownNode(_) => {
            (StatusCode::BAD_REQUEST, "malformed_input")
        }
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "node_not_found"),
        Error::Unreachable { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "unreachable"),
    };

    let details = match err {
        Error::Unreachable { unreached, .. } => Some(serde_json::json!({ "unreached": unreached })),
        _ => None,
    };

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}
