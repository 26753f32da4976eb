use axum::body::{to_bytes, Body};
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::Json;
use matrix_sssp::web::api::{
    compute_paths, create_graph, get_graph, get_session, health_check, list_sessions, run_paths,
    AppState,
};
use matrix_sssp::web::models::{
    CreateGraphRequest, MatrixPathsRequest, PathsRequest, PathsResponse,
};
use matrix_sssp::web::server::{build_app, ServerConfig};
use tower::ServiceExt;
use uuid::Uuid;

const MATRIX: &str = ";A;B;C;D\nA;;1;3;1\nB;1;;;\nC;3;;;1\nD;1;;1;\n";

#[tokio::test]
async fn test_session_lifecycle() {
    let state = AppState::default();

    let Json(session) = create_graph(
        State(state.clone()),
        Json(CreateGraphRequest { matrix: MATRIX.to_string() }),
    )
    .await
    .unwrap();
    assert_eq!(session.node_ids, vec!["A", "B", "C", "D"]);
    assert_eq!(session.edge_count, 8);
    assert!(session.rendered.starts_with("A [totalDistance: 0] B:1, C:3, D:1\n"));

    let Json(graph) = get_graph(State(state.clone()), Path(session.id)).await.unwrap();
    assert_eq!(graph.nodes.len(), 4);
    assert_eq!(graph.links.len(), 8);

    let Json(response) = run_paths(
        State(state.clone()),
        Path(session.id),
        Json(PathsRequest { start: "A".to_string() }),
    )
    .await
    .unwrap();
    let c = &response.nodes[2];
    assert_eq!(c.id, "C");
    assert_eq!(c.distance, 2);
    assert_eq!(c.previous.as_deref(), Some("D"));
    assert_eq!(c.path, "A --(1)-> D --(1)-> C");
    assert_eq!(c.route, vec!["A", "D", "C"]);
    assert_eq!(response.nodes[0].path, "A: is start node");

    let Json(stored) = get_session(State(state.clone()), Path(session.id)).await.unwrap();
    assert_eq!(
        stored.last_result.map(|result| result.execution_id),
        Some(response.execution_id)
    );

    let Json(ids) = list_sessions(State(state)).await.unwrap();
    assert_eq!(ids, vec![session.id]);
}

#[tokio::test]
async fn test_errors_map_to_status_codes() {
    let state = AppState::default();

    let (status, Json(body)) = create_graph(
        State(state.clone()),
        Json(CreateGraphRequest { matrix: ";A;B\nA;;1\n".to_string() }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "malformed_input");

    let (status, _) = get_graph(State(state.clone()), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, Json(body)) = compute_paths(Json(MatrixPathsRequest {
        matrix: MATRIX.to_string(),
        start: "Q".to_string(),
    }))
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "node_not_found");

    let (status, Json(body)) = compute_paths(Json(MatrixPathsRequest {
        matrix: ";A;B;C\nA;;1;\nB;1;;\nC;;;1\n".to_string(),
        start: "A".to_string(),
    }))
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.details, Some(serde_json::json!({ "unreached": ["C"] })));
}

#[tokio::test]
async fn test_session_limit() {
    let state = AppState::new(&ServerConfig {
        max_sessions: 1,
        ..Default::default()
    });
    let request = || Json(CreateGraphRequest { matrix: MATRIX.to_string() });

    assert!(create_graph(State(state.clone()), request()).await.is_ok());
    let (status, _) = create_graph(State(state), request()).await.unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_huge_session_timeout_keeps_sessions() {
    let state = AppState::new(&ServerConfig {
        session_timeout_minutes: u64::MAX,
        ..Default::default()
    });
    let request = || Json(CreateGraphRequest { matrix: MATRIX.to_string() });

    let Json(first) = create_graph(State(state.clone()), request()).await.unwrap();
    let Json(second) = create_graph(State(state.clone()), request()).await.unwrap();

    let Json(mut ids) = list_sessions(State(state)).await.unwrap();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_health_check() {
    let Json(body) = health_check().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_router_computes_paths() {
    let app = build_app(&ServerConfig::default());
    let body = serde_json::json!({ "matrix": MATRIX, "start": "D" }).to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/paths")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let paths: PathsResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(paths.start, "D");
    assert_eq!(paths.finalization_order, vec!["D", "A", "C", "B"]);
}
