use axum::body::Body;
use axum::http::{Request, StatusCode};
use config_lsp::config::ServerConfig;
use config_lsp::server::{AppState, router};
use tower::ServiceExt;

fn app() -> axum::Router {
    router(AppState {
        config: ServerConfig::default(),
    })
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_lsp_route_requires_websocket_upgrade() {
    let response = app()
        .oneshot(Request::builder().uri("/lsp").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
