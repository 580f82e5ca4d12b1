use super::fixtures;
use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn handle_assess(Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    match payload["input"].as_str() {
        Some("weak") => (
            StatusCode::OK,
            Json(serde_json::to_value(fixtures::named("WeakApp", 40)).unwrap()),
        ),
        Some("broken") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "evaluation pipeline unavailable"})),
        ),
        _ => (StatusCode::OK, Json(fixtures::seven_zip_json())),
    }
}

async fn handle_history() -> Json<Value> {
    Json(json!([
        fixtures::seven_zip_json(),
        serde_json::to_value(fixtures::named("Zoom", 64)).unwrap()
    ]))
}

/// Starts an in-process evaluation backend and returns its base URL
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/assess", post(handle_assess))
        .route("/api/history", get(handle_history));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}
