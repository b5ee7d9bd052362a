//! HTTP Routes
//!
//! Hands raw request bodies to the [`Handler`] and writes its outcome back
//! unchanged. Store I/O is blocking, so it runs on tokio's blocking pool.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use bytes::Bytes;

use crate::config::Config;
use crate::handler::Handler;
use crate::protocol::{encode_error, ErrorBody, Outcome, Status};

/// Entry page served when no index file is configured
const DEFAULT_INDEX: &str = "<!DOCTYPE html>\n<html><head><title>docstore</title></head>\
<body><p>docstore is running. POST to /LoadFile or /SaveFile.</p></body></html>\n";

/// Shared state for all routes
#[derive(Debug)]
pub struct AppState {
    handler: Handler,
    index_path: Option<PathBuf>,
}

/// Build the HTTP router
///
/// `/GetFile` and `/UpdateFile` serve older editors: `/GetFile` answers with
/// the `json_content` field they read.
pub fn router(handler: Handler, config: &Config) -> Router {
    let state = Arc::new(AppState {
        handler,
        index_path: config.index_path.clone(),
    });

    Router::new()
        .route("/", get(index))
        .route("/LoadFile", post(load_file))
        .route("/SaveFile", post(save_file))
        .route("/GetFile", post(get_file))
        .route("/UpdateFile", post(save_file))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}

/// Map an outcome status to an HTTP status code
pub fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::BadRequest => StatusCode::BAD_REQUEST,
        Status::NotFound => StatusCode::NOT_FOUND,
        Status::Error => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn load_file(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let handler = state.handler.clone();
    run_handler(move || handler.load(&body)).await
}

async fn get_file(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let handler = state.handler.clone();
    run_handler(move || handler.load_legacy(&body)).await
}

async fn save_file(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let handler = state.handler.clone();
    run_handler(move || handler.save(&body)).await
}

async fn run_handler<F>(f: F) -> Response
where
    F: FnOnce() -> Outcome + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => {
            tracing::error!("Handler task failed: {}", e);
            let body = encode_error(&ErrorBody {
                error: "internal_error".to_string(),
                message: e.to_string(),
            });
            json_response(StatusCode::INTERNAL_SERVER_ERROR, Bytes::from(body))
        }
    }
}

fn outcome_response(outcome: Outcome) -> Response {
    json_response(status_code(outcome.status), outcome.body)
}

fn json_response(status: StatusCode, body: Bytes) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    let Some(path) = &state.index_path else {
        return Html(DEFAULT_INDEX).into_response();
    };

    match tokio::fs::read(path).await {
        Ok(page) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            page,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Entry page {} not found", path.display());
            (StatusCode::NOT_FOUND, "entry page not found").into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to read entry page {}: {}", path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "entry page unavailable").into_response()
        }
    }
}
