//! HTTP Server for the retrotext API.
//!
//! # API Endpoints
//!
//! | Method | Path                    | Description                          |
//! |--------|-------------------------|--------------------------------------|
//! | GET    | `/`                     | Service index                        |
//! | GET    | `/health`               | Health check                         |
//! | POST   | `/transform`            | Transform text (also `/api/transform`) |
//! | GET    | `/api/transformations`  | List the catalog                     |
//! | GET    | `/api/logs`             | SSE stream of activity               |

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    middleware,
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, log_info, log_info_indent, log_success, log_warning, LOG_BROADCASTER};
use super::middleware::log_requests;
use super::types::{error_response, preview, TransformRequest, TransformResponse, TransformationList};
use crate::error::{ServerResult, TransformError};
use crate::transform::Transformer;

pub const SERVICE_NAME: &str = "retrotext";

type ApiError = (StatusCode, Json<Value>);

/// Build the application router
pub fn router(transformer: Transformer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/transform", post(transform_text))
        .route("/api/transform", post(transform_text))
        .route("/api/transformations", get(list_transformations))
        .route("/api/logs", get(sse_logs))
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(transformer)
}

/// Start the HTTP server and run until Ctrl-C / SIGTERM
pub async fn start_server(addr: &str, transformer: Transformer) -> ServerResult<()> {
    let app = router(transformer);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_info(format!("Retrotext server running on http://{}", addr));
    log_info_indent("POST /transform           - Transform text", 1);
    log_info_indent("GET  /api/transformations - List transformations", 1);
    log_info_indent("GET  /api/logs            - SSE activity stream", 1);
    log_info_indent("GET  /health              - Health check", 1);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    log_info("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

/// Service index
async fn index() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "transform": "POST /transform",
            "transformations": "GET /api/transformations",
            "logs": "GET /api/logs (SSE)",
            "health": "GET /health"
        }
    }))
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_transformations() -> Json<TransformationList> {
    Json(TransformationList::catalog())
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        // Lagged receivers skip what they missed
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

fn bad_request(err: &TransformError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(error_response(&err.to_string())))
}

/// Transform endpoint
async fn transform_text(
    State(transformer): State<Transformer>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Json<TransformResponse>, ApiError> {
    tracing::info!("Text transformation request received");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::BytesRejection(rejection)) => {
            let status = rejection.status();
            log_warning(format!("Request body could not be read: {}", rejection.body_text()));
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "Request body too large".to_string()
            } else {
                rejection.body_text()
            };
            return Err((status, Json(error_response(&message))));
        }
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            TransformRequest::default()
        }
    };

    let seed = request.seed();
    let (text, name) = match (request.text, request.transformation) {
        (Some(text), Some(name)) => (text, name),
        _ => {
            log_warning("Invalid transformation request - missing text or transformation type");
            return Err(bad_request(&TransformError::MissingInput));
        }
    };

    let seed = seed.map_err(|e| {
        log_warning(format!("Invalid transformation request - {}", e));
        bad_request(&e)
    })?;

    tracing::info!(
        "Transformation request - Type: '{}', Text: '{}'",
        name,
        preview(&text)
    );
    tracing::debug!("Full text length: {} characters", text.chars().count());

    let result = transformer
        .transform_seeded(&text, &name, seed)
        .map_err(|e| {
            log_error(format!("Transformation failed - Type: '{}', Error: {}", name, e));
            bad_request(&e)
        })?;

    log_success(format!("Transformation '{}' completed successfully", name));
    tracing::debug!("Result length: {} characters", result.chars().count());

    Ok(Json(TransformResponse::new(text, result, name)))
}

async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
