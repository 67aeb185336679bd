//! Play book HTTP service.
//!
//! ```bash
//! curl http://127.0.0.1:8001/api/
//! curl -X POST http://127.0.0.1:8001/api/recommend-play \
//!   -H "Content-Type: application/json" \
//!   -d '{"yard_position": 85, "down": "4th", "yard_gain": "medium"}'
//! ```
//!
//! Request bodies are validated against the same contract types the client
//! sends: a missing field, an unknown down or yard gain label, or a yard line
//! outside 0..=100 is a 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pc_core::contract::{API_ROOT_MESSAGE, API_ROOT_PATH, RECOMMEND_PLAY_PATH};
use pc_core::{PlayBook, RecommendPlayRequest};
use serde_json::json;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub const BIND_ENV: &str = "PLAYCALL_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:8001";

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("{var}='{value}' is not a socket address")]
    InvalidBind { var: &'static str, value: String },
    #[error("bind failed: {0}")]
    Bind(std::io::Error),
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8001)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServeError> {
        match env::var(BIND_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(raw.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(bind: &str) -> Result<Self, ServeError> {
        bind.parse()
            .map(|bind| Self { bind })
            .map_err(|_| ServeError::InvalidBind {
                var: BIND_ENV,
                value: bind.to_string(),
            })
    }
}

pub fn router() -> Router {
    router_with(PlayBook::standard())
}

pub fn router_with(playbook: PlayBook) -> Router {
    Router::new()
        .route(API_ROOT_PATH, get(api_root))
        .route(RECOMMEND_PLAY_PATH, post(recommend_play))
        .with_state(playbook)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn api_root() -> Json<serde_json::Value> {
    Json(json!({ "message": API_ROOT_MESSAGE }))
}

async fn recommend_play(
    State(playbook): State<PlayBook>,
    payload: Result<Json<RecommendPlayRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(status = %rejection.status(), error = %rejection.body_text(), "rejected request");
            return (rejection.status(), Json(json!({ "error": rejection.body_text() })))
                .into_response();
        }
    };

    let recommendation = playbook.recommend(&request.situation());
    (StatusCode::OK, Json(recommendation)).into_response()
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(ServeError::Bind)?;
    info!(addr = %config.bind, "play book service listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(ServeError::Serve)
}
