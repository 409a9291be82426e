use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);

/// Relay settings, read from the environment
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub addr: SocketAddr,
}

impl RelayConfig {
    /// `OPENAI_API_KEY`, `RELAY_UPSTREAM_URL`, `RELAY_ADDR`
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let upstream_url = std::env::var("RELAY_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let addr = match std::env::var("RELAY_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => SocketAddr::from(DEFAULT_ADDR),
        };

        Ok(Self {
            api_key,
            upstream_url,
            addr,
        })
    }
}

#[derive(Clone)]
pub struct RelayState {
    pub api_key: Option<String>,
    pub upstream_url: String,
    client: reqwest::Client,
}

impl RelayState {
    pub fn new(api_key: Option<String>, upstream_url: impl Into<String>) -> Self {
        Self {
            api_key,
            upstream_url: upstream_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl From<&RelayConfig> for RelayState {
    fn from(config: &RelayConfig) -> Self {
        Self::new(config.api_key.clone(), config.upstream_url.clone())
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing OpenAI API key")]
    MissingApiKey,

    #[error("request body is not JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = match &self {
            RelayError::MissingApiKey => "Missing OpenAI API key",
            RelayError::InvalidBody(_) | RelayError::Upstream(_) => {
                error!("[RELAY] {}", self);
                "Something went wrong"
            }
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}

pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/gpt-move", post(gpt_move))
        .with_state(state)
}

/// Forward the body to the provider and hand back whatever JSON it returns
async fn gpt_move(State(state): State<RelayState>, body: Bytes) -> Result<Json<Value>, RelayError> {
    let api_key = state.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

    let request_body: Value = if body.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body)?
    };

    let response = state
        .client
        .post(&state.upstream_url)
        .bearer_auth(api_key)
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("[RELAY] Upstream answered {}", status);
    }

    let data: Value = response.json().await?;
    info!("[RELAY] Relayed completion ({})", status);
    Ok(Json(data))
}
