//! Chat bridge relaying user messages to the external AI service
use axum::{extract::State, response::Json, routing::post, Router};
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::config::AiServiceConfig;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// HTTP relay to the AI service. The service interprets the message and may
/// create tasks on its own; the bridge is a pass-through and never inspects
/// the reply.
pub struct ChatBridge {
    client: reqwest::Client,
    base_url: String,
}

impl ChatBridge {
    pub fn new(config: &AiServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Forwards the message and returns the AI service's JSON body untouched.
    /// One attempt per call; the client timeout bounds the wait.
    pub async fn send_message(&self, message: &str) -> Result<Value, reqwest::Error> {
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

/// Handler for chat messages. Any upstream failure collapses to a fixed
/// `AiServiceUnavailable` response; the cause stays in the server log.
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<Value>, ApiError> {
    match state.chat_bridge.send_message(&payload.message).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!("Error calling AI service: {}", e);
            Err(ApiError::AiServiceUnavailable)
        }
    }
}

/// Configure chat bridge routes
pub fn configure_chat_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(handle_chat))
}
