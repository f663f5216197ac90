// =====================================================================================
// CHATBOT CELL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::{debug, instrument};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::error::ChatbotError;
use crate::models::{ChatResponse, ChatbotHealthResponse, ClassificationResult, IntentsResponse};
use crate::services::IntentMatcher;

pub struct ChatbotHandlers {
    matcher: Arc<IntentMatcher>,
}

impl ChatbotHandlers {
    pub fn new(matcher: Arc<IntentMatcher>) -> Self {
        Self { matcher }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ChatbotError> {
        Ok(Self::new(Arc::new(IntentMatcher::from_config(config)?)))
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }
}

impl Default for ChatbotHandlers {
    fn default() -> Self {
        Self::new(Arc::new(IntentMatcher::with_default_rules()))
    }
}

/// Pulls `message` out of a chat request body.
///
/// An empty body, a missing `message`, a non-string `message` or a non-object
/// body all read as the empty message. Only bytes that are not JSON are rejected.
pub fn extract_message(body: &[u8]) -> Result<String, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Request body is not valid JSON: {}", e)))?;

    Ok(value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

// =====================================================================================
// CHAT ENDPOINTS
// =====================================================================================

#[instrument(skip(handlers, body))]
pub async fn chat(
    State(handlers): State<Arc<ChatbotHandlers>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let message = extract_message(&body)?;
    let response = handlers.matcher.classify(&message);

    debug!("Answered chat message of {} chars", message.chars().count());

    Ok(Json(ChatResponse {
        response: response.to_string(),
    }))
}

#[instrument(skip(handlers, body))]
pub async fn classify_message(
    State(handlers): State<Arc<ChatbotHandlers>>,
    body: Bytes,
) -> Result<Json<ClassificationResult>, AppError> {
    let message = extract_message(&body)?;
    let result = handlers.matcher.classify_detailed(&message);

    debug!(
        "Classified message of {} chars as {}",
        message.chars().count(),
        result.intent.as_deref().unwrap_or("fallback")
    );

    Ok(Json(result))
}

#[instrument(skip(handlers))]
pub async fn list_intents(State(handlers): State<Arc<ChatbotHandlers>>) -> Json<IntentsResponse> {
    let intents = handlers.matcher.intents();
    let total = intents.len();

    Json(IntentsResponse { intents, total })
}

#[instrument(skip(handlers))]
pub async fn chatbot_health(
    State(handlers): State<Arc<ChatbotHandlers>>,
) -> Json<ChatbotHealthResponse> {
    Json(ChatbotHealthResponse {
        status: "healthy".to_string(),
        rules_loaded: handlers.matcher.len(),
    })
}
