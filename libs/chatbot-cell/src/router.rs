// =====================================================================================
// CHATBOT CELL ROUTER
// =====================================================================================

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{chat, chatbot_health, classify_message, list_intents, ChatbotHandlers};

pub fn create_chatbot_router(handlers: Arc<ChatbotHandlers>) -> Router {
    // Public: the assistant answers anonymous visitors.
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/classify", post(classify_message))
        .route("/chat/intents", get(list_intents))
        .route("/chat/health", get(chatbot_health))
        .with_state(handlers)
}
