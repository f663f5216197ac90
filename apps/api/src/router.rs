use std::sync::Arc;

use axum::{routing::get, Router};

use chatbot_cell::{create_chatbot_router, ChatbotHandlers};

pub fn create_router(chatbot: Arc<ChatbotHandlers>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Assistant API is running!" }))
        .nest("/api", create_chatbot_router(chatbot))
}
