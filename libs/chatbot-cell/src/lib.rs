// =====================================================================================
// CHATBOT CELL - RULE-BASED HEALTH ASSISTANT
// =====================================================================================
//
// Answers canned clinic FAQs. A message is lowercased and checked against an
// ordered keyword rule table; the first matching rule supplies the reply and
// anything unmatched gets a generic fallback.
//
// =====================================================================================

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ChatbotError;
pub use models::{ClassificationResult, RuleDefinition, RulesDocument};
pub use services::{IntentMatcher, Rule};

pub use router::create_chatbot_router;
pub use handlers::ChatbotHandlers;
