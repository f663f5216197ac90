// =====================================================================================
// CHATBOT CELL MODELS
// =====================================================================================

use serde::{Deserialize, Serialize};

// =====================================================================================
// RULE MODELS
// =====================================================================================

/// Declarative form of a rule. Each keyword is matched literally as a
/// substring of the lowercased message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub intent: String,
    pub keywords: Vec<String>,
    pub response: String,
}

impl RuleDefinition {
    pub fn new(intent: &str, keywords: &[&str], response: &str) -> Self {
        Self {
            intent: intent.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
        }
    }
}

/// On-disk rules document, an ordered rule list plus an optional fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesDocument {
    #[serde(default)]
    pub fallback: Option<String>,
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub matched: bool,
    pub intent: Option<String>,
    pub response: String,
}

// =====================================================================================
// API MODELS
// =====================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentsResponse {
    pub intents: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotHealthResponse {
    pub status: String,
    pub rules_loaded: usize,
}
